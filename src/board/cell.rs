use std::cmp::Ordering;
use std::fmt;

use super::{Chip, BOARD_SIZE, ID_OFFSET};

/// Board position. Out-of-range values are representable so that wire input
/// can be validated rather than trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    pub fn is_corner(self) -> bool {
        let edge = |v: i32| v == 0 || v == BOARD_SIZE - 1;
        edge(self.x) && edge(self.y)
    }

    /// True for any position on the outer ring of the board.
    pub fn on_edge(self) -> bool {
        self.x == 0 || self.x == BOARD_SIZE - 1 || self.y == 0 || self.y == BOARD_SIZE - 1
    }

    /// Decimal-packed id `x * 10 + y`, only meaningful in bounds.
    #[inline]
    pub fn id(self) -> usize {
        (self.x * ID_OFFSET + self.y) as usize
    }

    pub fn from_id(id: usize) -> Self {
        let id = id as i32;
        Self { x: id / ID_OFFSET, y: id % ID_OFFSET }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An occupied position. Cells are built fresh per query and copied, never
/// shared by reference with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub pos: Coord,
    pub chip: Chip,
}

impl Cell {
    pub fn new(x: i32, y: i32, chip: Chip) -> Self {
        Self { pos: Coord::new(x, y), chip }
    }

    #[inline]
    pub fn x(&self) -> i32 { self.pos.x }

    #[inline]
    pub fn y(&self) -> i32 { self.pos.y }

    #[inline]
    pub fn id(&self) -> usize { self.pos.id() }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id()).then(self.chip.cmp(&other.chip))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chip.symbol(), self.id())
    }
}

/// Unobstructed link between two same-colored cells.
/// Ordered by `(from.id, to.id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub from: Cell,
    pub to: Cell,
}

impl Edge {
    pub fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// Self-loop used to seed a path search at `cell`.
    pub fn seed(cell: Cell) -> Self {
        Self { from: cell, to: cell }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
