//! Board model for the Network game.
//!
//! Coordinates are `(x, y)` with both in `0..8`. Black connects the top and
//! bottom edges (`y = 0` to `y = 7`), White connects the left and right
//! edges (`x = 0` to `x = 7`). Each color is barred from the other's goal
//! areas, and the four corners hold permanent `Corner` chips.

pub mod cell;
pub mod grid;
pub mod moves;

pub use cell::{Cell, Coord, Edge};
pub use grid::Board;
pub use moves::{Move, MoveKind};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetError;

pub const BOARD_SIZE: i32 = 8;
/// Minimum number of chips in a network.
pub const NETWORK_SIZE: usize = 6;
/// Placed-chip count at which a color switches from ADD to STEP moves.
pub const MAX_STEPS: u32 = 10;
/// Decimal packing base for cell ids (`x * ID_OFFSET + y`).
pub const ID_OFFSET: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Wire value: 0 for black, 1 for white.
    pub fn as_wire(self) -> i32 {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// True when `pos` lies in one of this color's own goal areas.
    pub fn is_goal(self, pos: Coord) -> bool {
        match self {
            Color::Black => pos.y == 0 || pos.y == BOARD_SIZE - 1,
            Color::White => pos.x == 0 || pos.x == BOARD_SIZE - 1,
        }
    }

    /// True when `pos` lies in this color's goal area on `side`.
    pub fn is_goal_side(self, pos: Coord, side: GoalSide) -> bool {
        let line = match side {
            GoalSide::Start => 0,
            GoalSide::Target => BOARD_SIZE - 1,
        };
        match self {
            Color::Black => pos.y == line,
            Color::White => pos.x == line,
        }
    }
}

impl TryFrom<i32> for Color {
    type Error = NetError;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Color::Black),
            1 => Ok(Color::White),
            other => Err(NetError::InvalidColor(other)),
        }
    }
}

impl FromStr for Color {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" | "0" => Ok(Color::Black),
            "w" | "white" | "1" => Ok(Color::White),
            _ => Err(NetError::UnknownColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Content of an occupied board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chip {
    Black,
    White,
    Corner,
}

impl Chip {
    pub fn color(self) -> Option<Color> {
        match self {
            Chip::Black => Some(Color::Black),
            Chip::White => Some(Color::White),
            Chip::Corner => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Chip::Black => 'B',
            Chip::White => 'W',
            Chip::Corner => '#',
        }
    }
}

impl From<Color> for Chip {
    fn from(c: Color) -> Self {
        match c {
            Color::Black => Chip::Black,
            Color::White => Chip::White,
        }
    }
}

/// Which of a color's two goal areas: `Start` is the `0` edge, `Target` the `7` edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalSide {
    Start,
    Target,
}
