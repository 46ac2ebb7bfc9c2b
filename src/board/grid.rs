use std::fmt;

use super::{Cell, Chip, Color, Coord, Edge, GoalSide, Move, BOARD_SIZE, ID_OFFSET, MAX_STEPS};

/// Ray directions in scan order: S, N, E, W, NW, NE, SW, SE.
const DIRECTIONS: [(i32, i32); 8] = [(0, 1), (0, -1), (1, 0), (-1, 0), (-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Game state as seen by one player: the grid plus both step counters.
///
/// `Board` is plain data and cheap to clone; the search clones it once per
/// expanded node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Chip>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    my_color: Color,
    my_steps: u32,
    opp_steps: u32,
}

impl Board {
    pub fn new(my_color: Color) -> Self {
        let mut cells = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        let last = (BOARD_SIZE - 1) as usize;
        for (x, y) in [(0, 0), (0, last), (last, 0), (last, last)] {
            cells[x][y] = Some(Chip::Corner);
        }
        Self { cells, my_color, my_steps: 0, opp_steps: 0 }
    }

    pub fn my_color(&self) -> Color { self.my_color }
    pub fn opp_color(&self) -> Color { self.my_color.other() }
    pub fn my_steps(&self) -> u32 { self.my_steps }
    pub fn opp_steps(&self) -> u32 { self.opp_steps }

    /// Placed-chip counter for `color`.
    pub fn steps(&self, color: Color) -> u32 {
        if color == self.my_color { self.my_steps } else { self.opp_steps }
    }

    pub fn set_steps(&mut self, color: Color, n: u32) {
        if color == self.my_color { self.my_steps = n; } else { self.opp_steps = n; }
    }

    #[inline]
    fn chip(&self, pos: Coord) -> Option<Chip> {
        if !pos.in_bounds() { return None; }
        self.cells[pos.x as usize][pos.y as usize]
    }

    pub fn is_empty(&self, pos: Coord) -> bool {
        pos.in_bounds() && self.chip(pos).is_none()
    }

    pub fn cell(&self, pos: Coord) -> Option<Cell> {
        self.chip(pos).map(|chip| Cell { pos, chip })
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.cell(Coord::new(x, y))
    }

    pub fn cell_by_id(&self, id: usize) -> Option<Cell> {
        if id > (BOARD_SIZE * ID_OFFSET) as usize { return None; }
        self.cell(Coord::from_id(id))
    }

    /// Places a chip of `color`. Out-of-range and corner positions are refused.
    pub fn set_cell(&mut self, x: i32, y: i32, color: Color) -> bool {
        let pos = Coord::new(x, y);
        if !pos.in_bounds() || pos.is_corner() { return false; }
        self.cells[x as usize][y as usize] = Some(color.into());
        true
    }

    /// Clears a position. Corners and out-of-range positions are left alone.
    pub fn remove(&mut self, pos: Coord) {
        if !pos.in_bounds() || pos.is_corner() { return; }
        self.cells[pos.x as usize][pos.y as usize] = None;
    }

    pub fn remove_cell(&mut self, cell: Cell) {
        self.remove(cell.pos);
    }

    /// Chips of `color` in the 8 positions surrounding `pos`.
    pub fn neighbors(&self, pos: Coord, color: Color) -> Vec<Cell> {
        let want = Chip::from(color);
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|&p| self.chip(p) == Some(want))
            .map(|p| Cell { pos: p, chip: want })
            .collect()
    }

    /// ADD legality for a chip of `color` at `(x, y)`: empty, outside the
    /// other color's goal areas, and no three-chip cluster.
    pub fn is_valid_add(&self, x: i32, y: i32, color: Color) -> bool {
        let pos = Coord::new(x, y);
        if !self.is_empty(pos) { return false; }
        if color.other().is_goal(pos) { return false; }
        let near = self.neighbors(pos, color);
        match near.as_slice() {
            [] => true,
            [only] => self.neighbors(only.pos, color).is_empty(),
            _ => false,
        }
    }

    pub fn is_valid_add_cell(&self, cell: Cell) -> bool {
        match cell.chip.color() {
            Some(color) => self.is_valid_add(cell.x(), cell.y(), color),
            None => false,
        }
    }

    pub fn is_valid_add_move(&self, m: &Move, color: Color) -> bool {
        match *m {
            Move::Add { to } => self.is_valid_add(to.x, to.y, color),
            _ => false,
        }
    }

    /// STEP legality: the target is empty, the source holds a chip of
    /// `color`, and the target is ADD-legal once the source is vacated.
    pub fn is_valid_step_move(&self, m: &Move, color: Color) -> bool {
        let Move::Step { to, from } = *m else { return false };
        if !self.is_empty(to) || self.chip(from) != Some(color.into()) { return false; }
        let mut probe = self.clone();
        probe.remove(from);
        probe.is_valid_add(to.x, to.y, color)
    }

    /// Dispatches on the mover's regime: ADD below `MAX_STEPS`, STEP at or above it.
    pub fn is_valid_move(&self, m: &Move, color: Color) -> bool {
        let steps = self.steps(color);
        match m {
            Move::Add { .. } if steps < MAX_STEPS => self.is_valid_add_move(m, color),
            Move::Step { .. } if steps >= MAX_STEPS => self.is_valid_step_move(m, color),
            _ => false,
        }
    }

    /// Validates and performs `m` for `color`, bumping its step counter.
    /// Returns false and leaves the board untouched when `m` is illegal.
    pub fn apply_move(&mut self, m: &Move, color: Color) -> bool {
        if !self.is_valid_move(m, color) { return false; }
        match *m {
            Move::Add { to } => { self.set_cell(to.x, to.y, color); }
            Move::Step { to, from } => {
                self.remove(from);
                self.set_cell(to.x, to.y, color);
            }
            Move::Quit => return false,
        }
        let steps = self.steps(color);
        self.set_steps(color, steps + 1);
        true
    }

    /// Cells reachable from `cell` along the 8 rays. Each ray stops at the
    /// first occupied position; it counts only if that chip matches `cell`.
    pub fn connection_finder(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(DIRECTIONS.len());
        for &(dx, dy) in &DIRECTIONS {
            let mut p = cell.pos.offset(dx, dy);
            while p.in_bounds() {
                if let Some(chip) = self.chip(p) {
                    if chip == cell.chip { out.push(Cell { pos: p, chip }); }
                    break;
                }
                p = p.offset(dx, dy);
            }
        }
        out
    }

    pub fn edge_list(&self, pos: Coord) -> Vec<Edge> {
        match self.cell(pos) {
            Some(from) => self.connection_finder(from).into_iter().map(|to| Edge::new(from, to)).collect(),
            None => Vec::new(),
        }
    }

    pub fn edge_list_by_id(&self, id: usize) -> Vec<Edge> {
        match self.cell_by_id(id) {
            Some(c) => self.edge_list(c.pos),
            None => Vec::new(),
        }
    }

    /// All chips of `color`, scanned column by column (`x` outer, `y` inner).
    pub fn chips(&self, color: Color) -> impl Iterator<Item = Cell> + '_ {
        let want = Chip::from(color);
        (0..BOARD_SIZE).flat_map(move |x| {
            (0..BOARD_SIZE).filter_map(move |y| {
                let pos = Coord::new(x, y);
                (self.chip(pos) == Some(want)).then_some(Cell { pos, chip: want })
            })
        })
    }

    pub fn start_cells(&self, color: Color) -> Vec<Cell> {
        self.chips(color).filter(|c| color.is_goal_side(c.pos, GoalSide::Start)).collect()
    }

    pub fn target_cells(&self, color: Color) -> Vec<Cell> {
        self.chips(color).filter(|c| color.is_goal_side(c.pos, GoalSide::Target)).collect()
    }

    /// Every empty position where `color` could legally ADD.
    pub fn available_cells(&self, color: Color) -> Vec<Cell> {
        let chip = Chip::from(color);
        let mut out = Vec::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                if self.is_valid_add(x, y, color) { out.push(Cell::new(x, y, chip)); }
            }
        }
        out
    }

    /// Legal moves for `color` under its current regime.
    pub fn available_moves(&self, color: Color) -> Vec<Move> {
        if self.steps(color) < MAX_STEPS {
            return self.available_cells(color).into_iter().map(|c| Move::Add { to: c.pos }).collect();
        }
        let mut moves = Vec::new();
        for src in self.chips(color) {
            let mut probe = self.clone();
            probe.remove(src.pos);
            for dst in probe.available_cells(color) {
                if dst.pos != src.pos {
                    moves.push(Move::Step { to: dst.pos, from: src.pos });
                }
            }
        }
        moves
    }

    /// Number of unordered pairs of mutually visible `color` chips. A pair is
    /// counted from its lexicographically smaller `(x, y)` end only.
    pub fn visible_cells(&self, color: Color) -> i32 {
        let mut pairs = 0;
        for c in self.chips(color) {
            pairs += self
                .connection_finder(c)
                .iter()
                .filter(|o| (o.x(), o.y()) > (c.x(), c.y()))
                .count() as i32;
        }
        pairs
    }

    /// True iff a chip of `color` sits in that color's goal area on `side`.
    pub fn in_goal(&self, color: Color, side: GoalSide) -> bool {
        self.chips(color).any(|c| color.is_goal_side(c.pos, side))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let ch = self.chip(Coord::new(x, y)).map(Chip::symbol).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
