//! Network detection: does a color own a winning chain of chips?
//!
//! A network is at least six same-colored chips, each linked to the next by
//! an unobstructed line, running from the color's start goal area to its
//! target goal area. The path may not pass straight through a chip (no three
//! consecutive chips on one line) and only its endpoints may touch the edge
//! of the board.

pub mod route;
pub mod search;

pub use route::RouteTable;
pub use search::PathSearch;

use crate::board::{Board, Cell, Color, Coord, NETWORK_SIZE};

/// Longest path a search will rebuild: a color never has more than ten chips.
pub const MAX_PATH: usize = 10;

/// First valid network for `color`, trying every (start, target) goal pair.
pub fn find_network(board: &Board, color: Color) -> Option<Vec<Cell>> {
    if board.steps(color) < NETWORK_SIZE as u32 { return None; }
    let starts = board.start_cells(color);
    let targets = board.target_cells(color);
    let mut scratch = PathSearch::new();
    for s in &starts {
        for t in &targets {
            if let Some(path) = scratch.search(s.pos, t.pos, board) {
                return Some(path);
            }
        }
    }
    None
}

pub fn has_network(board: &Board, color: Color) -> bool {
    find_network(board, color).is_some()
}

/// Convenience wrapper running a single search with fresh scratch state.
pub fn search(start: Coord, target: Coord, board: &Board) -> Option<Vec<Cell>> {
    PathSearch::new().search(start, target, board)
}

fn collinear(a: Coord, b: Coord, c: Coord) -> bool {
    (a.x == b.x && b.x == c.x)
        || (a.y == b.y && b.y == c.y)
        || (a.x + a.y == b.x + b.y && b.x + b.y == c.x + c.y)
        || (b.x - a.x == b.y - a.y && c.x - b.x == c.y - b.y)
}

/// Shape check for a candidate path: long enough, turns at every interior
/// chip, and interior chips stay off the board edge.
pub fn is_valid_route(cells: &[Cell]) -> bool {
    if cells.len() < NETWORK_SIZE { return false; }
    cells.windows(3).all(|w| {
        let (a, b, c) = (w[0].pos, w[1].pos, w[2].pos);
        !collinear(a, b, c) && !b.on_edge()
    })
}
