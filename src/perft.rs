use crate::board::{Board, Color};

// Clone-per-child perft over the legal move tree, colors alternating
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = board.available_moves(color);
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = board.clone();
        child.apply_move(&m, color);
        nodes += perft(&child, color.other(), depth - 1);
    }
    nodes
}
