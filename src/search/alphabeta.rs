use log::{debug, trace};

use crate::board::{Board, Color, Move};
use crate::network::has_network;
use crate::search::eval::{evaluate, LOSS_SCORE, WIN_SCORE};

/// A candidate move with its minimax score, always from the board owner's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub mv: Option<Move>,
    pub score: i32,
}

impl BestMove {
    fn terminal(score: i32) -> Self { Self { mv: None, score } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: BestMove,
    pub nodes: u64,
}

/// Minimax with alpha-beta pruning over cloned boards.
///
/// The board's own color maximizes and its opponent minimizes; every score is
/// reported from the board owner's point of view.
#[derive(Debug, Default)]
pub struct Searcher {
    pub(crate) nodes: u64,
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Full-window search for `color` to move on `board`.
    pub fn search_depth(&mut self, board: &Board, color: Color, max_depth: u32) -> SearchResult {
        self.nodes = 0;
        let best = self.minimax(board, color, LOSS_SCORE, WIN_SCORE, 0, max_depth);
        debug!("search {} d{}: best={:?} score={} nodes={}", color, max_depth, best.mv.map(|m| m.to_string()), best.score, self.nodes);
        SearchResult { best, nodes: self.nodes }
    }

    pub fn minimax(&mut self, board: &Board, color: Color, mut alpha: i32, mut beta: i32, depth: u32, max_depth: u32) -> BestMove {
        self.nodes += 1;
        let own = board.my_color();
        let signed = |c: Color| if c == own { WIN_SCORE } else { LOSS_SCORE };

        // mover already won before moving (only meaningful at the root)
        if depth == 0 && has_network(board, color) {
            return BestMove::terminal(signed(color));
        }
        // previous mover completed a network
        if depth > 0 && has_network(board, color.other()) {
            return BestMove::terminal(signed(color.other()));
        }
        if depth > max_depth {
            return BestMove::terminal(evaluate(board, own));
        }

        let moves = board.available_moves(color);
        // no legal move: the mover loses
        let Some(&first) = moves.first() else {
            trace!("{} has no legal move at depth {}", color, depth);
            return BestMove::terminal(signed(color.other()));
        };

        let maximizing = color == own;
        let mut best = BestMove { mv: Some(first), score: if maximizing { alpha } else { beta } };
        for m in moves {
            let mut child = board.clone();
            child.apply_move(&m, color);
            let reply = self.minimax(&child, color.other(), alpha, beta, depth + 1, max_depth);
            if maximizing && reply.score > best.score {
                best = BestMove { mv: Some(m), score: reply.score };
                alpha = reply.score;
            } else if !maximizing && reply.score < best.score {
                best = BestMove { mv: Some(m), score: reply.score };
                beta = reply.score;
            }
            if alpha >= beta { return best; }
        }
        best
    }
}
