use crate::board::{Board, Color, GoalSide};

// Terminal scores: a completed network is worth the whole integer range.
pub const WIN_SCORE: i32 = i32::MAX;
pub const LOSS_SCORE: i32 = -WIN_SCORE;

const OWN_GOAL_BONUS: i32 = 4;
const OPP_GOAL_PENALTY: i32 = 2;

// Sum of outgoing connections over every chip of `color`.
fn edge_total(board: &Board, color: Color) -> i32 {
    board.chips(color).map(|c| board.connection_finder(c).len() as i32).sum()
}

/// Heuristic score of `board` from `perspective`'s side: visible pairs,
/// goal-area presence and connection counts, each as own minus opponent.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let opp = perspective.other();
    let mut score = board.visible_cells(perspective) - board.visible_cells(opp);
    for side in [GoalSide::Start, GoalSide::Target] {
        if board.in_goal(perspective, side) { score += OWN_GOAL_BONUS; }
        if board.in_goal(opp, side) { score -= OPP_GOAL_PENALTY; }
    }
    score + edge_total(board, perspective) - edge_total(board, opp)
}
