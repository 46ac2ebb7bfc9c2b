use netbot::board::{Board, Chip, Color, Coord, Move, MoveKind};

// Ten scattered black chips with no two adjacent.
const SPREAD: [(i32, i32); 10] = [(1, 1), (1, 3), (1, 5), (3, 1), (3, 3), (3, 5), (5, 1), (5, 3), (5, 5), (6, 7)];

fn stepping_board() -> Board {
    let mut b = Board::new(Color::Black);
    for &(x, y) in &SPREAD {
        assert!(b.set_cell(x, y, Color::Black));
    }
    b.set_steps(Color::Black, 10);
    b
}

#[test]
fn corners_survive_every_move_kind() {
    let mut b = stepping_board();
    assert!(!b.apply_move(&Move::add(0, 0), Color::White));
    assert!(!b.apply_move(&Move::step(7, 7, 1, 1), Color::Black));
    assert!(!b.apply_move(&Move::step(2, 2, 7, 0), Color::Black));
    for (x, y) in [(0, 0), (0, 7), (7, 0), (7, 7)] {
        assert_eq!(b.cell_at(x, y).map(|c| c.chip), Some(Chip::Corner));
    }
}

#[test]
fn colors_stay_out_of_opponent_goals() {
    let b = Board::new(Color::White);
    for i in 1..7 {
        assert!(!b.is_valid_add(i, 0, Color::White));
        assert!(!b.is_valid_add(i, 7, Color::White));
        assert!(!b.is_valid_add(0, i, Color::Black));
        assert!(!b.is_valid_add(7, i, Color::Black));
        assert!(b.is_valid_add(0, i, Color::White));
        assert!(b.is_valid_add(i, 7, Color::Black));
    }
}

#[test]
fn cluster_rule() {
    let mut b = Board::new(Color::Black);
    assert!(b.set_cell(3, 3, Color::Black));
    // a lone neighbour is fine
    assert!(b.is_valid_add(4, 4, Color::Black));
    assert!(b.set_cell(4, 4, Color::Black));
    // touching a chip that already has a neighbour is not
    assert!(!b.is_valid_add(5, 5, Color::Black));
    // touching both is not
    assert!(!b.is_valid_add(3, 4, Color::Black));
    // other colors do not count
    assert!(b.is_valid_add(5, 5, Color::White));
}

#[test]
fn add_regime_below_ten_chips() {
    let b = Board::new(Color::Black);
    let moves = b.available_moves(Color::Black);
    assert_eq!(moves.len(), 48);
    assert!(moves.iter().all(|m| m.kind() == MoveKind::Add));
    assert!(!b.is_valid_move(&Move::step(2, 2, 1, 1), Color::Black));
}

#[test]
fn step_regime_at_ten_chips() {
    let mut b = stepping_board();
    let moves = b.available_moves(Color::Black);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.kind() == MoveKind::Step));
    assert!(moves.iter().all(|m| b.is_valid_move(m, Color::Black)));
    assert!(!b.is_valid_move(&Move::add(2, 7), Color::Black));
    // stepping onto itself is never offered
    assert!(!moves.contains(&Move::step(1, 1, 1, 1)));

    // (2, 0) touches (1, 1) and (3, 1); vacating (1, 1) leaves a legal pair
    assert!(b.apply_move(&Move::step(2, 0, 1, 1), Color::Black));
    assert_eq!(b.cell(Coord::new(1, 1)), None);
    assert_eq!(b.cell_at(2, 0).map(|c| c.chip), Some(Chip::Black));
    assert_eq!(b.my_steps(), 11);
}

#[test]
fn step_needs_own_source_chip() {
    let b = stepping_board();
    assert!(!b.is_valid_move(&Move::step(2, 7, 4, 4), Color::Black));
    assert!(!b.is_valid_move(&Move::step(2, 7, 0, 0), Color::Black));
}

#[test]
fn illegal_moves_do_not_mutate() {
    let mut b = stepping_board();
    let before = b.clone();
    assert!(!b.apply_move(&Move::step(1, 3, 1, 1), Color::Black));
    assert!(!b.apply_move(&Move::Quit, Color::Black));
    pretty_assertions::assert_eq!(b, before);
}

#[test]
fn display_marks_every_chip() {
    let mut b = Board::new(Color::White);
    assert!(b.set_cell(2, 1, Color::Black));
    assert!(b.set_cell(0, 3, Color::White));
    let expected = "\
#......#
..B.....
........
W.......
........
........
........
#......#
";
    pretty_assertions::assert_eq!(b.to_string(), expected);
}
