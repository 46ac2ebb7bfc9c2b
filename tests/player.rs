use netbot::board::{Color, Move};
use netbot::player::MachinePlayer;

#[test]
fn tracks_both_step_counters() {
    let mut p = MachinePlayer::new(Color::White, 1);
    assert!(p.opponent_move(Move::add(3, 0)));
    assert!(p.force_move(Move::add(0, 3)));
    assert_eq!(p.board().my_steps(), 1);
    assert_eq!(p.board().opp_steps(), 1);
}

#[test]
fn rejected_moves_keep_the_board() {
    let mut p = MachinePlayer::new(Color::Black, 1);
    assert!(p.force_move(Move::add(3, 3)));
    let before = p.board().clone();
    assert!(!p.opponent_move(Move::add(3, 3)));
    assert!(!p.opponent_move(Move::add(4, 0)));
    assert!(!p.opponent_move(Move::Quit));
    assert!(!p.force_move(Move::step(2, 2, 3, 3)));
    pretty_assertions::assert_eq!(p.board(), &before);
}

#[test]
fn from_wire_rejects_unknown_colors() {
    use netbot::error::NetError;
    assert_eq!(MachinePlayer::from_wire(1, 3).map(|p| p.color()).ok(), Some(Color::White));
    let err = MachinePlayer::from_wire(5, 3).err().expect("5 is not a color");
    assert!(matches!(err, NetError::InvalidColor(5)));
    assert_eq!(err.to_string(), "invalid color 5 (expected 0 for black or 1 for white)");
}

#[test]
fn alternating_play_stays_legal() {
    let mut black = MachinePlayer::new(Color::Black, 1);
    let mut white = MachinePlayer::new(Color::White, 1);
    for _ in 0..4 {
        let m = white.choose_move();
        assert!(black.opponent_move(m), "black refused white's {m}");
        let m = black.choose_move();
        assert!(white.opponent_move(m), "white refused black's {m}");
    }
    assert_eq!(black.board().my_steps(), 4);
    assert_eq!(white.board().my_steps(), 4);
    pretty_assertions::assert_eq!(black.board().to_string(), white.board().to_string());
}
