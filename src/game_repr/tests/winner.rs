use super::*;

// ==================== WINNER TESTS ====================

#[test]
fn test_no_winner_while_both_sides_have_pieces() {
    let board = board_with(&[(2, 2, Color::White, false), (5, 5, Color::Red, false)]);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_white_wins_when_red_is_wiped_out() {
    let board = board_with(&[(2, 2, Color::White, false)]);
    assert_eq!(board.winner(), Some(Color::White));
}

#[test]
fn test_red_wins_when_white_is_wiped_out() {
    let board = board_with(&[(5, 5, Color::Red, true)]);
    assert_eq!(board.winner(), Some(Color::Red));
}

#[test]
fn test_capturing_the_last_piece_decides_the_game() {
    let mut board = board_with(&[(2, 0, Color::White, false), (3, 1, Color::Red, false)]);

    let red = board.get_piece(3, 1).unwrap();
    let white = board.get_piece(2, 0).unwrap();
    board.move_piece(&white, 4, 2);
    board.remove(&[red]);

    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.evaluate(), 1.0);
}
