use super::*;

// ==================== CAPTURE TESTS ====================

#[test]
fn test_single_jump_over_enemy() {
    let board = board_with(&[(2, 2, Color::White, false), (3, 3, Color::Red, false)]);
    let piece = board.get_piece(2, 2).unwrap();

    let moves = board.get_valid_moves(&piece);

    assert_eq!(moves.len(), 2, "one slide and one jump expected");
    assert!(has_slide(&moves, (3, 1)), "left diagonal is a plain slide");
    assert!(has_jump(&moves, (4, 4), 1), "right diagonal is a jump over the Red man");
    assert!(!moves.contains_key(&(3, 3)), "occupied square is not a destination");

    let captured = &moves[&(4, 4)];
    assert_eq!(captured[0].square(), (3, 3), "the jumped piece is the capture");
}

#[test]
fn test_multi_jump_chain_accumulates_captures() {
    let board = board_with(&[
        (1, 1, Color::White, false),
        (2, 2, Color::Red, false),
        (4, 4, Color::Red, false),
    ]);
    let piece = board.get_piece(1, 1).unwrap();

    let moves = board.get_valid_moves(&piece);

    assert!(has_slide(&moves, (2, 0)));
    assert!(has_jump(&moves, (3, 3), 1), "stopping after the first jump is legal");
    assert!(has_jump(&moves, (5, 5), 2), "the chain captures both Red men");

    let captured: Vec<Square> = moves[&(5, 5)].iter().map(|p| p.square()).collect();
    assert!(captured.contains(&(2, 2)));
    assert!(captured.contains(&(4, 4)));
}

#[test]
fn test_two_enemies_in_a_row_block_the_jump() {
    let board = board_with(&[
        (2, 2, Color::White, false),
        (3, 3, Color::Red, false),
        (4, 4, Color::Red, false),
    ]);
    let piece = board.get_piece(2, 2).unwrap();

    let moves = board.get_valid_moves(&piece);

    assert_eq!(moves.len(), 1, "only the left slide remains");
    assert!(has_slide(&moves, (3, 1)));
}

#[test]
fn test_jump_off_the_board_is_illegal() {
    let board = board_with(&[(2, 6, Color::White, false), (3, 7, Color::Red, false)]);
    let piece = board.get_piece(2, 6).unwrap();

    let moves = board.get_valid_moves(&piece);

    assert_eq!(moves.len(), 1, "the landing square is off the board");
    assert!(has_slide(&moves, (3, 5)));
}

#[test]
fn test_remove_updates_counters() {
    let mut board = board_with(&[
        (2, 2, Color::White, false),
        (3, 3, Color::Red, false),
        (5, 5, Color::Red, true),
    ]);

    let man = board.get_piece(3, 3).unwrap();
    let king = board.get_piece(5, 5).unwrap();
    board.remove(&[man, king]);

    assert_eq!(board.pieces_left(Color::Red), 0);
    assert_eq!(board.kings(Color::Red), 0);
    assert_eq!(board.get_piece(3, 3), None);
    assert_eq!(board.get_piece(5, 5), None);
    assert_eq!(board.pieces_left(Color::White), 1, "White is untouched");
}
