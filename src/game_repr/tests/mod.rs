use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Build a board holding exactly the given pieces.
pub fn board_with(pieces: &[(usize, usize, Color, bool)]) -> Board {
    let mut board = Board::empty();
    for &(row, col, color, king) in pieces {
        board.place(row, col, color, king);
    }
    board
}

/// Check that a piece's move map contains a plain slide to `dest`.
pub fn has_slide(moves: &MoveMap, dest: Square) -> bool {
    moves.get(&dest).is_some_and(|captured| captured.is_empty())
}

/// Check that a piece's move map contains a jump to `dest` capturing
/// exactly `captures` pieces.
pub fn has_jump(moves: &MoveMap, dest: Square, captures: usize) -> bool {
    moves.get(&dest).is_some_and(|captured| captured.len() == captures)
}

// ==================== TEST MODULES ====================

mod captures;
mod winner;
