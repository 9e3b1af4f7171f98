// Full-width Minimax Search
//
// Classic two-branch minimax without alpha-beta pruning: every successor
// position is generated eagerly and searched to a fixed depth, so runtime is
// exponential in depth times branching factor. That keeps the algorithm easy
// to verify and is fine for the shallow lookahead checkers needs.
//
// The search works on whole board states. Expanding a node clones the board
// once per candidate move, applies the move (and any captures) to the clone,
// and recurses; the original board is never mutated. The function returns
// (score, best_board): the best achievable evaluation and the successor
// position that achieves it, or None when the enumerated side has no legal
// move at all.
//
// One deliberate convention: BOTH branches enumerate moves for the same
// color (the AI side). The minimizing branch therefore models "the worst
// position the AI could reach", not the opponent's reply. Callers pass the
// AI color explicitly; see DESIGN.md for the reasoning.

use crate::game_repr::{Board, CaptureList, Color, Piece, Square};
use super::observer::SearchObserver;

/// Evaluation score. Terminal folds start from the infinities, so the score
/// of a node with no legal continuation is `-inf` (maximizing) or `+inf`
/// (minimizing).
pub type Score = f64;

/// Every position reachable from `board` by one legal move of `color`,
/// captures applied, in piece order then per-piece move order.
///
/// The observer is notified once per piece before its moves are simulated.
/// Pieces without moves contribute nothing; if `color` has no pieces or no
/// piece can move, the result is empty.
pub fn get_all_moves(
    board: &Board,
    color: Color,
    observer: &mut dyn SearchObserver,
) -> Vec<Board> {
    let mut positions = Vec::new();

    for piece in board.get_all_pieces(color) {
        let valid_moves = board.get_valid_moves(&piece);
        observer.piece_considered(board, &piece, &valid_moves);

        for (dest, captured) in &valid_moves {
            let mut next = board.clone();
            // The clone is structurally identical, so the piece resolves at
            // the same coordinates. If it doesn't, the board broke its
            // cloning contract and continuing would corrupt the search.
            let shadow = match next.get_piece(piece.row, piece.col) {
                Some(p) => p,
                None => panic!(
                    "cloned board out of sync: no piece at ({}, {})",
                    piece.row, piece.col
                ),
            };
            simulate_move(&shadow, *dest, &mut next, captured);
            positions.push(next);
        }
    }

    positions
}

/// Apply one candidate move to an already-isolated clone: move the piece and
/// take any captured pieces off the board. Mutates `board` destructively, so
/// it must never be handed the live game board.
fn simulate_move(piece: &Piece, dest: Square, board: &mut Board, captured: &CaptureList) {
    board.move_piece(piece, dest.0, dest.1);
    if !captured.is_empty() {
        board.remove(captured);
    }
}

/// Depth-limited minimax over board states.
///
/// Terminal nodes (depth exhausted, or the position already has a winner)
/// evaluate themselves and return `(evaluate(), Some(position))`. Interior
/// nodes fold their children's scores with max or min; the returned board is
/// the LAST candidate whose score ties the running best, which includes the
/// very first candidate since `max(-inf, x) == x`. `depth` is unsigned, so
/// the recursion always bottoms out at the `depth == 0` check.
pub fn minimax(
    position: &Board,
    depth: u8,
    maximizing: bool,
    color: Color,
    observer: &mut dyn SearchObserver,
) -> (Score, Option<Board>) {
    if depth == 0 || position.winner().is_some() {
        return (position.evaluate(), Some(position.clone()));
    }

    if maximizing {
        let mut best_score = Score::NEG_INFINITY;
        let mut best_position = None;

        for candidate in get_all_moves(position, color, observer) {
            let (score, _) = minimax(&candidate, depth - 1, false, color, observer);
            best_score = best_score.max(score);
            if score == best_score {
                best_position = Some(candidate);
            }
        }

        (best_score, best_position)
    } else {
        let mut best_score = Score::INFINITY;
        let mut best_position = None;

        for candidate in get_all_moves(position, color, observer) {
            let (score, _) = minimax(&candidate, depth - 1, true, color, observer);
            best_score = best_score.min(score);
            if score == best_score {
                best_position = Some(candidate);
            }
        }

        (best_score, best_position)
    }
}
