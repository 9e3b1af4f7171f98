use crate::game_repr::{Board, MoveMap, Piece};

/// Hook into move enumeration, called once per (piece, move set) while the
/// search expands a position.
///
/// Implementations must treat the callback as read-only: the search result
/// may not depend on what an observer does. The default method body is a
/// no-op so headless callers can implement the trait with an empty impl.
pub trait SearchObserver {
    fn piece_considered(&mut self, _board: &Board, _piece: &Piece, _moves: &MoveMap) {}
}

/// Observer that ignores everything. The stand-in for a renderer when the
/// engine runs headless or under test.
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Observer that logs every considered piece and its destinations at trace
/// level. Turn on with `RUST_LOG=checkers_engine=trace`.
pub struct TraceObserver;

impl SearchObserver for TraceObserver {
    fn piece_considered(&mut self, _board: &Board, piece: &Piece, moves: &MoveMap) {
        log::trace!(
            "{:?} {} at ({}, {}): {} destination(s) {:?}",
            piece.color,
            if piece.king { "king" } else { "man" },
            piece.row,
            piece.col,
            moves.len(),
            moves.keys().collect::<Vec<_>>(),
        );
    }
}
