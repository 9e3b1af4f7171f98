// AI Agent - depth-limited minimax over board states
//
// This module implements a classical checkers AI using plain full-width
// minimax: every legal successor position is generated and searched to a
// fixed depth, with a static material evaluation at the leaves.
//
// Key properties:
// - Deterministic (piece enumeration and per-piece move order are fixed)
// - Exhaustive within the depth bound: no pruning, no caching
// - Works on cloned board values, never on the live game board
// - Search progress is reported through an injectable observer, so the
//   engine runs headless by default and a UI can attach without touching
//   the search itself

mod minimax;
mod minimax_player;
mod observer;

pub use minimax::{get_all_moves, minimax, Score};
pub use minimax_player::{Difficulty, MinimaxPlayer};
pub use observer::{NullObserver, SearchObserver, TraceObserver};
