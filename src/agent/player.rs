//! Player trait for checkers agents.
//!
//! A player is anything that can be asked to pick the next position: an AI
//! searching the game tree, a scripted replay, or a UI front-end translating
//! human input. The engine works in whole board states rather than moves,
//! so a player answers with the successor position it wants to reach.

use crate::game_repr::Board;

/// Trait for entities that can pick the next board position.
///
/// `choose_position` may block while the player computes or waits for input.
/// Returning `None` means the player has no legal continuation; by the rules
/// of checkers that is a loss for the side to move, and the caller decides
/// how to wind the game down.
pub trait Player {
    fn choose_position(&mut self, board: &Board) -> Option<Board>;

    /// Display name, used in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
