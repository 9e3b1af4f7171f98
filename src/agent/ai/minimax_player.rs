//! MinimaxPlayer - checkers AI built on the full-width minimax search.
//!
//! Implements the [`Player`](crate::agent::player::Player) trait and
//! delegates position selection to [`minimax`]. The player owns its search
//! observer, so a UI can be wired in by swapping the observer while tests
//! and headless runs keep the no-op default.
//!
//! # Difficulty Levels
//!
//! Without pruning the tree grows with the full branching factor at every
//! ply, so the usable depths are shallow:
//! - **Easy**: depth 1, picks the immediately best material swing
//! - **Medium**: depth 2
//! - **Hard**: depth 3
//! - **Expert**: depth 4, already seconds per move in the midgame

use std::time::Instant;

use crate::agent::player::Player;
use crate::game_repr::{Board, Color};
use super::minimax::minimax;
use super::observer::{NullObserver, SearchObserver};

/// AI difficulty levels that map to search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Search depth in plies for this difficulty level.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    /// Display name for this difficulty level.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// AI player that picks positions with depth-limited minimax.
///
/// Deterministic: the same position always yields the same chosen successor,
/// because piece enumeration and per-piece move order are fixed.
pub struct MinimaxPlayer {
    /// Side this AI plays and, by the search's convention, the only color
    /// whose moves are enumerated on both minimax branches.
    color: Color,
    difficulty: Difficulty,
    name: String,
    observer: Box<dyn SearchObserver>,
}

impl MinimaxPlayer {
    pub fn new(color: Color, difficulty: Difficulty, name: String) -> Self {
        Self {
            color,
            difficulty,
            name,
            observer: Box::new(NullObserver),
        }
    }

    /// Player with an auto-generated "AI ({difficulty})" name.
    pub fn with_difficulty(color: Color, difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(color, difficulty, name)
    }

    /// Attach a search observer, e.g. a renderer hook or a trace logger.
    pub fn with_observer(mut self, observer: Box<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }
}

impl Player for MinimaxPlayer {
    /// Run one search from `board` and return the chosen successor position.
    ///
    /// Blocking; time grows exponentially with the difficulty's depth.
    /// Returns `None` when this side has no legal move.
    fn choose_position(&mut self, board: &Board) -> Option<Board> {
        let depth = self.difficulty.max_depth();
        let start = Instant::now();

        let (score, best) = minimax(board, depth, true, self.color, self.observer.as_mut());

        log::debug!(
            "[{}] depth {} search finished in {:?}: score {:+.1}, move {}",
            self.name,
            depth,
            start.elapsed(),
            score,
            if best.is_some() { "found" } else { "none" },
        );

        best
    }

    fn name(&self) -> &str {
        &self.name
    }
}
