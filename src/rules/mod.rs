//! Move rules: the input state machine, option generation, and move effects.
//!
//! The entry points are methods on [`Position`](crate::core::Position):
//! - `process` / `process_inputs` / `process_fen` feed a move
//! - `start_locations` lists where a move can begin
//! - `automove` and `legal_moves` walk the state machine for the caller
//!
//! Per-kind mon behaviour comes from the capability table in
//! [`crate::core::mon`]; nothing here matches on a specific kind.

pub mod apply;
pub mod automove;
pub mod engine;
pub mod options;
pub mod outcome;

pub use automove::Automove;
pub use outcome::{InvalidReason, NextInput, NextInputKind, Output};

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Result of a game, as decided by the judge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Color),
    /// No winner can be established.
    Undetermined,
}

impl GameResult {
    #[must_use]
    pub const fn from_winner(winner: Option<Color>) -> Self {
        match winner {
            Some(color) => GameResult::Winner(color),
            None => GameResult::Undetermined,
        }
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        *self == GameResult::Winner(color)
    }

    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Winner(color) => Some(*color),
            GameResult::Undetermined => None,
        }
    }
}

/// `w`, `b`, or `x` for undetermined.
impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(color) => write!(f, "{}", color.fen_char()),
            GameResult::Undetermined => write!(f, "x"),
        }
    }
}
