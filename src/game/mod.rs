//! A game in progress with its takeback history.
//!
//! [`Position`] is the pure state; `Game` wraps it with what a host needs to
//! undo moves:
//!
//! - the positions before each move of the current turn, so the player to
//!   move can take those moves back one at a time
//! - the position at the start of every turn reached, so a whole turn can be
//!   dropped with [`Game::without_last_turn`]
//!
//! Positions share structure, so keeping them is cheap. A move that hands the
//! turn over clears the per-move history: finished turns can't be taken back,
//! only dropped whole.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, GameRng, Input, Location, Modifier, Position};
use crate::error::DecodeError;
use crate::rules::{Automove, Output};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    position: Position,
    /// Positions before each move of the current turn, oldest first.
    takebacks: Vec<Position>,
    /// Positions at the start of each turn reached, oldest first.
    turn_starts: Vec<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening, no history.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Self {
            turn_starts: vec![position.clone()],
            takebacks: Vec::new(),
            position,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, DecodeError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.position.fen()
    }

    // === Moves ===

    pub fn process(&mut self, locations: &[Location], modifier: Option<Modifier>) -> Output {
        let before = self.position.clone();
        let output = self.position.process(locations, modifier);
        self.remember(before, &output);
        output
    }

    pub fn process_inputs(&mut self, inputs: &[Input]) -> Output {
        let before = self.position.clone();
        let output = self.position.process_inputs(inputs);
        self.remember(before, &output);
        output
    }

    pub fn process_fen(&mut self, input_fen: &str) -> Output {
        let before = self.position.clone();
        let output = self.position.process_fen(input_fen);
        self.remember(before, &output);
        output
    }

    pub fn automove(&mut self, rng: &mut GameRng) -> Automove {
        let before = self.position.clone();
        let played = self.position.automove(rng);
        self.remember(before, &played.output);
        played
    }

    fn remember(&mut self, before: Position, output: &Output) {
        if output.events().is_none() {
            return;
        }
        let same_turn = self.position.turn_number() == before.turn_number()
            && self.position.active_color() == before.active_color();
        if same_turn {
            self.takebacks.push(before);
        } else {
            self.takebacks.clear();
            self.turn_starts.push(self.position.clone());
        }
    }

    // === Takeback ===

    /// Whether `color` is to move and has a move this turn to take back.
    #[must_use]
    pub fn can_takeback(&self, color: Color) -> bool {
        !self.position.is_game_over()
            && self.position.active_color() == color
            && !self.takebacks.is_empty()
    }

    /// Undo the last move of the current turn. Returns `false` when there is
    /// nothing to undo.
    pub fn takeback(&mut self) -> bool {
        if !self.can_takeback(self.position.active_color()) {
            return false;
        }
        let Some(previous) = self.takebacks.pop() else {
            return false;
        };
        debug!(
            turn = previous.turn_number(),
            color = %previous.active_color(),
            "Took back move"
        );
        self.position = previous;
        true
    }

    /// Position strings a takeback would restore, oldest first.
    #[must_use]
    pub fn takeback_fens(&self) -> Vec<String> {
        self.takebacks.iter().map(Position::fen).collect()
    }

    /// This game rewound to the start of the previous turn, dropping the
    /// current turn as well. `None` while still in the first turn reached.
    #[must_use]
    pub fn without_last_turn(&self) -> Option<Game> {
        if self.turn_starts.len() <= 1 {
            return None;
        }
        let mut turn_starts = self.turn_starts.clone();
        turn_starts.pop();
        let position = turn_starts.last()?.clone();
        Some(Game {
            position,
            takebacks: Vec::new(),
            turn_starts,
        })
    }
}
