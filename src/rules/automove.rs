//! Random legal moves and move enumeration.
//!
//! Both walk the input state machine from an empty input. `automove`
//! follows one random path with a seeded [`GameRng`]; `legal_moves`
//! enumerates complete input sequences depth-first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::outcome::{InvalidReason, NextInput, NextInputKind, Output};
use crate::core::{encode_inputs, GameRng, Input, Modifier, Position};

/// A move picked by [`Position::automove`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automove {
    /// The final output: `Events` on success, `InvalidInput` if the active
    /// color had nothing to do.
    pub output: Output,
    /// The inputs that produced it.
    pub inputs: Vec<Input>,
}

impl Automove {
    /// The inputs in string form, suitable for a move log.
    #[must_use]
    pub fn input_fen(&self) -> String {
        encode_inputs(&self.inputs)
    }
}

impl Position {
    /// Play one random legal move and apply it.
    ///
    /// Picks uniformly among start locations and then among the prompted
    /// options until the move resolves. The `Cancel` pickup prompt is skipped
    /// so the walk always ends in a resolved move when one exists.
    pub fn automove(&mut self, rng: &mut GameRng) -> Automove {
        let mut inputs = Vec::new();

        loop {
            let output = self.process_inputs(&inputs);
            if matches!(output, Output::Events(_) | Output::InvalidInput(_)) {
                debug!(inputs = %encode_inputs(&inputs), "Automove finished");
                return Automove { output, inputs };
            }

            let choices: Vec<Input> = match &output {
                Output::LocationsToStartFrom(locations) => {
                    locations.iter().copied().map(Input::Location).collect()
                }
                Output::NextInputOptions(options) => options
                    .iter()
                    .filter(|option| !is_pickup_cancel(option))
                    .filter_map(NextInput::input)
                    .collect(),
                Output::Events(_) | Output::InvalidInput(_) => Vec::new(),
            };

            match rng.choose(&choices) {
                Some(input) => inputs.push(*input),
                None => {
                    return Automove {
                        output: Output::InvalidInput(InvalidReason::NothingToMove),
                        inputs,
                    }
                }
            }
        }
    }

    /// Up to `limit` complete input sequences that resolve from here.
    ///
    /// Sequences are produced in the order of start locations and prompts,
    /// so the result is deterministic.
    #[must_use]
    pub fn legal_moves(&self, limit: usize) -> Vec<Vec<Input>> {
        let mut moves = Vec::new();
        let mut prefix = Vec::new();
        self.collect_moves(&mut prefix, limit, &mut moves);
        moves
    }

    fn collect_moves(&self, prefix: &mut Vec<Input>, limit: usize, out: &mut Vec<Vec<Input>>) {
        if out.len() >= limit {
            return;
        }

        let next: Vec<Input> = match self.preview_inputs(prefix) {
            Output::Events(_) => {
                out.push(prefix.clone());
                return;
            }
            Output::InvalidInput(_) => return,
            Output::LocationsToStartFrom(locations) => {
                locations.into_iter().map(Input::Location).collect()
            }
            Output::NextInputOptions(options) => {
                options.iter().filter_map(|option| option.input()).collect()
            }
        };

        for input in next {
            prefix.push(input);
            self.collect_moves(prefix, limit, out);
            prefix.pop();
        }
    }
}

/// `Cancel` on a bomb-or-potion choice aborts the move instead of finishing it.
fn is_pickup_cancel(option: &NextInput) -> bool {
    option.kind == NextInputKind::SelectConsumable && option.modifier == Some(Modifier::Cancel)
}
