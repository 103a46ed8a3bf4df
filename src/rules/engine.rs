//! The input-resolution state machine.
//!
//! A move is built up one input at a time. Every call replays the whole
//! input sequence from the current position, so the same prefix always gets
//! the same answer:
//!
//! - no input: the squares a move can start from
//! - a valid but incomplete prefix: the legal next inputs
//! - a complete move: the events, with the position updated
//! - anything else: `InvalidInput`, with the position untouched
//!
//! ## Stages
//!
//! 1. Start location: an awake mon or free mana of the active color.
//! 2. Target location: must match one of the start's options. When a bomb
//!    carrier could either bomb a square or use its own action on it, the
//!    bomb is offered behind a trailing `SelectBomb`. The action is offered
//!    as its own follow-up locations, or behind a trailing `Cancel` when it
//!    needs nothing more. A modifier is therefore always the last input.
//! 3. Follow-ups: a demon's extra step, a spirit's destination, or a
//!    potion-or-bomb choice. These are computed on a scratch copy with the
//!    events decided so far already applied.

use tracing::debug;

use super::outcome::{InvalidReason, NextInput, NextInputKind, Output};
use crate::core::{decode_inputs, Input, Item, Location, Modifier, Position};
use crate::events::Event;

/// What a partially resolved move is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pending {
    /// A bare mon landed on a bomb-or-potion base and must choose.
    SelectConsumable { mover: Item, at: Location },
    /// A demon can't stay where it attacked and must step off.
    DemonStep { demon: Item, from: Location },
    /// A spirit picked up `item` at `target` and must place it.
    SpiritMove {
        spirit: Item,
        target: Location,
        item: Item,
    },
}

/// Progress of a move after one more input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Done(Vec<Event>),
    Partial { events: Vec<Event>, pending: Pending },
}

impl Position {
    /// Feed a move given as locations plus an optional trailing modifier.
    pub fn process(&mut self, locations: &[Location], modifier: Option<Modifier>) -> Output {
        let mut inputs: Vec<Input> = locations.iter().copied().map(Input::Location).collect();
        if let Some(modifier) = modifier {
            inputs.push(Input::Modifier(modifier));
        }
        self.process_inputs(&inputs)
    }

    /// Feed a move given in string form, e.g. `l10,3;l9,3`.
    ///
    /// Unparsable strings are rejected as `MalformedInput`.
    pub fn process_fen(&mut self, input_fen: &str) -> Output {
        match decode_inputs(input_fen) {
            Ok(inputs) => self.process_inputs(&inputs),
            Err(_) => Output::InvalidInput(InvalidReason::MalformedInput),
        }
    }

    /// Resolve an input sequence. Only an `Events` result changes the position.
    pub fn process_inputs(&mut self, inputs: &[Input]) -> Output {
        match self.resolve(inputs) {
            Ok(Resolution::Start(locations)) => Output::LocationsToStartFrom(locations),
            Ok(Resolution::Options(options)) => Output::NextInputOptions(options),
            Ok(Resolution::Resolved { position, events }) => {
                debug!(
                    turn = self.turn_number,
                    color = %self.active_color,
                    events = events.len(),
                    "Move resolved"
                );
                if position.active_color != self.active_color {
                    debug!(
                        turn = position.turn_number,
                        color = %position.active_color,
                        "Turn handed over"
                    );
                }
                *self = position;
                Output::Events(events)
            }
            Err(reason) => Output::InvalidInput(reason),
        }
    }

    /// Resolve without committing anything.
    #[must_use]
    pub fn preview_inputs(&self, inputs: &[Input]) -> Output {
        self.clone().process_inputs(inputs)
    }

    fn resolve(&self, inputs: &[Input]) -> Result<Resolution, InvalidReason> {
        if self.is_game_over() {
            return Err(InvalidReason::GameOver);
        }

        let Some(first) = inputs.first() else {
            return Ok(Resolution::Start(self.start_locations()));
        };
        let start = first.location().ok_or(InvalidReason::MalformedInput)?;
        let item = self.check_start(start)?;
        let options = self.second_input_options(start, &item);
        if options.is_empty() {
            return Err(InvalidReason::NothingToMove);
        }

        let Some(second) = inputs.get(1) else {
            return Ok(Resolution::Options(options));
        };
        let target = second.location().ok_or(InvalidReason::MalformedInput)?;
        let matching: Vec<NextInput> = options
            .into_iter()
            .filter(|option| option.location == Some(target))
            .collect();

        let mut cursor = 2;
        let chosen = match matching.as_slice() {
            [] => return Err(InvalidReason::UnreachableTarget),
            [only] => *only,
            several => {
                let (bomb, action) = split_bomb_choice(several)?;
                let mut preview = self.clone();
                let action_step = preview.perform(action.kind, start, target)?;
                match (inputs.get(cursor), &action_step) {
                    (None, Step::Done(_)) => {
                        return Ok(Resolution::Options(vec![
                            bomb.with_modifier(Modifier::SelectBomb),
                            action.with_modifier(Modifier::Cancel),
                        ]));
                    }
                    (None, Step::Partial { pending, .. }) => {
                        let mut prompts = vec![bomb.with_modifier(Modifier::SelectBomb)];
                        prompts.extend(preview.follow_up_options(pending));
                        return Ok(Resolution::Options(prompts));
                    }
                    (Some(Input::Modifier(Modifier::SelectBomb)), _) => {
                        cursor += 1;
                        bomb
                    }
                    (Some(Input::Modifier(Modifier::Cancel)), Step::Done(_)) => {
                        cursor += 1;
                        action
                    }
                    // The location answers the action's own follow-up.
                    (Some(Input::Location(_)), Step::Partial { .. }) => action,
                    (Some(_), _) => return Err(InvalidReason::MalformedInput),
                }
            }
        };

        let mut scratch = self.clone();
        let mut events = Vec::new();
        let mut step = scratch.perform(chosen.kind, start, target)?;

        loop {
            match step {
                Step::Done(done) => {
                    events.extend(done);
                    break;
                }
                Step::Partial {
                    events: partial,
                    pending,
                } => {
                    events.extend(partial);
                    let follow_ups = scratch.follow_up_options(&pending);
                    let Some(next) = inputs.get(cursor) else {
                        return Ok(Resolution::Options(follow_ups));
                    };
                    cursor += 1;
                    if !follow_ups
                        .iter()
                        .any(|option| option.input() == Some(*next))
                    {
                        return Err(match next {
                            Input::Location(_) => InvalidReason::UnreachableTarget,
                            Input::Modifier(_) => InvalidReason::MalformedInput,
                        });
                    }
                    step = scratch.continue_pending(pending, *next)?;
                }
            }
        }

        if cursor < inputs.len() {
            return Err(InvalidReason::MalformedInput);
        }

        scratch.finish_move(&mut events);
        Ok(Resolution::Resolved {
            position: scratch,
            events,
        })
    }
}

enum Resolution {
    Start(Vec<Location>),
    Options(Vec<NextInput>),
    Resolved { position: Position, events: Vec<Event> },
}

/// Split same-square options into the bomb attack and the carrier's action.
fn split_bomb_choice(options: &[NextInput]) -> Result<(NextInput, NextInput), InvalidReason> {
    let bomb = options
        .iter()
        .find(|option| option.kind == NextInputKind::BombAttack);
    let action = options
        .iter()
        .find(|option| option.kind != NextInputKind::BombAttack);
    match (bomb, action) {
        (Some(bomb), Some(action)) => Ok((*bomb, *action)),
        _ => Err(InvalidReason::MalformedInput),
    }
}
