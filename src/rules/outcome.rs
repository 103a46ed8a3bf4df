//! Results of feeding inputs to the state machine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::{Input, Item, Location, Modifier};
use crate::events::Event;

/// Why an input sequence was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum InvalidReason {
    #[display("The game is over")]
    GameOver,
    #[display("That piece belongs to the other player")]
    WrongColor,
    #[display("That mon is fainted")]
    CooldownActive,
    #[display("Nothing there can move")]
    NothingToMove,
    #[display("That square can't be reached")]
    UnreachableTarget,
    #[display("Unexpected input")]
    MalformedInput,
    #[display("The move was cancelled")]
    Cancelled,
}

/// The kind of a prompted next input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextInputKind {
    MonMove,
    ManaMove,
    MysticAction,
    DemonAction,
    DemonAdditionalStep,
    SpiritTargetCapture,
    SpiritTargetMove,
    SelectConsumable,
    BombAttack,
}

/// One legal continuation of the current input prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NextInput {
    pub kind: NextInputKind,
    pub location: Option<Location>,
    pub modifier: Option<Modifier>,
    /// The item performing the move, when there is one.
    pub actor_mon_item: Option<Item>,
}

impl NextInput {
    #[must_use]
    pub const fn at(kind: NextInputKind, location: Location, actor: Option<Item>) -> Self {
        Self {
            kind,
            location: Some(location),
            modifier: None,
            actor_mon_item: actor,
        }
    }

    #[must_use]
    pub const fn choose(kind: NextInputKind, modifier: Modifier, actor: Option<Item>) -> Self {
        Self {
            kind,
            location: None,
            modifier: Some(modifier),
            actor_mon_item: actor,
        }
    }

    /// Attach a disambiguating modifier to a location prompt.
    #[must_use]
    pub const fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// The input to append to select this option: the modifier if present,
    /// otherwise the location.
    #[must_use]
    pub fn input(&self) -> Option<Input> {
        match (self.modifier, self.location) {
            (Some(modifier), _) => Some(Input::Modifier(modifier)),
            (None, Some(location)) => Some(Input::Location(location)),
            (None, None) => None,
        }
    }
}

/// Outcome of a `process` call. Exactly one per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Rejected; the position is untouched.
    InvalidInput(InvalidReason),
    /// Empty input: squares a move can start from, sorted.
    LocationsToStartFrom(Vec<Location>),
    /// Valid but incomplete prefix: the legal continuations.
    NextInputOptions(Vec<NextInput>),
    /// Resolved and applied.
    Events(Vec<Event>),
}

impl Output {
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Output::InvalidInput(_))
    }

    /// The events, if the move resolved.
    #[must_use]
    pub fn events(&self) -> Option<&[Event]> {
        match self {
            Output::Events(events) => Some(events),
            _ => None,
        }
    }

    #[must_use]
    pub fn options(&self) -> Option<&[NextInput]> {
        match self {
            Output::NextInputOptions(options) => Some(options),
            _ => None,
        }
    }
}
