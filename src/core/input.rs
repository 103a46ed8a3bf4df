//! Player inputs and their string form.
//!
//! A move is described by a sequence of inputs: locations, plus the
//! occasional modifier that settles a choice. The string form writes each
//! input as a short token and joins them with `;`:
//!
//! ```text
//! l10,3;l9,3        two locations
//! l6,0;l5,0;mb      move onto a consumable base and take the bomb
//! ```
//!
//! A flat move log joins several such strings with `-`.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

use super::location::Location;

/// Separator between inputs of one move.
pub const INPUT_SEPARATOR: char = ';';

/// Separator between moves in a flat move log.
pub const MOVE_SEPARATOR: char = '-';

/// A choice attached to a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    SelectPotion,
    SelectBomb,
    Cancel,
}

impl Modifier {
    #[must_use]
    pub const fn fen(self) -> &'static str {
        match self {
            Modifier::SelectPotion => "mp",
            Modifier::SelectBomb => "mb",
            Modifier::Cancel => "mc",
        }
    }

    #[must_use]
    pub fn from_fen(token: &str) -> Option<Self> {
        match token {
            "mp" => Some(Modifier::SelectPotion),
            "mb" => Some(Modifier::SelectBomb),
            "mc" => Some(Modifier::Cancel),
            _ => None,
        }
    }
}

/// One element of a move's input sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    Location(Location),
    Modifier(Modifier),
}

impl Input {
    #[must_use]
    pub fn fen(&self) -> String {
        match self {
            Input::Location(location) => format!("l{},{}", location.i, location.j),
            Input::Modifier(modifier) => modifier.fen().to_string(),
        }
    }

    /// Parse a single token.
    pub fn from_fen(token: &str) -> Result<Self, DecodeError> {
        let malformed = || DecodeError::InvalidInputToken {
            token: token.to_string(),
        };

        if let Some(coordinates) = token.strip_prefix('l') {
            let (i, j) = coordinates.split_once(',').ok_or_else(malformed)?;
            let i = parse_coordinate(i).ok_or_else(malformed)?;
            let j = parse_coordinate(j).ok_or_else(malformed)?;
            let location = Location::new(i, j);
            if !location.is_valid() {
                return Err(malformed());
            }
            return Ok(Input::Location(location));
        }

        Modifier::from_fen(token)
            .map(Input::Modifier)
            .ok_or_else(malformed)
    }

    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        match self {
            Input::Location(location) => Some(*location),
            Input::Modifier(_) => None,
        }
    }
}

fn parse_coordinate(text: &str) -> Option<i32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl From<Location> for Input {
    fn from(location: Location) -> Self {
        Input::Location(location)
    }
}

impl From<Modifier> for Input {
    fn from(modifier: Modifier) -> Self {
        Input::Modifier(modifier)
    }
}

/// Encode a move's inputs as a `;`-joined string.
#[must_use]
pub fn encode_inputs(inputs: &[Input]) -> String {
    inputs
        .iter()
        .map(Input::fen)
        .collect::<Vec<_>>()
        .join(&INPUT_SEPARATOR.to_string())
}

/// Decode a `;`-joined input string. The empty string is the empty move.
pub fn decode_inputs(text: &str) -> Result<Vec<Input>, DecodeError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.split(INPUT_SEPARATOR).map(Input::from_fen).collect()
}

/// Split a flat move log into its per-move input strings.
#[must_use]
pub fn split_move_log(log: &str) -> Vec<&str> {
    if log.is_empty() {
        Vec::new()
    } else {
        log.split(MOVE_SEPARATOR).collect()
    }
}
