//! Decoding errors.
//!
//! Rejected moves are not errors: they come back as
//! [`Output::InvalidInput`](crate::rules::Output::InvalidInput). The only
//! fallible operations are the string decoders, which report what was
//! structurally wrong with the text.

use derive_more::{Display, Error};

use crate::core::{Color, MonKind};

/// A serialized position or input string that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum DecodeError {
    #[display("Expected 10 space-separated fields, found {}", found)]
    FieldCount { found: usize },

    #[display("Field {} is not a non-negative number: {:?}", field, value)]
    InvalidNumber { field: &'static str, value: String },

    #[display("Turn number must start at 1")]
    ZeroTurn,

    #[display("Unknown active color {:?}", value)]
    InvalidColor { value: String },

    #[display("Expected 11 board rows, found {}", found)]
    RowCount { found: usize },

    #[display("Row {} spans {} columns instead of 11", row, width)]
    RowWidth { row: usize, width: usize },

    #[display("Malformed item token {:?} in row {}", token, row)]
    InvalidItemToken { row: usize, token: String },

    #[display("More than one supermana on the board")]
    DuplicateSupermana,

    #[display("Two {:?} {:?} mons on the board", color, kind)]
    DuplicateMon { kind: MonKind, color: Color },

    #[display("Malformed input token {:?}", token)]
    InvalidInputToken { token: String },
}
