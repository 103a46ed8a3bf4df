//! Core model types: geometry, colors, mons, items, board, position, inputs, RNG.
//!
//! This module contains the data the rules engine works on. It knows what a
//! position looks like but not which moves are legal; that lives in
//! [`crate::rules`].

pub mod board;
pub mod color;
pub mod config;
pub mod input;
pub mod item;
pub mod location;
pub mod mon;
pub mod rng;
pub mod square;
pub mod state;

pub use board::Board;
pub use color::{Color, ColorMap};
pub use config::{BoardLayout, RulesConfig, BOARD_SIZE};
pub use input::{decode_inputs, encode_inputs, split_move_log, Input, Modifier};
pub use item::{Consumable, Item, Mana};
pub use location::{Location, Locations};
pub use mon::{ActionEffect, ActionPattern, Capabilities, Mon, MonKind, MAX_COOLDOWN};
pub use rng::{GameRng, GameRngState};
pub use square::Square;
pub use state::{AvailableMoveKind, AvailableMoves, Position};
