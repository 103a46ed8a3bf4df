//! # mons-engine
//!
//! A pure rules engine for Mons, a two-player abstract strategy board game.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: No I/O, no global state, no threads. Hosts (UI,
//!    networking, persistence) exchange plain data and strings with it.
//!
//! 2. **Incremental Input**: A move is built one input at a time. Every
//!    prefix gets a definite answer: where to start, what may follow, the
//!    resulting events, or a typed rejection.
//!
//! 3. **Atomic Moves**: Inputs resolve on a scratch copy. The position only
//!    changes when a move completes.
//!
//! ## Architecture
//!
//! - **Persistent Board**: `im-rs` maps give O(1) clones for scratch copies
//!   and replays.
//!
//! - **Capability Table**: Mon kinds are described by data (action pattern,
//!   effect, carrying, protection) rather than per-kind code.
//!
//! ## Modules
//!
//! - `core`: Geometry, colors, mons, items, board, position, inputs, RNG, configuration
//! - `events`: Events emitted by resolved moves
//! - `rules`: Input state machine, option generation, move effects, automove
//! - `fen`: Canonical position strings
//! - `game`: A position with takeback history
//! - `judge`: Winner reconciliation from two independent histories
//! - `error`: Decoding errors

pub mod core;
pub mod error;
pub mod events;
pub mod fen;
pub mod game;
pub mod judge;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AvailableMoveKind, AvailableMoves, Board, BoardLayout, Color, ColorMap, Consumable, GameRng,
    GameRngState, Input, Item, Location, Mana, Modifier, Mon, MonKind, Position, RulesConfig,
    Square,
};

pub use crate::error::DecodeError;

pub use crate::events::{Event, EventKind};

pub use crate::game::Game;

pub use crate::judge::{verify_moves, winner};

pub use crate::rules::{Automove, GameResult, InvalidReason, NextInput, NextInputKind, Output};
