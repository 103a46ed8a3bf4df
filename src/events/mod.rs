//! Events emitted by resolved moves.
//!
//! A successful `process` call returns the ordered list of everything that
//! happened: the move itself, its side effects (pickups, faints, dropped
//! mana), and the resulting events (`MonAwake`, `NextTurn`, `GameOver`).
//! Hosts replay these to animate the board; the position has already been
//! updated by the time they are returned.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Item, Location, Mana, Mon};

/// Something that happened while resolving a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    MonMove { item: Item, from: Location, to: Location },
    ManaMove { mana: Mana, from: Location, to: Location },
    ManaScored { mana: Mana, at: Location },
    MysticAction { mystic: Mon, from: Location, to: Location },
    DemonAction { demon: Mon, from: Location, to: Location },
    DemonAdditionalStep { demon: Mon, from: Location, to: Location },
    SpiritTargetMove { item: Item, from: Location, to: Location },
    PickupBomb { by: Mon, at: Location },
    PickupPotion { by: Item, at: Location },
    PickupMana { mana: Mana, by: Mon, at: Location },
    MonFainted { mon: Mon, from: Location, to: Location },
    ManaDropped { mana: Mana, at: Location },
    SupermanaBackToBase { from: Location, to: Location },
    BombAttack { by: Mon, from: Location, to: Location },
    MonAwake { mon: Mon, at: Location },
    BombExplosion { at: Location },
    NextTurn { color: Color },
    GameOver { winner: Color },
}

/// Fieldless discriminant of [`Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    MonMove,
    ManaMove,
    ManaScored,
    MysticAction,
    DemonAction,
    DemonAdditionalStep,
    SpiritTargetMove,
    PickupBomb,
    PickupPotion,
    PickupMana,
    MonFainted,
    ManaDropped,
    SupermanaBackToBase,
    BombAttack,
    MonAwake,
    BombExplosion,
    NextTurn,
    GameOver,
}

impl Event {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::MonMove { .. } => EventKind::MonMove,
            Event::ManaMove { .. } => EventKind::ManaMove,
            Event::ManaScored { .. } => EventKind::ManaScored,
            Event::MysticAction { .. } => EventKind::MysticAction,
            Event::DemonAction { .. } => EventKind::DemonAction,
            Event::DemonAdditionalStep { .. } => EventKind::DemonAdditionalStep,
            Event::SpiritTargetMove { .. } => EventKind::SpiritTargetMove,
            Event::PickupBomb { .. } => EventKind::PickupBomb,
            Event::PickupPotion { .. } => EventKind::PickupPotion,
            Event::PickupMana { .. } => EventKind::PickupMana,
            Event::MonFainted { .. } => EventKind::MonFainted,
            Event::ManaDropped { .. } => EventKind::ManaDropped,
            Event::SupermanaBackToBase { .. } => EventKind::SupermanaBackToBase,
            Event::BombAttack { .. } => EventKind::BombAttack,
            Event::MonAwake { .. } => EventKind::MonAwake,
            Event::BombExplosion { .. } => EventKind::BombExplosion,
            Event::NextTurn { .. } => EventKind::NextTurn,
            Event::GameOver { .. } => EventKind::GameOver,
        }
    }
}

/// Discriminants of a list of events, in order.
#[must_use]
pub fn kinds(events: &[Event]) -> Vec<EventKind> {
    events.iter().map(Event::kind).collect()
}
