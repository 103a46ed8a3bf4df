//! Board contents: mana, consumables, and the item occupying a square.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::mon::Mon;

/// A scoring resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mana {
    /// Regular mana with a color affinity.
    Regular(Color),
    /// The unique supermana.
    Supermana,
}

impl Mana {
    /// Points awarded to `player` for scoring this mana.
    ///
    /// Own mana is worth 1; the opponent's mana and the supermana are worth 2.
    #[must_use]
    pub const fn score(self, player: Color) -> u32 {
        match self {
            Mana::Regular(color) => {
                if color.index() == player.index() {
                    1
                } else {
                    2
                }
            }
            Mana::Supermana => 2,
        }
    }

    #[must_use]
    pub const fn is_supermana(self) -> bool {
        matches!(self, Mana::Supermana)
    }
}

/// A one-use item picked up from a consumable base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Consumable {
    Potion,
    Bomb,
    /// A base offering the choice between a potion and a bomb.
    BombOrPotion,
}

/// The single occupant of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Mon { mon: Mon },
    Mana { mana: Mana },
    MonWithMana { mon: Mon, mana: Mana },
    MonWithConsumable { mon: Mon, consumable: Consumable },
    Consumable { consumable: Consumable },
}

impl Item {
    /// The mon on this square, carried items aside.
    #[must_use]
    pub const fn mon(&self) -> Option<&Mon> {
        match self {
            Item::Mon { mon } | Item::MonWithMana { mon, .. } | Item::MonWithConsumable { mon, .. } => {
                Some(mon)
            }
            _ => None,
        }
    }

    /// Mana on this square, free or carried.
    #[must_use]
    pub const fn mana(&self) -> Option<&Mana> {
        match self {
            Item::Mana { mana } | Item::MonWithMana { mana, .. } => Some(mana),
            _ => None,
        }
    }

    /// Consumable on this square, free or carried.
    #[must_use]
    pub const fn consumable(&self) -> Option<&Consumable> {
        match self {
            Item::MonWithConsumable { consumable, .. } | Item::Consumable { consumable } => {
                Some(consumable)
            }
            _ => None,
        }
    }

    /// A mon carrying nothing.
    #[must_use]
    pub const fn is_bare_mon(&self) -> bool {
        matches!(self, Item::Mon { .. })
    }

    /// Whether this item carries a bomb.
    #[must_use]
    pub const fn carries_bomb(&self) -> bool {
        matches!(
            self,
            Item::MonWithConsumable {
                consumable: Consumable::Bomb,
                ..
            }
        )
    }

    /// Replace the mon, keeping whatever it carries.
    #[must_use]
    pub const fn with_mon(self, mon: Mon) -> Item {
        match self {
            Item::MonWithMana { mana, .. } => Item::MonWithMana { mon, mana },
            Item::MonWithConsumable { consumable, .. } => Item::MonWithConsumable { mon, consumable },
            _ => Item::Mon { mon },
        }
    }
}
