//! Static square types.
//!
//! A square's type never changes during a game; it decides where mons may
//! stand, where mana scores, and where things respawn.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::mon::{Mon, MonKind};

/// The fixed role of a board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    #[default]
    Regular,
    ConsumableBase,
    SupermanaBase,
    ManaBase { color: Color },
    ManaPool { color: Color },
    MonBase { kind: MonKind, color: Color },
}

impl Square {
    /// Mana carried or pushed onto a pool scores.
    #[must_use]
    pub const fn is_pool(self) -> bool {
        matches!(self, Square::ManaPool { .. })
    }

    #[must_use]
    pub const fn is_mon_base(self) -> bool {
        matches!(self, Square::MonBase { .. })
    }

    /// Whether `mon` is allowed to stand here at all.
    ///
    /// Mon bases only admit their own mon; supermana-base rules depend on
    /// what the mon carries and are checked by the rules engine.
    #[must_use]
    pub fn admits_mon(self, mon: &Mon) -> bool {
        match self {
            Square::MonBase { kind, color } => mon.kind == kind && mon.color == color,
            _ => true,
        }
    }

    /// Whether `mon` stands on a mon base that isn't its own.
    #[must_use]
    pub fn is_foreign_base_for(self, mon: &Mon) -> bool {
        self.is_mon_base() && !self.admits_mon(mon)
    }

    /// Whether free mana may be moved onto this square.
    #[must_use]
    pub const fn accepts_mana(self) -> bool {
        !matches!(self, Square::MonBase { .. } | Square::SupermanaBase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mon_base_admits_only_owner() {
        let base = Square::MonBase {
            kind: MonKind::Angel,
            color: Color::Black,
        };
        assert!(base.admits_mon(&Mon::awake(MonKind::Angel, Color::Black)));
        assert!(!base.admits_mon(&Mon::awake(MonKind::Angel, Color::White)));
        assert!(!base.admits_mon(&Mon::awake(MonKind::Demon, Color::Black)));
        assert!(base.is_foreign_base_for(&Mon::awake(MonKind::Demon, Color::Black)));
    }

    #[test]
    fn test_mana_acceptance() {
        assert!(Square::Regular.accepts_mana());
        assert!(Square::ManaPool { color: Color::White }.accepts_mana());
        assert!(Square::ConsumableBase.accepts_mana());
        assert!(!Square::SupermanaBase.accepts_mana());
        assert!(!Square::MonBase {
            kind: MonKind::Drainer,
            color: Color::White
        }
        .accepts_mana());
    }

    #[test]
    fn test_default_is_regular() {
        assert_eq!(Square::default(), Square::Regular);
        assert!(!Square::Regular.is_pool());
    }
}
