//! Mons: the units each player controls.
//!
//! Per-kind behaviour lives in a static capability table rather than in
//! per-kind code paths, so the rules engine asks `kind.capabilities()`
//! what a mon may do.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::location::{Location, Locations};

/// The five kinds of mon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MonKind {
    Demon,
    Drainer,
    Angel,
    Spirit,
    Mystic,
}

/// Targeting pattern of a kind's special action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionPattern {
    /// Exactly two diagonal steps away.
    DiagonalTwo,
    /// Exactly two orthogonal steps away, with an empty square in between.
    OrthogonalTwo,
    /// Anywhere on the Chebyshev ring of radius two.
    RingTwo,
}

impl ActionPattern {
    /// Candidate target squares from `from`.
    #[must_use]
    pub fn targets(self, from: Location) -> Locations {
        match self {
            ActionPattern::DiagonalTwo => from.diagonal_two(),
            ActionPattern::OrthogonalTwo => from.orthogonal_two(),
            ActionPattern::RingTwo => from.ring_two(),
        }
    }
}

/// What a special action does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionEffect {
    /// Faint an enemy mon in place.
    Faint,
    /// Faint an enemy mon and take its square.
    FaintAndReplace,
    /// Move the targeted item one step.
    MoveTarget,
}

/// Static capabilities of a mon kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Special action, if the kind has one.
    pub action: Option<(ActionPattern, ActionEffect)>,
    /// The action may require a follow-up step by the actor.
    pub can_chain_step: bool,
    /// Can pick up and carry mana.
    pub carries_mana: bool,
    /// Shields adjacent friendly mons from enemy actions.
    pub protects_adjacent: bool,
}

const DEMON: Capabilities = Capabilities {
    action: Some((ActionPattern::OrthogonalTwo, ActionEffect::FaintAndReplace)),
    can_chain_step: true,
    carries_mana: false,
    protects_adjacent: false,
};

const DRAINER: Capabilities = Capabilities {
    action: None,
    can_chain_step: false,
    carries_mana: true,
    protects_adjacent: false,
};

const ANGEL: Capabilities = Capabilities {
    action: None,
    can_chain_step: false,
    carries_mana: false,
    protects_adjacent: true,
};

const SPIRIT: Capabilities = Capabilities {
    action: Some((ActionPattern::RingTwo, ActionEffect::MoveTarget)),
    can_chain_step: false,
    carries_mana: false,
    protects_adjacent: false,
};

const MYSTIC: Capabilities = Capabilities {
    action: Some((ActionPattern::DiagonalTwo, ActionEffect::Faint)),
    can_chain_step: false,
    carries_mana: false,
    protects_adjacent: false,
};

impl MonKind {
    pub const ALL: [MonKind; 5] = [
        MonKind::Demon,
        MonKind::Drainer,
        MonKind::Angel,
        MonKind::Spirit,
        MonKind::Mystic,
    ];

    /// Look up this kind's row in the capability table.
    #[must_use]
    pub const fn capabilities(self) -> &'static Capabilities {
        match self {
            MonKind::Demon => &DEMON,
            MonKind::Drainer => &DRAINER,
            MonKind::Angel => &ANGEL,
            MonKind::Spirit => &SPIRIT,
            MonKind::Mystic => &MYSTIC,
        }
    }

    /// Lowercase FEN letter; white mons use the uppercase form.
    #[must_use]
    pub const fn fen_char(self) -> char {
        match self {
            MonKind::Demon => 'e',
            MonKind::Drainer => 'd',
            MonKind::Angel => 'a',
            MonKind::Spirit => 's',
            MonKind::Mystic => 'y',
        }
    }

    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'e' => Some(MonKind::Demon),
            'd' => Some(MonKind::Drainer),
            'a' => Some(MonKind::Angel),
            's' => Some(MonKind::Spirit),
            'y' => Some(MonKind::Mystic),
            _ => None,
        }
    }
}

/// Longest cooldown a mon can carry. Position strings store it as one digit.
pub const MAX_COOLDOWN: u8 = 9;

/// A single mon.
///
/// A mon is fainted while its cooldown is positive. Fainted mons stay on the
/// board (on their base) and count down at the start of each of their
/// owner's turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mon {
    pub kind: MonKind,
    pub color: Color,
    pub cooldown: u8,
}

impl Mon {
    /// Cooldowns above [`MAX_COOLDOWN`] are capped.
    #[must_use]
    pub const fn new(kind: MonKind, color: Color, cooldown: u8) -> Self {
        let cooldown = if cooldown > MAX_COOLDOWN {
            MAX_COOLDOWN
        } else {
            cooldown
        };
        Self { kind, color, cooldown }
    }

    /// An awake mon with no cooldown.
    #[must_use]
    pub const fn awake(kind: MonKind, color: Color) -> Self {
        Self::new(kind, color, 0)
    }

    #[must_use]
    pub const fn is_fainted(&self) -> bool {
        self.cooldown > 0
    }

    #[must_use]
    pub const fn capabilities(&self) -> &'static Capabilities {
        self.kind.capabilities()
    }

    /// Faint for `turns` of the owner's turns, at most [`MAX_COOLDOWN`].
    pub fn faint(&mut self, turns: u8) {
        self.cooldown = turns.min(MAX_COOLDOWN);
    }

    pub fn decrease_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Same kind and color, ignoring cooldown.
    #[must_use]
    pub fn is_same_mon(&self, other: &Mon) -> bool {
        self.kind == other.kind && self.color == other.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_table() {
        assert!(MonKind::Drainer.capabilities().carries_mana);
        assert!(MonKind::Angel.capabilities().protects_adjacent);
        assert!(MonKind::Demon.capabilities().can_chain_step);
        assert_eq!(MonKind::Angel.capabilities().action, None);

        let with_actions = MonKind::ALL
            .iter()
            .filter(|kind| kind.capabilities().action.is_some())
            .count();
        assert_eq!(with_actions, 3);
    }

    #[test]
    fn test_faint_and_recover() {
        let mut mon = Mon::awake(MonKind::Spirit, Color::White);
        assert!(!mon.is_fainted());

        mon.faint(2);
        assert!(mon.is_fainted());
        mon.decrease_cooldown();
        assert!(mon.is_fainted());
        mon.decrease_cooldown();
        assert!(!mon.is_fainted());

        // Never goes negative
        mon.decrease_cooldown();
        assert_eq!(mon.cooldown, 0);
    }

    #[test]
    fn test_fen_chars_roundtrip() {
        for kind in MonKind::ALL {
            assert_eq!(MonKind::from_fen_char(kind.fen_char()), Some(kind));
            assert_eq!(
                MonKind::from_fen_char(kind.fen_char().to_ascii_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(MonKind::from_fen_char('z'), None);
    }

    #[test]
    fn test_is_same_mon_ignores_cooldown() {
        let a = Mon::new(MonKind::Demon, Color::Black, 0);
        let b = Mon::new(MonKind::Demon, Color::Black, 2);
        let c = Mon::new(MonKind::Demon, Color::White, 0);
        assert!(a.is_same_mon(&b));
        assert!(!a.is_same_mon(&c));
    }

    #[test]
    fn test_cooldown_is_capped() {
        let mut mon = Mon::awake(MonKind::Angel, Color::White);
        mon.faint(12);
        assert_eq!(mon.cooldown, MAX_COOLDOWN);
        assert_eq!(Mon::new(MonKind::Angel, Color::White, 200).cooldown, MAX_COOLDOWN);
    }
}
