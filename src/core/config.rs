//! Rules configuration and the static board layout.
//!
//! ## RulesConfig
//!
//! Per-turn budgets, the winning score, and a few tunable constants. The
//! default is the standard game; builder-style `with_*` setters derive
//! variants for tests and experiments.
//!
//! ## BoardLayout
//!
//! The fixed square types and the opening placement. There is a single
//! standard layout, built once and shared.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::color::Color;
use super::item::{Consumable, Item, Mana};
use super::location::Location;
use super::mon::{Mon, MonKind, MAX_COOLDOWN};
use super::square::Square;

/// Side length of the square board.
pub const BOARD_SIZE: i32 = 11;

/// Tunable game rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Score that ends the game.
    pub target_score: u32,
    /// Mon moves allowed per turn.
    pub mons_moves_per_turn: u32,
    /// Mana moves allowed per turn. Making one ends the turn.
    pub mana_moves_per_turn: u32,
    /// Actions allowed per turn before potions are spent.
    pub actions_per_turn: u32,
    /// Mon moves allowed on the first turn of the game.
    pub opening_mon_moves: u32,
    /// Cooldown a mon receives when it faints.
    pub faint_cooldown: u8,
    /// Chebyshev reach of a bomb attack.
    pub bomb_range: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            target_score: 5,
            mons_moves_per_turn: 5,
            mana_moves_per_turn: 1,
            actions_per_turn: 1,
            opening_mon_moves: 1,
            faint_cooldown: 2,
            bomb_range: 3,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = score;
        self
    }

    #[must_use]
    pub fn with_mons_moves_per_turn(mut self, moves: u32) -> Self {
        self.mons_moves_per_turn = moves;
        self
    }

    #[must_use]
    pub fn with_mana_moves_per_turn(mut self, moves: u32) -> Self {
        self.mana_moves_per_turn = moves;
        self
    }

    #[must_use]
    pub fn with_actions_per_turn(mut self, actions: u32) -> Self {
        self.actions_per_turn = actions;
        self
    }

    #[must_use]
    pub fn with_opening_mon_moves(mut self, moves: u32) -> Self {
        self.opening_mon_moves = moves;
        self
    }

    /// Capped at [`MAX_COOLDOWN`] so cooldowns stay one FEN digit.
    #[must_use]
    pub fn with_faint_cooldown(mut self, cooldown: u8) -> Self {
        self.faint_cooldown = cooldown.min(MAX_COOLDOWN);
        self
    }

    #[must_use]
    pub fn with_bomb_range(mut self, range: i32) -> Self {
        self.bomb_range = range;
        self
    }

    /// Mon moves allowed on turn `turn_number`.
    #[must_use]
    pub const fn mon_moves_for_turn(&self, turn_number: u32) -> u32 {
        if turn_number == 1 {
            self.opening_mon_moves
        } else {
            self.mons_moves_per_turn
        }
    }
}

/// Static square types plus the opening placement.
#[derive(Clone, Debug)]
pub struct BoardLayout {
    squares: FxHashMap<Location, Square>,
    supermana_base: Location,
}

const MON_BASES: [(MonKind, Color, Location); 10] = [
    (MonKind::Mystic, Color::Black, Location::new(0, 3)),
    (MonKind::Spirit, Color::Black, Location::new(0, 4)),
    (MonKind::Drainer, Color::Black, Location::new(0, 5)),
    (MonKind::Angel, Color::Black, Location::new(0, 6)),
    (MonKind::Demon, Color::Black, Location::new(0, 7)),
    (MonKind::Demon, Color::White, Location::new(10, 3)),
    (MonKind::Angel, Color::White, Location::new(10, 4)),
    (MonKind::Drainer, Color::White, Location::new(10, 5)),
    (MonKind::Spirit, Color::White, Location::new(10, 6)),
    (MonKind::Mystic, Color::White, Location::new(10, 7)),
];

const MANA_BASES: [(Color, Location); 10] = [
    (Color::Black, Location::new(3, 4)),
    (Color::Black, Location::new(3, 6)),
    (Color::Black, Location::new(4, 3)),
    (Color::Black, Location::new(4, 5)),
    (Color::Black, Location::new(4, 7)),
    (Color::White, Location::new(7, 4)),
    (Color::White, Location::new(7, 6)),
    (Color::White, Location::new(6, 3)),
    (Color::White, Location::new(6, 5)),
    (Color::White, Location::new(6, 7)),
];

const MANA_POOLS: [(Color, Location); 4] = [
    (Color::Black, Location::new(0, 0)),
    (Color::Black, Location::new(0, 10)),
    (Color::White, Location::new(10, 0)),
    (Color::White, Location::new(10, 10)),
];

const CONSUMABLE_BASES: [Location; 2] = [Location::new(5, 0), Location::new(5, 10)];

const SUPERMANA_BASE: Location = Location::new(5, 5);

impl BoardLayout {
    /// The shared standard layout.
    #[must_use]
    pub fn standard() -> &'static BoardLayout {
        static LAYOUT: OnceLock<BoardLayout> = OnceLock::new();
        LAYOUT.get_or_init(BoardLayout::build_standard)
    }

    fn build_standard() -> Self {
        let mut squares = FxHashMap::default();
        for (kind, color, location) in MON_BASES {
            squares.insert(location, Square::MonBase { kind, color });
        }
        for (color, location) in MANA_BASES {
            squares.insert(location, Square::ManaBase { color });
        }
        for (color, location) in MANA_POOLS {
            squares.insert(location, Square::ManaPool { color });
        }
        for location in CONSUMABLE_BASES {
            squares.insert(location, Square::ConsumableBase);
        }
        squares.insert(SUPERMANA_BASE, Square::SupermanaBase);

        Self {
            squares,
            supermana_base: SUPERMANA_BASE,
        }
    }

    /// Square type at `location`; anything unlisted is regular.
    #[must_use]
    pub fn square(&self, location: Location) -> Square {
        self.squares.get(&location).copied().unwrap_or_default()
    }

    #[must_use]
    pub const fn supermana_base(&self) -> Location {
        self.supermana_base
    }

    /// Home base of the mon with this kind and color.
    #[must_use]
    pub fn mon_base(&self, mon: &Mon) -> Option<Location> {
        MON_BASES
            .iter()
            .find(|(kind, color, _)| *kind == mon.kind && *color == mon.color)
            .map(|(_, _, location)| *location)
    }

    /// Items on the board when a standard game begins.
    #[must_use]
    pub fn initial_items(&self) -> Vec<(Location, Item)> {
        let mut items = Vec::with_capacity(23);
        for (kind, color, location) in MON_BASES {
            items.push((
                location,
                Item::Mon {
                    mon: Mon::awake(kind, color),
                },
            ));
        }
        for (color, location) in MANA_BASES {
            items.push((
                location,
                Item::Mana {
                    mana: Mana::Regular(color),
                },
            ));
        }
        for location in CONSUMABLE_BASES {
            items.push((
                location,
                Item::Consumable {
                    consumable: Consumable::BombOrPotion,
                },
            ));
        }
        items.push((
            self.supermana_base,
            Item::Mana {
                mana: Mana::Supermana,
            },
        ));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let config = RulesConfig::default();
        assert_eq!(config.target_score, 5);
        assert_eq!(config.mons_moves_per_turn, 5);
        assert_eq!(config.mana_moves_per_turn, 1);
        assert_eq!(config.actions_per_turn, 1);
        assert_eq!(config.faint_cooldown, 2);
        assert_eq!(config.bomb_range, 3);
    }

    #[test]
    fn test_rules_builder() {
        let config = RulesConfig::default()
            .with_target_score(3)
            .with_opening_mon_moves(5)
            .with_bomb_range(2);

        assert_eq!(config.target_score, 3);
        assert_eq!(config.mon_moves_for_turn(1), 5);
        assert_eq!(config.mon_moves_for_turn(2), 5);
        assert_eq!(config.bomb_range, 2);
    }

    #[test]
    fn test_opening_turn_budget() {
        let config = RulesConfig::default();
        assert_eq!(config.mon_moves_for_turn(1), 1);
        assert_eq!(config.mon_moves_for_turn(7), 5);
    }

    #[test]
    fn test_standard_layout_squares() {
        let layout = BoardLayout::standard();
        assert_eq!(layout.square(Location::new(5, 5)), Square::SupermanaBase);
        assert_eq!(layout.square(Location::new(5, 0)), Square::ConsumableBase);
        assert_eq!(
            layout.square(Location::new(10, 10)),
            Square::ManaPool { color: Color::White }
        );
        assert_eq!(
            layout.square(Location::new(0, 7)),
            Square::MonBase {
                kind: MonKind::Demon,
                color: Color::Black
            }
        );
        assert_eq!(layout.square(Location::new(2, 2)), Square::Regular);
    }

    #[test]
    fn test_mon_base_lookup() {
        let layout = BoardLayout::standard();
        let white_drainer = Mon::awake(MonKind::Drainer, Color::White);
        assert_eq!(layout.mon_base(&white_drainer), Some(Location::new(10, 5)));
    }

    #[test]
    fn test_initial_items() {
        let items = BoardLayout::standard().initial_items();
        assert_eq!(items.len(), 23);

        let supermanas = items
            .iter()
            .filter(|(_, item)| item.mana() == Some(&Mana::Supermana))
            .count();
        assert_eq!(supermanas, 1);
    }

    #[test]
    fn test_rules_serialization() {
        let config = RulesConfig::default().with_target_score(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
