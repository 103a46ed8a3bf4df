//! Game position: everything needed to continue a game.
//!
//! ## Position
//!
//! - Board contents (persistent map, O(1) clone)
//! - Scores and potion counts per color
//! - Active color and the per-turn counters
//! - Turn number (a ply counter starting at 1)
//! - The `RulesConfig` the game is played under
//!
//! Positions are mutated only by a successful `process` call; every query
//! here is read-only. The FEN codec lives in [`crate::fen`] and the input
//! state machine in [`crate::rules`].

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::{Color, ColorMap};
use super::config::RulesConfig;
use super::item::Item;
use super::location::Location;
use super::square::Square;

/// A kind of move a player may still have available this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailableMoveKind {
    MonMove,
    ManaMove,
    Action,
    Potion,
}

/// Remaining per-turn budget of the active color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailableMoves {
    pub mon_moves: u32,
    pub mana_moves: u32,
    pub actions: u32,
    pub potions: u32,
}

impl AvailableMoves {
    #[must_use]
    pub const fn count(&self, kind: AvailableMoveKind) -> u32 {
        match kind {
            AvailableMoveKind::MonMove => self.mon_moves,
            AvailableMoveKind::ManaMove => self.mana_moves,
            AvailableMoveKind::Action => self.actions,
            AvailableMoveKind::Potion => self.potions,
        }
    }

    #[must_use]
    pub const fn contains(&self, kind: AvailableMoveKind) -> bool {
        self.count(kind) > 0
    }

    /// Counts in `[MonMove, ManaMove, Action, Potion]` order.
    #[must_use]
    pub const fn as_array(&self) -> [u32; 4] {
        [self.mon_moves, self.mana_moves, self.actions, self.potions]
    }
}

/// Complete state of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub(crate) config: RulesConfig,
    pub(crate) board: Board,
    pub(crate) scores: ColorMap<u32>,
    pub(crate) potions: ColorMap<u32>,
    pub(crate) active_color: Color,
    pub(crate) actions_used: u32,
    pub(crate) mana_moves: u32,
    pub(crate) mon_moves: u32,
    pub(crate) turn_number: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard opening position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Standard opening position under custom rules.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_board(config, Board::standard(), Color::White, 1)
    }

    /// Custom setup holding exactly `items`. Scores and counters start at zero.
    pub fn with_items(
        config: RulesConfig,
        items: impl IntoIterator<Item = (Location, Item)>,
        active_color: Color,
        turn_number: u32,
    ) -> Self {
        Self::from_board(config, Board::from_items(items), active_color, turn_number)
    }

    pub(crate) fn from_board(
        config: RulesConfig,
        board: Board,
        active_color: Color,
        turn_number: u32,
    ) -> Self {
        Self {
            config,
            board,
            scores: ColorMap::default(),
            potions: ColorMap::default(),
            active_color,
            actions_used: 0,
            mana_moves: 0,
            mon_moves: 0,
            turn_number,
        }
    }

    /// Set a color's score. Used when building test setups.
    #[must_use]
    pub fn with_score(mut self, color: Color, score: u32) -> Self {
        self.scores[color] = score;
        self
    }

    /// Set a color's potion count. Used when building test setups.
    #[must_use]
    pub fn with_potions(mut self, color: Color, potions: u32) -> Self {
        self.potions[color] = potions;
        self
    }

    // === Queries ===

    #[must_use]
    pub const fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn item(&self, at: Location) -> Option<&Item> {
        self.board.item(at)
    }

    #[must_use]
    pub fn square(&self, at: Location) -> Square {
        self.board.square(at)
    }

    /// Occupied locations, sorted.
    #[must_use]
    pub fn occupied_locations(&self) -> Vec<Location> {
        self.board.occupied_locations()
    }

    /// Occupied locations plus every mon base, sorted and deduplicated.
    #[must_use]
    pub fn locations_with_content(&self) -> Vec<Location> {
        let mut locations = self.board.occupied_locations();
        locations.extend(Location::all().filter(|at| self.square(*at).is_mon_base()));
        locations.sort();
        locations.dedup();
        locations
    }

    #[must_use]
    pub const fn active_color(&self) -> Color {
        self.active_color
    }

    #[must_use]
    pub fn score(&self, color: Color) -> u32 {
        self.scores[color]
    }

    #[must_use]
    pub fn white_score(&self) -> u32 {
        self.scores[Color::White]
    }

    #[must_use]
    pub fn black_score(&self) -> u32 {
        self.scores[Color::Black]
    }

    #[must_use]
    pub fn potions(&self, color: Color) -> u32 {
        self.potions[color]
    }

    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub const fn is_first_turn(&self) -> bool {
        self.turn_number == 1
    }

    #[must_use]
    pub const fn actions_used(&self) -> u32 {
        self.actions_used
    }

    #[must_use]
    pub const fn mana_moves(&self) -> u32 {
        self.mana_moves
    }

    #[must_use]
    pub const fn mon_moves(&self) -> u32 {
        self.mon_moves
    }

    /// The color whose score reached the target, if any.
    #[must_use]
    pub fn winner_color(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.scores[*color] >= self.config.target_score)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner_color().is_some()
    }

    // === Turn budget ===

    #[must_use]
    pub fn can_move_mon(&self) -> bool {
        self.mon_moves < self.config.mon_moves_for_turn(self.turn_number)
    }

    #[must_use]
    pub fn can_move_mana(&self) -> bool {
        !self.is_first_turn() && self.mana_moves < self.config.mana_moves_per_turn
    }

    /// An action is available from the budget or by drinking a potion.
    #[must_use]
    pub fn can_use_action(&self) -> bool {
        !self.is_first_turn()
            && (self.actions_used < self.config.actions_per_turn
                || self.potions[self.active_color] > 0)
    }

    /// Remaining moves of each kind for the active color.
    #[must_use]
    pub fn available_move_kinds(&self) -> AvailableMoves {
        let mon_moves = self
            .config
            .mon_moves_for_turn(self.turn_number)
            .saturating_sub(self.mon_moves);
        let (mana_moves, actions) = if self.is_first_turn() {
            (0, 0)
        } else {
            (
                self.config.mana_moves_per_turn.saturating_sub(self.mana_moves),
                self.config.actions_per_turn.saturating_sub(self.actions_used),
            )
        };
        AvailableMoves {
            mon_moves,
            mana_moves,
            actions,
            potions: self.potions[self.active_color],
        }
    }

    /// Counters of the color not to move, in the same shape as
    /// [`available_move_kinds`](Self::available_move_kinds). Only potions
    /// carry over between turns; the rest are zero.
    #[must_use]
    pub fn inactive_player_items_counters(&self) -> AvailableMoves {
        AvailableMoves {
            potions: self.potions[self.active_color.other()],
            ..AvailableMoves::default()
        }
    }

    // === Ordering ===

    /// How far the game has progressed: turn, moves made within the turn,
    /// and whether it is decided.
    #[must_use]
    pub fn progress(&self) -> (u32, u32, bool) {
        (
            self.turn_number,
            self.mon_moves
                .saturating_add(self.mana_moves)
                .saturating_add(self.actions_used),
            self.is_game_over(),
        )
    }

    /// Whether this position is strictly further along than `other`.
    #[must_use]
    pub fn is_later_than(&self, other: &Position) -> bool {
        self.progress() > other.progress()
    }

    /// Like [`is_later_than`](Self::is_later_than) against a serialized
    /// position. An undecodable string counts as older.
    #[must_use]
    pub fn is_later_than_fen(&self, other_fen: &str) -> bool {
        match Position::from_fen(other_fen) {
            Ok(other) => self.is_later_than(&other),
            Err(_) => true,
        }
    }
}
