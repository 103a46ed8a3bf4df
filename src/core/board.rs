//! Board contents.
//!
//! The board maps occupied locations to their item. It is backed by an
//! `im::HashMap`, so cloning a board for a scratch resolution is O(1) and
//! shares structure with the original until the copy is written to.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::config::BoardLayout;
use super::item::{Item, Mana};
use super::location::Location;
use super::mon::Mon;
use super::square::Square;

/// Items on the board, at most one per square.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    items: im::HashMap<Location, Item>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with the standard opening placement.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_items(BoardLayout::standard().initial_items())
    }

    /// Board holding exactly `items`. Later entries overwrite earlier ones.
    pub fn from_items(items: impl IntoIterator<Item = (Location, Item)>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// The static layout this board is played on.
    #[must_use]
    pub fn layout(&self) -> &'static BoardLayout {
        BoardLayout::standard()
    }

    #[must_use]
    pub fn item(&self, at: Location) -> Option<&Item> {
        self.items.get(&at)
    }

    #[must_use]
    pub fn square(&self, at: Location) -> Square {
        self.layout().square(at)
    }

    #[must_use]
    pub fn is_empty_at(&self, at: Location) -> bool {
        !self.items.contains_key(&at)
    }

    /// Place an item, replacing whatever was there.
    pub fn put(&mut self, at: Location, item: Item) {
        self.items.insert(at, item);
    }

    /// Remove and return the item at `at`.
    pub fn remove(&mut self, at: Location) -> Option<Item> {
        self.items.remove(&at)
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over occupied squares in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &Item)> {
        self.items.iter().map(|(location, item)| (*location, item))
    }

    /// Occupied locations, sorted row-major.
    #[must_use]
    pub fn occupied_locations(&self) -> Vec<Location> {
        let mut locations: Vec<Location> = self.items.keys().copied().collect();
        locations.sort();
        locations
    }

    /// Where a given mon (matched by kind and color) currently stands.
    #[must_use]
    pub fn find_mon(&self, mon: &Mon) -> Option<Location> {
        self.iter()
            .find(|(_, item)| item.mon().is_some_and(|m| m.is_same_mon(mon)))
            .map(|(location, _)| location)
    }

    /// Locations of every mon of `color`, sorted.
    #[must_use]
    pub fn mon_locations(&self, color: Color) -> Vec<Location> {
        let mut locations: Vec<Location> = self
            .iter()
            .filter(|(_, item)| item.mon().is_some_and(|mon| mon.color == color))
            .map(|(location, _)| location)
            .collect();
        locations.sort();
        locations
    }

    /// Location of the supermana, free or carried.
    #[must_use]
    pub fn supermana_location(&self) -> Option<Location> {
        self.iter()
            .find(|(_, item)| item.mana() == Some(&Mana::Supermana))
            .map(|(location, _)| location)
    }
}
