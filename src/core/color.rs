//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of a Mons game. White moves first.
//!
//! ## ColorMap
//!
//! Fixed-size per-color storage indexed by `Color`, used for scores and
//! potion counts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The opposing color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index into per-color arrays (white = 0, black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Single-character code used by the FEN codec.
    #[must_use]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parse a FEN color code.
    #[must_use]
    pub fn from_fen(code: &str) -> Option<Self> {
        match code {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mons_engine::core::{Color, ColorMap};
///
/// let mut scores: ColorMap<u32> = ColorMap::default();
/// scores[Color::Black] += 2;
///
/// assert_eq!(scores[Color::White], 0);
/// assert_eq!(scores[Color::Black], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map from explicit white and black values.
    pub const fn new(white: T, black: T) -> Self {
        Self { data: [white, black] }
    }

    /// Iterate over (Color, &T) pairs, white first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Clone> ColorMap<T> {
    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self {
        Self {
            data: [value.clone(), value],
        }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }
}
