//! Board coordinates and geometry.
//!
//! Locations are `(i, j)` pairs: `i` is the row (0 = black's home row),
//! `j` the column. Distances are Chebyshev (king-move) distances.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::BOARD_SIZE;

/// Locations reachable within a small radius. Sized for the one-step case.
pub type Locations = SmallVec<[Location; 8]>;

/// A square on the board.
///
/// Ordered row-major so sorted location lists read top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub i: i32,
    pub j: i32,
}

impl Location {
    #[must_use]
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Check whether this location lies on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.i >= 0 && self.i < BOARD_SIZE && self.j >= 0 && self.j < BOARD_SIZE
    }

    /// Iterate over every location on the board, row-major.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..BOARD_SIZE).flat_map(|i| (0..BOARD_SIZE).map(move |j| Location::new(i, j)))
    }

    /// All on-board locations within `distance` (Chebyshev), excluding self.
    #[must_use]
    pub fn nearby(self, distance: i32) -> Locations {
        let mut locations = Locations::new();
        for i in (self.i - distance)..=(self.i + distance) {
            for j in (self.j - distance)..=(self.j + distance) {
                let location = Location::new(i, j);
                if location != self && location.is_valid() {
                    locations.push(location);
                }
            }
        }
        locations
    }

    /// The one-step neighbourhood.
    #[must_use]
    pub fn adjacent(self) -> Locations {
        self.nearby(1)
    }

    /// On-board locations exactly two diagonal steps away.
    #[must_use]
    pub fn diagonal_two(self) -> Locations {
        self.offsets(&[(-2, -2), (-2, 2), (2, -2), (2, 2)])
    }

    /// On-board locations exactly two orthogonal steps away.
    #[must_use]
    pub fn orthogonal_two(self) -> Locations {
        self.offsets(&[(-2, 0), (2, 0), (0, -2), (0, 2)])
    }

    /// On-board locations on the Chebyshev ring of radius two.
    #[must_use]
    pub fn ring_two(self) -> Locations {
        self.nearby(2)
            .into_iter()
            .filter(|location| self.distance(*location) == 2)
            .collect()
    }

    fn offsets(self, deltas: &[(i32, i32)]) -> Locations {
        deltas
            .iter()
            .map(|&(di, dj)| Location::new(self.i + di, self.j + dj))
            .filter(|location| location.is_valid())
            .collect()
    }

    /// The midpoint between two locations (rounded toward zero).
    #[must_use]
    pub const fn between(self, other: Location) -> Location {
        Location::new((self.i + other.i) / 2, (self.j + other.j) / 2)
    }

    /// Chebyshev distance.
    #[must_use]
    pub fn distance(self, other: Location) -> i32 {
        (other.i - self.i).abs().max((other.j - self.j).abs())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
