use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on a pointy-top hex lattice in axial coordinates.
///
/// The third cube coordinate is implied: `s = -q - r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxialCoord {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl AxialCoord {
    /// The lattice origin.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a coordinate.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implied third cube coordinate.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance: the number of steps between two cells.
    pub fn distance(self, other: Self) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.q + self.r - other.q - other.r).abs();
        ((dq + ds + dr) / 2) as u32
    }

    /// Whether every cube coordinate lies within `[-radius, radius]`.
    pub fn within_radius(self, radius: i32) -> bool {
        self.q.abs() <= radius && self.r.abs() <= radius && self.s().abs() <= radius
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
