//! Grid coordinate type.
//!
//! `GridPos` is an immutable `(x, y)` pair of unsigned cell indices.  Bounds
//! are not encoded in the type; the owning `GridMap` (ns-spatial) decides
//! which positions are valid.

/// A cell on the simulation grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance, the only metric the simulation uses: for
    /// heuristics, nearest-bin selection, and observation radius.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` lies within Manhattan distance `radius` of `self`.
    #[inline]
    pub fn within(self, other: GridPos, radius: u32) -> bool {
        self.manhattan(other) <= radius
    }
}

impl From<(u32, u32)> for GridPos {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
