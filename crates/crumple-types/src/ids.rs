//! Strongly-typed lattice vertex identifier.

use serde::{Deserialize, Serialize};

/// Index into the per-vertex arrays (live, target, velocity).
///
/// Lattice ordering is row-major: `index = y * (segments + 1) + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Identifier of lattice point `(x, y)` in a grid with `segments` cells per side.
    #[inline]
    pub fn from_lattice(x: usize, y: usize, segments: usize) -> Self {
        Self((y * (segments + 1) + x) as u32)
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
