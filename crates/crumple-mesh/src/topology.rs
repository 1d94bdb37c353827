//! Fixed grid topology.
//!
//! Index lists are derived from `segments` alone and never recomputed,
//! no matter how the vertex positions move.

use serde::{Deserialize, Serialize};

use crumple_types::VertexId;

/// Triangle and line index lists of an N×N grid.
///
/// Vertices are addressed row-major: `i = y * row_stride + x` with
/// `row_stride = segments + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTopology {
    /// Cells per side.
    pub segments: usize,
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub triangle_indices: Vec<u32>,
    /// Crease-line segments, stored flat: `[l0a, l0b, l1a, l1b, ...]`.
    pub line_indices: Vec<u32>,
}

impl GridTopology {
    /// Build the topology for a grid with `segments` cells per side.
    ///
    /// Each cell `(x, y)` contributes `{i, i+1, i+stride}` and
    /// `{i+1, i+stride+1, i+stride}`. Each vertex is linked to its right
    /// and upper neighbour where one exists.
    pub fn build(segments: usize) -> Self {
        let stride = segments + 1;
        let mut triangle_indices = Vec::with_capacity(segments * segments * 6);
        let mut line_indices = Vec::with_capacity(segments * stride * 4);

        for y in 0..segments {
            for x in 0..segments {
                let i = (y * stride + x) as u32;
                let s = stride as u32;

                triangle_indices.extend_from_slice(&[i, i + 1, i + s]);
                triangle_indices.extend_from_slice(&[i + 1, i + s + 1, i + s]);
            }
        }

        for y in 0..stride {
            for x in 0..stride {
                let i = (y * stride + x) as u32;
                if x < segments {
                    line_indices.extend_from_slice(&[i, i + 1]);
                }
                if y < segments {
                    line_indices.extend_from_slice(&[i, i + stride as u32]);
                }
            }
        }

        Self {
            segments,
            triangle_indices,
            line_indices,
        }
    }

    /// Vertices per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.segments + 1
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.row_stride() * self.row_stride()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_indices.len() / 2
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [
            self.triangle_indices[base],
            self.triangle_indices[base + 1],
            self.triangle_indices[base + 2],
        ]
    }

    /// Returns the two endpoints of line `l`.
    #[inline]
    pub fn line(&self, l: usize) -> [u32; 2] {
        [self.line_indices[l * 2], self.line_indices[l * 2 + 1]]
    }

    /// Lattice point `(x, y)` as a vertex id.
    #[inline]
    pub fn vertex_at(&self, x: usize, y: usize) -> VertexId {
        VertexId::from_lattice(x, y, self.segments)
    }
}
