//! Vertex buffers and the grid mesh model.
//!
//! Positions use a Structure-of-Arrays layout:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! The live shape, the target shape, and the flat rest lattice all share
//! this type, so per-vertex loops in the transforms and integrators walk
//! three contiguous channels.

use serde::{Deserialize, Serialize};

use crumple_math::{Bounds2, Vec3};
use crumple_types::{CrumpleError, CrumpleResult};

use crate::normals::compute_vertex_normals;
use crate::topology::GridTopology;

/// Per-vertex positions in Structure-of-Arrays layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VertexBuffer {
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,
}

impl VertexBuffer {
    /// Creates an empty buffer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(capacity),
            pos_y: Vec::with_capacity(capacity),
            pos_z: Vec::with_capacity(capacity),
        }
    }

    /// Creates a buffer of `n` vertices at the origin.
    pub fn zeros(n: usize) -> Self {
        Self {
            pos_x: vec![0.0; n],
            pos_y: vec![0.0; n],
            pos_z: vec![0.0; n],
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos_x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos_x.is_empty()
    }

    /// Appends a vertex.
    #[inline]
    pub fn push(&mut self, x: f32, y: f32, z: f32) {
        self.pos_x.push(x);
        self.pos_y.push(y);
        self.pos_z.push(z);
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, x: f32, y: f32, z: f32) {
        self.pos_x[i] = x;
        self.pos_y[i] = y;
        self.pos_z[i] = z;
    }

    /// Overwrites this buffer's contents with `other`'s.
    ///
    /// Both buffers must have the same length; the allocation is reused.
    pub fn copy_from(&mut self, other: &VertexBuffer) {
        self.pos_x.copy_from_slice(&other.pos_x);
        self.pos_y.copy_from_slice(&other.pos_y);
        self.pos_z.copy_from_slice(&other.pos_z);
    }

    /// XY bounding box, or `None` for an empty buffer.
    pub fn bounds_xy(&self) -> Option<Bounds2> {
        Bounds2::from_xy(&self.pos_x, &self.pos_y)
    }

    /// `(min_z, max_z)`, or `None` for an empty buffer.
    pub fn z_range(&self) -> Option<(f32, f32)> {
        if self.is_empty() {
            return None;
        }
        let min = self.pos_z.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.pos_z.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        Some((min, max))
    }

    /// Largest per-vertex distance between this buffer and `other`.
    pub fn max_distance(&self, other: &VertexBuffer) -> f32 {
        (0..self.len().min(other.len()))
            .map(|i| (self.position_vec3(i) - other.position_vec3(i)).length())
            .fold(0.0f32, f32::max)
    }

    /// Converts to interleaved layout `[x0, y0, z0, x1, y1, z1, ...]`.
    pub fn interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * 3);
        for i in 0..self.len() {
            out.extend_from_slice(&self.position(i));
        }
        out
    }

    /// Checks that all three channels have `expected` entries and are finite.
    pub fn validate(&self, expected: usize) -> CrumpleResult<()> {
        if self.pos_x.len() != expected || self.pos_y.len() != expected || self.pos_z.len() != expected {
            return Err(CrumpleError::InvalidMesh(format!(
                "Position arrays have lengths ({}, {}, {}), expected {}",
                self.pos_x.len(),
                self.pos_y.len(),
                self.pos_z.len(),
                expected
            )));
        }
        let channels = [&self.pos_x, &self.pos_y, &self.pos_z];
        for (axis, channel) in ["x", "y", "z"].iter().zip(channels) {
            if let Some(i) = channel.iter().position(|v| !v.is_finite()) {
                return Err(CrumpleError::InvalidMesh(format!(
                    "Vertex {} has a non-finite {} coordinate",
                    i, axis
                )));
            }
        }
        Ok(())
    }
}

/// The paper's flat rest lattice plus its fixed topology.
///
/// Built once per engine and reused on reset; only the live and target
/// copies of the positions change during simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMesh {
    /// Cells per side.
    pub segments: usize,
    /// Edge length of the square sheet.
    pub size: f32,
    /// Flat Z = 0 lattice.
    pub rest: VertexBuffer,
    /// Triangle and crease-line indices.
    pub topology: GridTopology,
}

/// Renderer-ready copy of a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub triangle_indices: Vec<u32>,
    pub line_indices: Vec<u32>,
}

impl GridMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.topology.triangle_count()
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - The rest lattice has `(segments + 1)²` finite vertices
    /// - Triangle and line indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> CrumpleResult<()> {
        let n = self.topology.vertex_count();
        self.rest.validate(n)?;

        if self.topology.triangle_indices.len() % 3 != 0 {
            return Err(CrumpleError::InvalidMesh(
                "Triangle index count is not divisible by 3".into(),
            ));
        }
        if self.topology.line_indices.len() % 2 != 0 {
            return Err(CrumpleError::InvalidMesh(
                "Line index count is not divisible by 2".into(),
            ));
        }

        let all = self.topology.triangle_indices.iter().chain(&self.topology.line_indices);
        for (i, &idx) in all.enumerate() {
            if idx as usize >= n {
                return Err(CrumpleError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.topology.triangle_count() {
            let [a, b, c] = self.topology.triangle(t);
            if a == b || b == c || a == c {
                return Err(CrumpleError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Copies `positions` into a fresh set of render buffers.
    pub fn render_buffers(&self, positions: &VertexBuffer) -> CrumpleResult<RenderBuffers> {
        let mut buffers = RenderBuffers {
            triangle_indices: self.topology.triangle_indices.clone(),
            line_indices: self.topology.line_indices.clone(),
            ..Default::default()
        };
        self.update_render_buffers(positions, &mut buffers)?;
        Ok(buffers)
    }

    /// Refreshes positions and normals in existing render buffers.
    ///
    /// Index lists are left alone: topology never changes after build.
    pub fn update_render_buffers(
        &self,
        positions: &VertexBuffer,
        buffers: &mut RenderBuffers,
    ) -> CrumpleResult<()> {
        if positions.len() != self.vertex_count() {
            return Err(CrumpleError::InvalidMesh(format!(
                "Shape has {} vertices, mesh has {}",
                positions.len(),
                self.vertex_count()
            )));
        }

        buffers.positions.clear();
        buffers
            .positions
            .extend((0..positions.len()).map(|i| positions.position(i)));
        buffers.normals = compute_vertex_normals(positions, &self.topology.triangle_indices);
        Ok(())
    }
}
