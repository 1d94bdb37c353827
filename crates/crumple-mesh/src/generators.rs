//! Procedural grid generation.

use crumple_types::{CrumpleError, CrumpleResult};

use crate::mesh::{GridMesh, VertexBuffer};
use crate::topology::GridTopology;

/// Generates the flat Z = 0 lattice for a square sheet.
///
/// The lattice spans `[-size/2, size/2]` in X and Y, centered at the
/// origin, ordered row-major from the bottom row (`y = -size/2`) up.
pub fn flat_lattice(segments: usize, size: f32) -> VertexBuffer {
    let stride = segments + 1;
    let mut lattice = VertexBuffer::with_capacity(stride * stride);
    let half = size / 2.0;
    let cell = size / segments.max(1) as f32;

    for y in 0..stride {
        for x in 0..stride {
            lattice.push(-half + x as f32 * cell, -half + y as f32 * cell, 0.0);
        }
    }

    lattice
}

/// Builds the paper mesh: flat lattice, triangle indices, and line indices.
///
/// # Example
/// ```
/// use crumple_mesh::generators::build;
/// let mesh = build(2, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);   // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 cells × 2 tris each
/// ```
pub fn build(segments: usize, size: f32) -> CrumpleResult<GridMesh> {
    if segments == 0 {
        return Err(CrumpleError::InvalidMesh(
            "Grid needs at least one segment per side".into(),
        ));
    }
    if !size.is_finite() || size <= 0.0 {
        return Err(CrumpleError::InvalidMesh(format!(
            "Paper size must be positive and finite, got {}",
            size
        )));
    }

    let mesh = GridMesh {
        segments,
        size,
        rest: flat_lattice(segments, size),
        topology: GridTopology::build(segments),
    };
    mesh.validate()?;
    Ok(mesh)
}
