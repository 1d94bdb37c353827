//! Vertex normal computation for render buffers.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use crate::mesh::VertexBuffer;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated
/// at each vertex and the result is normalized. Vertices whose fan has
/// collapsed to zero area fall back to +Z, the flat sheet's normal.
pub fn compute_vertex_normals(positions: &VertexBuffer, indices: &[u32]) -> Vec<[f32; 3]> {
    let n = positions.len();
    let mut normals = vec![[0.0_f32; 3]; n];

    for tri in indices.chunks_exact(3) {
        let a = tri[0] as usize;
        let b = tri[1] as usize;
        let c = tri[2] as usize;

        let p0 = positions.position_vec3(a);
        let e1 = positions.position_vec3(b) - p0;
        let e2 = positions.position_vec3(c) - p0;

        // Magnitude = 2 × triangle area
        let cross = e1.cross(e2);

        for v in [a, b, c] {
            normals[v][0] += cross.x;
            normals[v][1] += cross.y;
            normals[v][2] += cross.z;
        }
    }

    for normal in &mut normals {
        let len_sq = normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2];
        if len_sq > 1e-12 {
            let inv_len = 1.0 / len_sq.sqrt();
            normal[0] *= inv_len;
            normal[1] *= inv_len;
            normal[2] *= inv_len;
        } else {
            *normal = [0.0, 0.0, 1.0];
        }
    }

    normals
}
