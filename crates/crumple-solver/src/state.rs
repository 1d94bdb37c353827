//! Motion state: SoA buffers for live positions and velocities.
//!
//! This is the primary mutable data structure during simulation.
//! Only integrators write to it; everything else reads.

use crumple_mesh::VertexBuffer;

/// Live positions and per-vertex velocities.
///
/// # Layout
///
/// All arrays have length `vertex_count`. Channels are stored contiguously:
/// ```text
/// live.pos_x: [x0, x1, x2, ...]
/// vel_x:      [vx0, vx1, vx2, ...]
/// ...
/// ```
///
/// Velocities are only advanced by the spring integrator and stay at
/// zero under eased interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Number of vertices.
    pub vertex_count: usize,

    /// Currently rendered positions.
    pub live: VertexBuffer,

    // ─── Velocity ───
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,
}

impl MotionState {
    /// Initialize at `rest` with zero velocity.
    pub fn from_rest(rest: &VertexBuffer) -> Self {
        let n = rest.len();
        Self {
            vertex_count: n,
            live: rest.clone(),
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
        }
    }

    /// Snap back to `rest` and stop all motion.
    pub fn reset_to(&mut self, rest: &VertexBuffer) {
        self.live.copy_from(rest);
        self.zero_velocities();
    }

    pub fn zero_velocities(&mut self) {
        self.vel_x.fill(0.0);
        self.vel_y.fill(0.0);
        self.vel_z.fill(0.0);
    }

    /// Returns true when every velocity component is exactly zero.
    pub fn is_at_rest(&self) -> bool {
        self.vel_x
            .iter()
            .chain(&self.vel_y)
            .chain(&self.vel_z)
            .all(|&v| v == 0.0)
    }

    /// Compute total kinetic energy: 0.5 * m * Σ ||v_i||².
    pub fn kinetic_energy(&self, mass: f32) -> f64 {
        let m = mass as f64;
        let mut energy = 0.0f64;
        for i in 0..self.vertex_count {
            let vx = self.vel_x[i] as f64;
            let vy = self.vel_y[i] as f64;
            let vz = self.vel_z[i] as f64;
            energy += 0.5 * m * (vx * vx + vy * vy + vz * vz);
        }
        energy
    }

    /// Largest per-vertex speed.
    pub fn max_speed(&self) -> f32 {
        (0..self.vertex_count)
            .map(|i| {
                let (vx, vy, vz) = (self.vel_x[i], self.vel_y[i], self.vel_z[i]);
                (vx * vx + vy * vy + vz * vz).sqrt()
            })
            .fold(0.0f32, f32::max)
    }

    /// Velocities in interleaved layout `[vx0, vy0, vz0, ...]`.
    pub fn interleaved_velocities(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count * 3);
        for i in 0..self.vertex_count {
            out.extend_from_slice(&[self.vel_x[i], self.vel_y[i], self.vel_z[i]]);
        }
        out
    }
}
