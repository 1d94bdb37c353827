//! State snapshot serialization for replay and debugging.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crumple_engine::PaperEngine;
use crumple_mesh::VertexBuffer;
use crumple_types::{CrumpleError, CrumpleResult};

/// A complete engine state snapshot.
///
/// Serialized with `bincode` for compact binary output. Position and
/// velocity arrays are interleaved: `[x0, y0, z0, x1, y1, z1, ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Clock tick when this snapshot was taken.
    pub tick: u64,
    /// Simulation time in seconds.
    pub sim_time: f64,
    pub fold_count: u32,
    pub is_puffed: bool,
    /// Grid cells per side.
    pub segments: usize,
    pub vertex_count: usize,
    /// Live vertex positions.
    pub live: Vec<f32>,
    /// Target vertex positions.
    pub target: Vec<f32>,
    /// Vertex velocities (zero under eased interpolation).
    pub velocities: Vec<f32>,
}

/// Quick statistics over a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotSummary {
    /// `(min_z, max_z)` of the live shape.
    pub live_z_range: (f32, f32),
    /// Largest live-to-target distance.
    pub residual: f32,
    /// Largest vertex speed.
    pub max_speed: f32,
}

impl StateSnapshot {
    /// Captures the engine's current state.
    pub fn capture(engine: &PaperEngine) -> Self {
        let status = engine.status();
        let motion = engine.motion();
        Self {
            tick: status.tick,
            sim_time: status.sim_time,
            fold_count: status.fold_count,
            is_puffed: status.is_puffed,
            segments: engine.config().segments,
            vertex_count: motion.vertex_count,
            live: engine.live().interleaved(),
            target: engine.target().interleaved(),
            velocities: motion.interleaved_velocities(),
        }
    }

    /// Live positions back in SoA form.
    pub fn live_buffer(&self) -> VertexBuffer {
        deinterleave(&self.live)
    }

    /// Target positions back in SoA form.
    pub fn target_buffer(&self) -> VertexBuffer {
        deinterleave(&self.target)
    }

    /// Checks that every array matches `vertex_count`.
    pub fn validate(&self) -> CrumpleResult<()> {
        let expected = self.vertex_count * 3;
        for (name, len) in [
            ("live", self.live.len()),
            ("target", self.target.len()),
            ("velocities", self.velocities.len()),
        ] {
            if len != expected {
                return Err(CrumpleError::InvalidMesh(format!(
                    "Snapshot {} has {} entries, expected {}",
                    name, len, expected
                )));
            }
        }
        if (self.segments + 1) * (self.segments + 1) != self.vertex_count {
            return Err(CrumpleError::InvalidMesh(format!(
                "Snapshot has {} vertices, a {}-segment grid has {}",
                self.vertex_count,
                self.segments,
                (self.segments + 1) * (self.segments + 1)
            )));
        }
        Ok(())
    }

    pub fn summary(&self) -> SnapshotSummary {
        let live_z_range = self
            .live
            .iter()
            .skip(2)
            .step_by(3)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &z| (lo.min(z), hi.max(z)));
        let residual = self
            .live
            .chunks_exact(3)
            .zip(self.target.chunks_exact(3))
            .map(|(a, b)| {
                let (dx, dy, dz) = (a[0] - b[0], a[1] - b[1], a[2] - b[2]);
                (dx * dx + dy * dy + dz * dz).sqrt()
            })
            .fold(0.0f32, f32::max);
        let max_speed = self
            .velocities
            .chunks_exact(3)
            .map(|v| (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt())
            .fold(0.0f32, f32::max);
        SnapshotSummary {
            live_z_range,
            residual,
            max_speed,
        }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> CrumpleResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| CrumpleError::Serialization(format!("Snapshot serialization failed: {e}")))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> CrumpleResult<Self> {
        bincode::deserialize(data)
            .map_err(|e| CrumpleError::Serialization(format!("Snapshot deserialization failed: {e}")))
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> CrumpleResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> CrumpleResult<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }
}

fn deinterleave(flat: &[f32]) -> VertexBuffer {
    let mut buffer = VertexBuffer::with_capacity(flat.len() / 3);
    for p in flat.chunks_exact(3) {
        buffer.push(p[0], p[1], p[2]);
    }
    buffer
}
