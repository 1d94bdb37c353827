//! JSON frame exporter: records the live paper for offline playback.
//!
//! Captures interleaved positions at every geometry notification and
//! writes the whole animation, with the triangle and crease-line index
//! lists, to a JSON file on `finalize()`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crumple_mesh::GridTopology;
use crumple_types::{CrumpleError, CrumpleResult};

use crate::sink::{GeometryFrame, GeometrySink};

/// A single captured frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameData {
    pub tick: u64,
    pub positions: Vec<f32>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
}

/// Complete animation written by the exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub indices: Vec<u32>,
    pub lines: Vec<u32>,
    pub frames: Vec<FrameData>,
}

/// Exports geometry frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("fold.json");
/// engine.add_geometry_sink(Box::new(exporter))?;
/// // ... run, fold, puff ...
/// engine.shutdown()?; // writes the file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    indices: Vec<u32>,
    lines: Vec<u32>,
    vertex_count: usize,
    triangle_count: usize,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            indices: Vec::new(),
            lines: Vec::new(),
            vertex_count: 0,
            triangle_count: 0,
            frames: Vec::new(),
        }
    }

    /// Snapshot of everything captured so far.
    pub fn animation(&self) -> AnimationData {
        AnimationData {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            indices: self.indices.clone(),
            lines: self.lines.clone(),
            frames: self.frames.clone(),
        }
    }
}

impl GeometrySink for JsonFrameExporter {
    fn init(&mut self, topology: &GridTopology) -> CrumpleResult<()> {
        self.vertex_count = topology.vertex_count();
        self.triangle_count = topology.triangle_count();
        self.indices = topology.triangle_indices.clone();
        self.lines = topology.line_indices.clone();
        Ok(())
    }

    fn on_geometry_changed(&mut self, frame: &GeometryFrame) -> CrumpleResult<()> {
        if frame.positions.len() != self.vertex_count {
            return Err(CrumpleError::InvalidMesh(format!(
                "frame has {} vertices, exporter was initialized for {}",
                frame.positions.len(),
                self.vertex_count
            )));
        }
        self.frames.push(FrameData {
            tick: frame.tick,
            positions: frame.positions.interleaved(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> CrumpleResult<()> {
        let data = AnimationData {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            indices: std::mem::take(&mut self.indices),
            lines: std::mem::take(&mut self.lines),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| CrumpleError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
