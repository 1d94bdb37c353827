//! GeometrySink trait and HeadlessSink stub.
//!
//! The engine notifies every sink after a tick that moved the live
//! mesh, and once more after a reset. Sinks only read positions; the
//! topology never changes after `init`.

use crumple_mesh::{GridTopology, VertexBuffer};
use crumple_types::CrumpleResult;

/// A single geometry notification.
pub struct GeometryFrame<'a> {
    /// Tick this frame corresponds to.
    pub tick: u64,
    /// Live vertex positions (borrowed from the motion state).
    pub positions: &'a VertexBuffer,
    /// Shared index lists.
    pub topology: &'a GridTopology,
}

impl<'a> GeometryFrame<'a> {
    pub fn new(tick: u64, positions: &'a VertexBuffer, topology: &'a GridTopology) -> Self {
        Self {
            tick,
            positions,
            topology,
        }
    }
}

/// Trait for consumers of live geometry.
///
/// # Implementations
/// - [`HeadlessSink`]: Counts frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): Records frames to a JSON file
pub trait GeometrySink: Send {
    /// Initialize the sink with the mesh topology.
    fn init(&mut self, topology: &GridTopology) -> CrumpleResult<()>;

    /// The live shape changed.
    fn on_geometry_changed(&mut self, frame: &GeometryFrame) -> CrumpleResult<()>;

    /// Finalize output (flush buffers, close files, etc.).
    fn finalize(&mut self) -> CrumpleResult<()>;

    /// Returns the sink name.
    fn name(&self) -> &str;

    /// Returns the number of frames received.
    fn frame_count(&self) -> u32;
}

/// Headless sink: counts frames and discards them.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    frames: u32,
    last_tick: Option<u64>,
}

impl HeadlessSink {
    /// Creates a new headless sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick of the most recent frame.
    pub fn last_tick(&self) -> Option<u64> {
        self.last_tick
    }
}

impl GeometrySink for HeadlessSink {
    fn init(&mut self, _topology: &GridTopology) -> CrumpleResult<()> {
        Ok(())
    }

    fn on_geometry_changed(&mut self, frame: &GeometryFrame) -> CrumpleResult<()> {
        self.frames += 1;
        self.last_tick = Some(frame.tick);
        Ok(())
    }

    fn finalize(&mut self) -> CrumpleResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
