//! # crumple-render
//!
//! Pluggable geometry output for the paper engine.
//!
//! Provides a `GeometrySink` trait that is told whenever the live shape
//! changes, a `HeadlessSink` that only counts notifications, and a
//! `JsonFrameExporter` that records every frame for offline playback.

pub mod json_exporter;
pub mod sink;
pub use json_exporter::JsonFrameExporter;
pub use sink::{GeometryFrame, GeometrySink, HeadlessSink};
