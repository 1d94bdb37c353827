//! # crumple-debug
//!
//! State snapshots for debugging fold and puff behaviour. A snapshot
//! captures the live shape, the target, velocities and the counters of
//! a running engine and serializes them to a compact binary file.

pub mod snapshot;

pub use snapshot::{SnapshotSummary, StateSnapshot};
