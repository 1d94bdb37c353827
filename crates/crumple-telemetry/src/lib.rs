//! # crumple-telemetry
//!
//! Event bus for paper engine signals. Emits structured events
//! (fold completed, puff toggled, reset, motion settled) that are
//! consumed by pluggable sinks: haptics, particle bursts, UI state,
//! log output.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, PaperEvent};
pub use sinks::{CallbackSink, EventSink, TracingSink, VecSink};
