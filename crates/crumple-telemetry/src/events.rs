//! Paper engine event types.
//!
//! Events are lightweight value types that carry just enough data for
//! downstream feedback (haptics, particles, UI labels) to react.

use serde::{Deserialize, Serialize};

/// An event emitted by the paper engine.
///
/// Tagged with the simulation tick during which it was raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperEvent {
    /// Clock tick count when the event was raised.
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A fold displaced at least one vertex.
    FoldApplied {
        /// Fold counter after this fold.
        fold_count: u32,
        /// Vertices reflected by this fold.
        moved_vertices: u32,
    },

    /// The puff toggle flipped.
    PuffToggled {
        /// New puff state.
        is_puffed: bool,
    },

    /// The sheet was flattened and all counters cleared.
    Reset,

    /// An eased animation reached its target.
    MotionSettled {
        /// Ticks the animation took.
        ticks: u32,
    },
}

impl PaperEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    /// Whether downstream feedback (haptics, particles) should fire.
    pub fn is_feedback(&self) -> bool {
        matches!(
            self.kind,
            EventKind::FoldApplied { .. } | EventKind::PuffToggled { .. }
        )
    }
}
