//! User gestures as data.
//!
//! Hosts translate pointer input into [`Gesture`] values; scripts list
//! them with the tick they fire on. Hit testing stays with the host:
//! a fold endpoint that missed the paper arrives as `None`.

use serde::{Deserialize, Serialize};

use crumple_deform::FoldOutcome;

/// One user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// Drag from `start` to `end` in the paper plane.
    Fold { start: [f32; 2], end: [f32; 2] },
    /// Drag whose endpoints may have missed the paper.
    FoldUnresolved {
        #[serde(default)]
        start: Option<[f32; 2]>,
        #[serde(default)]
        end: Option<[f32; 2]>,
    },
    TogglePuff,
    /// Camera drag (radians).
    Rotate { yaw: f32, pitch: f32 },
    Reset,
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Fold { .. } => "fold",
            Gesture::FoldUnresolved { .. } => "fold_unresolved",
            Gesture::TogglePuff => "toggle_puff",
            Gesture::Rotate { .. } => "rotate",
            Gesture::Reset => "reset",
        }
    }
}

/// A gesture fired when the clock reaches `at_tick`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledGesture {
    pub at_tick: u64,
    pub gesture: Gesture,
}

/// What a gesture did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    Fold(FoldOutcome),
    Puff { is_puffed: bool },
    Rotated { yaw: f32, pitch: f32 },
    Reset,
}
