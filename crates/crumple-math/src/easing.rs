//! Easing curves mapping normalized time `t ∈ [0, 1]` to progress.

use serde::{Deserialize, Serialize};

/// Easing curve applied by the eased integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingCurve {
    /// Constant speed.
    Linear,
    /// Ease-out quadratic: `t·(2 - t)`.
    QuadOut,
    /// Ease-out cubic: `1 - (1 - t)³`.
    #[default]
    CubicOut,
}

impl EasingCurve {
    /// Evaluates the curve. `t` is clamped to `[0, 1]`, so both ends are exact.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingCurve::Linear => t,
            EasingCurve::QuadOut => t * (2.0 - t),
            EasingCurve::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }

    /// Returns a human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            EasingCurve::Linear => "linear",
            EasingCurve::QuadOut => "quad_out",
            EasingCurve::CubicOut => "cubic_out",
        }
    }
}
