//! Integrator configuration.
//!
//! Selects the integrator and carries the tuning of both designs, so a
//! config can switch kinds without losing the other's parameters.

use serde::{Deserialize, Serialize};

use crumple_math::EasingCurve;
use crumple_types::constants::{
    DEFAULT_EASE_DURATION, DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_STIFFNESS, DEFAULT_TICK_RATE,
    DEFAULT_VERTEX_MASS,
};
use crumple_types::{CrumpleError, CrumpleResult};

/// Which motion integrator drives the live mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorKind {
    /// Fixed-duration eased interpolation, restarted on every new target.
    Eased,
    /// Continuous damped spring that never finishes.
    #[default]
    Spring,
}

impl IntegratorKind {
    pub fn name(self) -> &'static str {
        match self {
            IntegratorKind::Eased => "eased",
            IntegratorKind::Spring => "spring",
        }
    }
}

/// Configuration for the motion integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorConfig {
    /// Integrator selection.
    pub kind: IntegratorKind,

    /// Simulation ticks per second. The fixed timestep is `1 / tick_rate`.
    pub tick_rate: f32,

    // ─── Spring ───
    /// Spring constant pulling live positions toward the target.
    pub stiffness: f32,
    /// Exponential velocity decay rate (1/s).
    pub damping: f32,
    /// Per-vertex mass.
    pub mass: f32,
    /// Relative amplitude of the breathing modulation while puffed.
    pub breathing_amplitude: f32,
    /// Breathing frequency (Hz).
    pub breathing_rate: f32,

    // ─── Eased ───
    /// Easing curve of the interpolation.
    pub easing: EasingCurve,
    /// Length of one eased animation (seconds).
    pub duration: f32,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            kind: IntegratorKind::Spring,
            tick_rate: DEFAULT_TICK_RATE,
            stiffness: DEFAULT_SPRING_STIFFNESS,
            damping: DEFAULT_SPRING_DAMPING,
            mass: DEFAULT_VERTEX_MASS,
            breathing_amplitude: 0.15,
            breathing_rate: 0.5,
            easing: EasingCurve::CubicOut,
            duration: DEFAULT_EASE_DURATION,
        }
    }
}

impl IntegratorConfig {
    /// Continuous damped spring (the default).
    pub fn spring() -> Self {
        Self::default()
    }

    /// Eased interpolation with a quadratic ease-out over half a second.
    pub fn eased() -> Self {
        Self {
            kind: IntegratorKind::Eased,
            easing: EasingCurve::QuadOut,
            duration: 0.5,
            ..Default::default()
        }
    }

    /// Fixed timestep (seconds).
    #[inline]
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Ticks in one eased animation. Never zero.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        ((self.duration * self.tick_rate).round() as u32).max(1)
    }

    pub fn validate(&self) -> CrumpleResult<()> {
        let positive = [
            ("tick_rate", self.tick_rate),
            ("mass", self.mass),
            ("duration", self.duration),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CrumpleError::InvalidConfig(format!(
                    "integrator.{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("breathing_amplitude", self.breathing_amplitude),
            ("breathing_rate", self.breathing_rate),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CrumpleError::InvalidConfig(format!(
                    "integrator.{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        // (1 - damping·dt) must stay a decay factor.
        if self.damping * self.dt() >= 1.0 {
            return Err(CrumpleError::InvalidConfig(format!(
                "integrator.damping ({}) is too high for a {} Hz tick rate",
                self.damping, self.tick_rate
            )));
        }

        Ok(())
    }
}
