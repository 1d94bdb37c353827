//! Engine configuration.

use serde::{Deserialize, Serialize};

use crumple_deform::PuffParams;
use crumple_solver::IntegratorConfig;
use crumple_types::constants::{DEFAULT_PAPER_SIZE, DEFAULT_SEGMENTS, DEFAULT_STACKING_OFFSET};
use crumple_types::{CrumpleError, CrumpleResult};

/// Configuration for one paper engine.
///
/// Every field has a default, so a TOML file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Grid cells per side.
    pub segments: usize,
    /// Edge length of the square sheet.
    pub paper_size: f32,
    /// Z lift of freshly folded vertices.
    pub stacking_offset: f32,
    /// Puff transform tuning.
    pub puff: PuffParams,
    /// Integrator selection and tuning.
    pub integrator: IntegratorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            paper_size: DEFAULT_PAPER_SIZE,
            stacking_offset: DEFAULT_STACKING_OFFSET,
            puff: PuffParams::default(),
            integrator: IntegratorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Continuous damped spring with breathing (the default).
    pub fn spring() -> Self {
        Self::default()
    }

    /// Eased interpolation that halts once the target is reached.
    pub fn eased() -> Self {
        Self {
            integrator: IntegratorConfig::eased(),
            ..Default::default()
        }
    }

    /// Vertices in the lattice, `(segments + 1)²`.
    pub fn vertex_count(&self) -> usize {
        (self.segments + 1) * (self.segments + 1)
    }

    pub fn validate(&self) -> CrumpleResult<()> {
        if self.segments == 0 {
            return Err(CrumpleError::InvalidConfig(
                "segments must be at least 1".into(),
            ));
        }
        if !self.paper_size.is_finite() || self.paper_size <= 0.0 {
            return Err(CrumpleError::InvalidConfig(format!(
                "paper_size must be positive and finite, got {}",
                self.paper_size
            )));
        }
        if !self.stacking_offset.is_finite() {
            return Err(CrumpleError::InvalidConfig(format!(
                "stacking_offset must be finite, got {}",
                self.stacking_offset
            )));
        }
        self.puff.validate()?;
        self.integrator.validate()
    }
}
