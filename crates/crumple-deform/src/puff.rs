//! Puff transform: procedural inflation between paper layers.
//!
//! The Z midpoint of the shape acts as a waterline. Vertices at or above
//! it are pushed up, vertices below it are pushed down, by an amount
//! shaped by a `|sin(x·f)·cos(y·f)|` pocket pattern. Turning the puff
//! off drives the power to zero.

use serde::{Deserialize, Serialize};

use crumple_mesh::VertexBuffer;
use crumple_types::constants::{DEFAULT_PUFF_BASE, DEFAULT_PUFF_FREQUENCY, DEFAULT_PUFF_STRENGTH};
use crumple_types::{CrumpleError, CrumpleResult};

use crate::target::PuffLayer;

/// Tuning of the puff transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuffParams {
    /// Inflation power while puffed.
    pub strength: f32,
    /// Spatial frequency `f` of the pocket pattern.
    pub frequency: f32,
    /// Additive term `c` so that flat regions still inflate.
    pub base: f32,
    /// Outward XY scale at the center while puffed (0 disables).
    pub spread: f32,
}

impl Default for PuffParams {
    fn default() -> Self {
        Self {
            strength: DEFAULT_PUFF_STRENGTH,
            frequency: DEFAULT_PUFF_FREQUENCY,
            base: DEFAULT_PUFF_BASE,
            spread: 0.0,
        }
    }
}

impl PuffParams {
    /// A gentler pillow: weaker and broader pockets with a slight outward swell.
    pub fn pillow() -> Self {
        Self {
            strength: 1.4,
            frequency: 0.4,
            spread: 0.05,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> CrumpleResult<()> {
        let fields = [
            ("strength", self.strength),
            ("frequency", self.frequency),
            ("base", self.base),
            ("spread", self.spread),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(CrumpleError::InvalidConfig(format!(
                    "puff.{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.strength < 0.0 || self.spread < 0.0 {
            return Err(CrumpleError::InvalidConfig(
                "puff strength and spread must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

/// Summary of one puff evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuffOutcome {
    /// Puff state the displacement was computed for.
    pub puffed: bool,
    /// `(min_z + max_z) / 2` of the layering.
    pub median_z: f32,
    /// Number of vertices with a non-zero displacement.
    pub displaced: usize,
}

/// Pocket weight at `(x, y)`: `|sin(x·f)·cos(y·f)|`.
#[inline]
pub fn pocket_shape(x: f32, y: f32, frequency: f32) -> f32 {
    ((x * frequency).sin() * (y * frequency).cos()).abs()
}

/// Computes the puff displacement of `layering` into `layer`.
///
/// `layering` is the target with any previous puff removed. The layer
/// is resized to match and fully overwritten.
pub fn compute_puff_layer(
    layering: &VertexBuffer,
    puffed: bool,
    params: &PuffParams,
    layer: &mut PuffLayer,
) -> PuffOutcome {
    let n = layering.len();
    layer.resize(n);

    let median_z = layering
        .z_range()
        .map(|(min, max)| (min + max) / 2.0)
        .unwrap_or(0.0);
    let power = if puffed { params.strength } else { 0.0 };

    let spread = if puffed { params.spread } else { 0.0 };
    let max_radius = (0..n)
        .map(|i| layering.pos_x[i].hypot(layering.pos_y[i]))
        .fold(0.0f32, f32::max);

    let mut displaced = 0;
    for i in 0..n {
        let x = layering.pos_x[i];
        let y = layering.pos_y[i];
        let z = layering.pos_z[i];

        let direction = if z >= median_z { 1.0 } else { -1.0 };
        let expansion = pocket_shape(x, y, params.frequency) * power * ((z - median_z).abs() + params.base);
        layer.dz[i] = expansion * direction;

        if spread > 0.0 && max_radius > 0.0 {
            let falloff = (1.0 - x.hypot(y) / max_radius).max(0.0);
            layer.dx[i] = x * spread * falloff;
            layer.dy[i] = y * spread * falloff;
        } else {
            layer.dx[i] = 0.0;
            layer.dy[i] = 0.0;
        }

        if layer.dx[i] != 0.0 || layer.dy[i] != 0.0 || layer.dz[i] != 0.0 {
            displaced += 1;
        }
    }

    PuffOutcome {
        puffed,
        median_z,
        displaced,
    }
}
