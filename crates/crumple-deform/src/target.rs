//! The target shape the live mesh is driven toward.

use serde::{Deserialize, Serialize};

use crumple_mesh::VertexBuffer;

use crate::fold::{apply_fold, FoldLine, FoldOutcome};
use crate::puff::{compute_puff_layer, PuffOutcome, PuffParams};

/// Per-vertex displacement contributed by the active puff.
///
/// Kept apart from the layering so deflating can remove exactly what
/// inflating added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PuffLayer {
    pub dx: Vec<f32>,
    pub dy: Vec<f32>,
    pub dz: Vec<f32>,
}

impl PuffLayer {
    pub fn zeros(n: usize) -> Self {
        Self {
            dx: vec![0.0; n],
            dy: vec![0.0; n],
            dz: vec![0.0; n],
        }
    }

    pub fn resize(&mut self, n: usize) {
        self.dx.resize(n, 0.0);
        self.dy.resize(n, 0.0);
        self.dz.resize(n, 0.0);
    }

    /// Zeroes the displacement, keeping the allocation.
    pub fn clear(&mut self) {
        self.dx.fill(0.0);
        self.dy.fill(0.0);
        self.dz.fill(0.0);
    }

    pub fn is_zero(&self) -> bool {
        self.dx.iter().chain(&self.dy).chain(&self.dz).all(|&d| d == 0.0)
    }
}

/// Target positions plus the displacement of the applied puff.
///
/// `positions` always includes the puff layer; it is what integrators
/// read each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetShape {
    pub positions: VertexBuffer,
    pub puff_layer: PuffLayer,
    /// Per-vertex inflation height that drives breathing while puffed.
    ///
    /// Set when the puff inflates and cleared only by deflating or
    /// reset. A fold bakes `puff_layer` but leaves this alone, so the
    /// values follow their vertices onto the folded layers.
    pub breathing_dz: Vec<f32>,
}

impl TargetShape {
    /// A target that matches `rest` with no puff applied.
    pub fn from_rest(rest: &VertexBuffer) -> Self {
        Self {
            positions: rest.clone(),
            puff_layer: PuffLayer::zeros(rest.len()),
            breathing_dz: vec![0.0; rest.len()],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Overwrites the target with `rest` and drops the puff layer.
    pub fn reset_to(&mut self, rest: &VertexBuffer) {
        self.positions.copy_from(rest);
        self.puff_layer.clear();
        self.breathing_dz.clear();
        self.breathing_dz.resize(rest.len(), 0.0);
    }

    /// Folds the target across `line`.
    ///
    /// An applied fold bakes the current puff displacement into the
    /// layering: the folded shape becomes the new baseline for later puffs.
    pub fn fold(&mut self, line: &FoldLine, stacking_offset: f32) -> FoldOutcome {
        let outcome = apply_fold(&mut self.positions, line, stacking_offset);
        if outcome.is_applied() {
            self.puff_layer.clear();
        }
        outcome
    }

    /// Re-evaluates the puff for the given state.
    ///
    /// The previous puff layer is removed first, then the new one is
    /// computed from the remaining layering and added back.
    pub fn puff(&mut self, puffed: bool, params: &PuffParams) -> PuffOutcome {
        self.apply_layer(-1.0);
        let outcome = compute_puff_layer(&self.positions, puffed, params, &mut self.puff_layer);
        self.apply_layer(1.0);

        self.breathing_dz.clear();
        if puffed {
            self.breathing_dz.extend_from_slice(&self.puff_layer.dz);
        } else {
            self.breathing_dz.resize(self.positions.len(), 0.0);
        }
        outcome
    }

    fn apply_layer(&mut self, sign: f32) {
        let layer = &self.puff_layer;
        let shape = &mut self.positions;
        for i in 0..shape.len().min(layer.dz.len()) {
            shape.pos_x[i] += sign * layer.dx[i];
            shape.pos_y[i] += sign * layer.dy[i];
            shape.pos_z[i] += sign * layer.dz[i];
        }
    }
}
