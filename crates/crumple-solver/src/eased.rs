//! Time-boxed eased interpolation.
//!
//! Each retarget captures the current live positions and blends them
//! toward the target over a fixed number of ticks:
//!
//! ```text
//! t     = step / total_steps
//! live  = lerp(start, target, easing(t))
//! ```
//!
//! The last step writes the target exactly and the interpolator goes idle.

use tracing::trace;

use crumple_deform::TargetShape;
use crumple_math::EasingCurve;
use crumple_mesh::VertexBuffer;

use crate::config::{IntegratorConfig, IntegratorKind};
use crate::state::MotionState;
use crate::strategy::{max_residual, MotionIntegrator, StepContext, StepResult};

/// Fixed-duration eased interpolator.
pub struct EasedInterpolator {
    easing: EasingCurve,
    total_steps: u32,
    step: u32,
    start: VertexBuffer,
    active: bool,
}

impl EasedInterpolator {
    /// Creates an idle interpolator for `vertex_count` vertices.
    pub fn new(config: &IntegratorConfig, vertex_count: usize) -> Self {
        Self {
            easing: config.easing,
            total_steps: config.total_steps(),
            step: 0,
            start: VertexBuffer::zeros(vertex_count),
            active: false,
        }
    }

    /// Ticks per animation.
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Ticks taken in the current animation.
    pub fn current_step(&self) -> u32 {
        self.step
    }

    /// Positions the current animation started from.
    pub fn start_positions(&self) -> &VertexBuffer {
        &self.start
    }
}

impl MotionIntegrator for EasedInterpolator {
    fn retarget(&mut self, state: &MotionState) {
        if self.start.len() == state.live.len() {
            self.start.copy_from(&state.live);
        } else {
            self.start = state.live.clone();
        }
        self.step = 0;
        self.active = true;
    }

    fn step(&mut self, state: &mut MotionState, target: &TargetShape, _ctx: &StepContext) -> StepResult {
        if !self.active {
            return StepResult {
                moved: false,
                finished: true,
                max_residual: max_residual(state, target),
            };
        }

        self.step += 1;

        if self.step >= self.total_steps {
            state.live.copy_from(&target.positions);
            self.active = false;
            trace!(steps = self.step, "eased animation finished");
            return StepResult {
                moved: true,
                finished: true,
                max_residual: 0.0,
            };
        }

        let t = self.step as f32 / self.total_steps as f32;
        let k = self.easing.apply(t);
        let start = &self.start;
        let goal = &target.positions;
        let live = &mut state.live;
        for i in 0..state.vertex_count {
            live.pos_x[i] = start.pos_x[i] + (goal.pos_x[i] - start.pos_x[i]) * k;
            live.pos_y[i] = start.pos_y[i] + (goal.pos_y[i] - start.pos_y[i]) * k;
            live.pos_z[i] = start.pos_z[i] + (goal.pos_z[i] - start.pos_z[i]) * k;
        }

        StepResult {
            moved: true,
            finished: false,
            max_residual: max_residual(state, target),
        }
    }

    fn cancel(&mut self) {
        self.step = 0;
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn kind(&self) -> IntegratorKind {
        IntegratorKind::Eased
    }

    fn name(&self) -> &str {
        "eased_interpolator"
    }
}
