//! Continuous damped-spring integrator.
//!
//! Per vertex and axis, every tick:
//!
//! ```text
//! force    = (target - live) * stiffness
//! accel    = force / mass
//! velocity = (velocity + accel * dt) * (1 - damping * dt)
//! live    += velocity * dt
//! ```
//!
//! Damping is a per-tick velocity decay factor, not a damping force.
//! While puffed, the target Z is modulated by a slow sine so the
//! inflated sheet keeps breathing.

use std::f32::consts::TAU;

use crumple_deform::TargetShape;

use crate::config::{IntegratorConfig, IntegratorKind};
use crate::state::MotionState;
use crate::strategy::{MotionIntegrator, StepContext, StepResult};

/// Spatial phase shift of the breathing wave per unit of `x + y`.
const BREATHING_PHASE_SCALE: f32 = 0.5;

/// Damped-spring integrator. Never finishes.
pub struct SpringIntegrator {
    stiffness: f32,
    damping: f32,
    mass: f32,
    breathing_amplitude: f32,
    breathing_rate: f32,
}

impl SpringIntegrator {
    pub fn new(config: &IntegratorConfig) -> Self {
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
            breathing_amplitude: config.breathing_amplitude,
            breathing_rate: config.breathing_rate,
        }
    }

    /// Breathing offset added to the target Z of a vertex.
    ///
    /// Scales the vertex's inflation height, so regions the puff never
    /// lifted stay still.
    #[inline]
    pub fn breathing_offset(&self, puff_dz: f32, x: f32, y: f32, sim_time: f64) -> f32 {
        let phase = (x + y) * BREATHING_PHASE_SCALE;
        let wave = (TAU * self.breathing_rate * sim_time as f32 + phase).sin();
        puff_dz * self.breathing_amplitude * wave
    }

    #[inline]
    fn advance(&self, live: &mut f32, velocity: &mut f32, goal: f32, dt: f32, decay: f32) -> f32 {
        let force = (goal - *live) * self.stiffness;
        let accel = force / self.mass;
        *velocity = (*velocity + accel * dt) * decay;
        *live += *velocity * dt;
        (goal - *live).abs()
    }
}

impl MotionIntegrator for SpringIntegrator {
    fn retarget(&mut self, _state: &MotionState) {
        // The spring chases whatever the target holds; nothing to capture.
    }

    fn step(&mut self, state: &mut MotionState, target: &TargetShape, ctx: &StepContext) -> StepResult {
        let dt = ctx.dt;
        let decay = 1.0 - self.damping * dt;
        let goal = &target.positions;
        let breathing = ctx.puffed && self.breathing_amplitude > 0.0;

        let mut moved = false;
        let mut max_residual = 0.0f32;

        for i in 0..state.vertex_count {
            let mut goal_z = goal.pos_z[i];
            if breathing {
                let dz = target.breathing_dz.get(i).copied().unwrap_or(0.0);
                goal_z += self.breathing_offset(dz, goal.pos_x[i], goal.pos_y[i], ctx.sim_time);
            }

            let before = state.live.position(i);
            let rx = self.advance(&mut state.live.pos_x[i], &mut state.vel_x[i], goal.pos_x[i], dt, decay);
            let ry = self.advance(&mut state.live.pos_y[i], &mut state.vel_y[i], goal.pos_y[i], dt, decay);
            let rz = self.advance(&mut state.live.pos_z[i], &mut state.vel_z[i], goal_z, dt, decay);

            moved |= before != state.live.position(i);
            max_residual = max_residual.max(rx).max(ry).max(rz);
        }

        StepResult {
            moved,
            finished: false,
            max_residual,
        }
    }

    fn cancel(&mut self) {}

    fn is_active(&self) -> bool {
        true
    }

    fn kind(&self) -> IntegratorKind {
        IntegratorKind::Spring
    }

    fn name(&self) -> &str {
        "damped_spring"
    }
}
