//! Integrator trait: the core abstraction for advancing live positions.
//!
//! Every integrator implements this trait, so the engine can swap the
//! eased and spring designs from configuration.

use crumple_deform::TargetShape;

use crate::config::{IntegratorConfig, IntegratorKind};
use crate::eased::EasedInterpolator;
use crate::spring::SpringIntegrator;
use crate::state::MotionState;

/// Per-tick inputs besides the state and target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    /// Fixed timestep (seconds).
    pub dt: f32,
    /// Simulation time at the start of this tick (seconds).
    pub sim_time: f64,
    /// Whether the paper is currently puffed (enables breathing).
    pub puffed: bool,
}

/// Result of an integrator step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    /// Whether any live position changed.
    pub moved: bool,
    /// Whether the integrator reached its end and went idle.
    /// Always false for integrators that run indefinitely.
    pub finished: bool,
    /// Largest `|target - live|` component after the step.
    pub max_residual: f32,
}

/// Trait for motion integrators.
///
/// The engine calls these methods in order:
///
/// ```text
/// integrator.retarget(state);          // after every committed fold/puff
/// loop {
///     integrator.step(state, target, ctx);
/// }
/// integrator.cancel();                 // on reset
/// ```
///
/// Integrators never mutate the target.
pub trait MotionIntegrator: Send {
    /// A new target was committed. Called before the next step.
    fn retarget(&mut self, state: &MotionState);

    /// Advance live positions by one tick.
    fn step(&mut self, state: &mut MotionState, target: &TargetShape, ctx: &StepContext) -> StepResult;

    /// Drop any in-flight motion bookkeeping.
    fn cancel(&mut self);

    /// Whether further steps can still move the mesh on their own.
    fn is_active(&self) -> bool;

    fn kind(&self) -> IntegratorKind;

    /// Returns the integrator's name.
    fn name(&self) -> &str;
}

/// Builds the integrator selected by `config`.
pub fn build_integrator(config: &IntegratorConfig, vertex_count: usize) -> Box<dyn MotionIntegrator> {
    match config.kind {
        IntegratorKind::Eased => Box::new(EasedInterpolator::new(config, vertex_count)),
        IntegratorKind::Spring => Box::new(SpringIntegrator::new(config)),
    }
}

/// Largest `|target - live|` component.
pub(crate) fn max_residual(state: &MotionState, target: &TargetShape) -> f32 {
    let live = &state.live;
    let goal = &target.positions;
    (0..state.vertex_count)
        .map(|i| {
            (goal.pos_x[i] - live.pos_x[i])
                .abs()
                .max((goal.pos_y[i] - live.pos_y[i]).abs())
                .max((goal.pos_z[i] - live.pos_z[i]).abs())
        })
        .fold(0.0f32, f32::max)
}
