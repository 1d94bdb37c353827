//! # crumple-solver
//!
//! Motion integration and live-state management.
//!
//! ## Key Types
//!
//! - [`MotionState`]: SoA buffers for live positions and velocities
//! - [`MotionIntegrator`]: Pluggable integrator trait
//! - [`EasedInterpolator`]: Fixed-duration eased blend toward the target
//! - [`SpringIntegrator`]: Continuous damped spring with puff breathing
//! - [`IntegratorConfig`]: Integrator selection and tuning

pub mod config;
pub mod eased;
pub mod spring;
pub mod state;
pub mod strategy;

pub use config::{IntegratorConfig, IntegratorKind};
pub use eased::EasedInterpolator;
pub use spring::SpringIntegrator;
pub use state::MotionState;
pub use strategy::{build_integrator, MotionIntegrator, StepContext, StepResult};
