//! # crumple-engine
//!
//! The paper engine. Owns the grid mesh, the target shape, the motion
//! integrator and the simulation clock, and turns gestures into target
//! rewrites, ticks into live motion, and both into observer signals.
//!
//! ## Key Types
//!
//! - [`PaperEngine`]: Gesture coordinator and tick driver
//! - [`EngineConfig`]: All tuning in one serde struct
//! - [`SimulationClock`]: Fixed-step scheduler with a single tick callback
//! - [`OrbitCamera`]: View-only yaw/pitch state
//! - [`Gesture`]: Serializable user input

pub mod camera;
pub mod clock;
pub mod config;
pub mod engine;
pub mod gesture;

pub use camera::OrbitCamera;
pub use clock::{ClockControl, SimulationClock, TickInfo};
pub use config::EngineConfig;
pub use engine::{PaperEngine, PaperStatus};
pub use gesture::{Gesture, GestureOutcome, ScheduledGesture};
