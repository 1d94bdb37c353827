//! Tuning constants and engine defaults.

/// Default simulation tick rate (ticks per second).
pub const DEFAULT_TICK_RATE: f32 = 60.0;

/// Default fixed timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / DEFAULT_TICK_RATE;

/// Default grid resolution (cells per side).
pub const DEFAULT_SEGMENTS: usize = 20;

/// Default paper edge length in scene units.
pub const DEFAULT_PAPER_SIZE: f32 = 4.0;

/// Z increment applied to freshly folded vertices.
pub const DEFAULT_STACKING_OFFSET: f32 = 0.2;

/// Inflation strength while puffed.
pub const DEFAULT_PUFF_STRENGTH: f32 = 1.6;

/// Spatial frequency of the puff pocket pattern.
pub const DEFAULT_PUFF_FREQUENCY: f32 = 0.5;

/// Additive base term of the puff expansion.
pub const DEFAULT_PUFF_BASE: f32 = 0.5;

/// Spring stiffness pulling live positions toward the target.
pub const DEFAULT_SPRING_STIFFNESS: f32 = 120.0;

/// Exponential velocity decay rate (1/s).
pub const DEFAULT_SPRING_DAMPING: f32 = 8.0;

/// Per-vertex mass.
pub const DEFAULT_VERTEX_MASS: f32 = 1.0;

/// Eased animation length (seconds).
pub const DEFAULT_EASE_DURATION: f32 = 0.6;

/// Pitch limit of the orbit camera (radians). Pitch stays in `±PITCH_LIMIT`.
pub const PITCH_LIMIT: f32 = std::f32::consts::PI / 2.2;

/// Squared-length threshold below which a fold line is degenerate.
pub const EPSILON: f32 = 1.0e-7;

/// Most fixed steps a single clock advance may run before it drops the backlog.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Default orbit camera distance from the paper center.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 8.0;
