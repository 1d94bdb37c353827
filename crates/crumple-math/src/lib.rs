//! # crumple-math
//!
//! Math primitives for the Crumple paper engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, `Quat`)
//! - Easing curves for time-boxed interpolation
//! - Axis-aligned 2D bounds used for silhouette recentering

pub mod bounds;
pub mod easing;

pub use bounds::Bounds2;
pub use easing::EasingCurve;

// Re-export glam types as the canonical math types for Crumple.
pub use glam::{EulerRot, Quat, Vec2, Vec3};
