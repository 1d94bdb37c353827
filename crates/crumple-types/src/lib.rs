//! # crumple-types
//!
//! Shared error types and tuning constants for the Crumple paper
//! deformation engine.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other Crumple crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{CrumpleError, CrumpleResult};
pub use ids::VertexId;
