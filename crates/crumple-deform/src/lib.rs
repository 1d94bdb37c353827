//! # crumple-deform
//!
//! Transforms that rewrite the paper's target shape.
//!
//! - [`fold`]: reflects the vertices on one side of a fold line across
//!   it, lifts them by a stacking offset, and recenters the silhouette.
//! - [`puff`]: procedural inflation that bulges layers apart around
//!   the Z midpoint.
//! - [`TargetShape`]: the target positions together with the
//!   displacement of the currently applied puff.
//!
//! Transforms overwrite buffer contents in place and never touch live
//! positions; the motion integrator owns those.

pub mod fold;
pub mod puff;
pub mod target;

pub use fold::{FoldLine, FoldOutcome, FoldRejection};
pub use puff::{PuffOutcome, PuffParams};
pub use target::{PuffLayer, TargetShape};
