//! # crumple-mesh
//!
//! Grid mesh model for the paper sheet, with Structure-of-Arrays (SoA)
//! vertex buffers.
//!
//! ## Key Types
//!
//! - [`VertexBuffer`]: SoA positions. Live and target shapes are both
//!   stored in this form.
//! - [`GridTopology`]: Triangle and crease-line index lists, fixed at
//!   construction.
//! - [`GridMesh`]: A flat lattice plus its topology, built by
//!   [`generators::build`].
//! - [`RenderBuffers`]: Interleaved, renderer-ready copy of a shape.

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use mesh::{GridMesh, RenderBuffers, VertexBuffer};
pub use topology::GridTopology;
