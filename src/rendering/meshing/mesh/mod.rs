//! Mesh generation for voxel rendering.
//!
//! This module provides the core functionality for converting occupancy masks into
//! GPU-friendly triangle meshes.
//!
//! # Architecture
//! - [`SurfaceMesh`]: vertices and indices of one material's surface
//! - [`Face`]: a quad on one side of the voxels, grown by merging
//! - [`collect_faces`]: face culling plus optional greedy merging

mod face;
mod greedy;
mod mesh;

pub use face::Face;
pub use greedy::collect_faces;
pub use mesh::SurfaceMesh;
