//! # Rendering
//!
//! Geometry and GPU-side types:
//!
//! * [`vertex`]: the vertex layout every mesh is built in
//! * [`meshing`]: occupancy mask to surface mesh
//! * [`texture`]: cube and tile textures on the GPU
//! * [`scene`]: the renderer hand-off for a whole level

pub mod meshing;
pub mod scene;
pub mod texture;
pub mod vertex;

pub use meshing::{CulledMesher, GreedyMesher, SurfaceBuilder, SurfaceMesh};
pub use scene::{GpuMaterialMesh, GpuScene, SceneSink};
pub use texture::GpuTexture;
pub use vertex::Vertex;
