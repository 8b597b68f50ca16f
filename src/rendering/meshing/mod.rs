//! # Meshing
//!
//! Turns a per-material [`OccupancyMask`] into a [`SurfaceMesh`]. Only faces
//! between an occupied cell and an empty (or out-of-grid) neighbour are emitted.
//!
//! Two builders implement [`SurfaceBuilder`]:
//! - [`GreedyMesher`] merges coplanar neighbours into larger quads
//! - [`CulledMesher`] emits one quad per visible voxel face
//!
//! Both cover exactly the same surface and are deterministic for a given mask.

pub mod mesh;

pub use mesh::{collect_faces, Face, SurfaceMesh};

use crate::{config::LoaderConfig, voxels::occupancy::OccupancyMask};

/// Builds the surface mesh of one occupancy mask.
///
/// Implementations must be pure: the same mask always yields the same mesh.
/// They are shared across meshing threads, hence `Send + Sync`.
pub trait SurfaceBuilder: Send + Sync {
    /// Builds the culled surface of `mask`. An all-empty mask yields an empty mesh.
    fn build(&self, mask: &OccupancyMask) -> SurfaceMesh;
}

/// Face culling with greedy quad merging.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyMesher;

impl SurfaceBuilder for GreedyMesher {
    fn build(&self, mask: &OccupancyMask) -> SurfaceMesh {
        SurfaceMesh::from_faces(&collect_faces(mask, true))
    }
}

/// Face culling only, one quad per visible voxel face.
#[derive(Debug, Default, Clone, Copy)]
pub struct CulledMesher;

impl SurfaceBuilder for CulledMesher {
    fn build(&self, mask: &OccupancyMask) -> SurfaceMesh {
        SurfaceMesh::from_faces(&collect_faces(mask, false))
    }
}

/// Picks the builder selected by `config.greedy_meshing`.
pub fn surface_builder(config: &LoaderConfig) -> Box<dyn SurfaceBuilder> {
    if config.greedy_meshing {
        Box::new(GreedyMesher)
    } else {
        Box::new(CulledMesher)
    }
}
