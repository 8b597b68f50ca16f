//! # Voxel Data
//!
//! This module contains the voxel-side data model of a level:
//!
//! * **Block sides**: the six faces of a cell and their axis arithmetic
//! * **Grid**: the immutable `[x][y][z]` array of material ids
//! * **Occupancy**: per-material boolean masks derived from the grid
//!
//! ## Thread Safety
//!
//! Nothing here is mutated after construction. A [`grid::VoxelGrid`] can be
//! read from any number of meshing threads at once.

pub mod block_side;
pub mod grid;
pub mod occupancy;

pub use block_side::{BlockSide, FACE_COUNT};
pub use grid::{VoxelGrid, VoxelId, EMPTY_VOXEL};
pub use occupancy::OccupancyMask;
