//! # Occupancy Mask
//!
//! A one-bit-per-cell view of which voxels belong to a single material.
//! Masks are cheap to derive and thrown away once the material is meshed.

use bitvec::prelude::BitVec;

use crate::error::GeometryError;

use super::{
    block_side::BlockSide,
    grid::{VoxelGrid, VoxelId},
};

/// Boolean 3D array with the same dimensions and layout as the [`VoxelGrid`] it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMask {
    dimensions: [usize; 3],
    solid_array: BitVec,
}

impl OccupancyMask {
    /// Marks every cell of `grid` holding `material_index + 1`.
    pub fn from_grid(grid: &VoxelGrid, material_index: usize) -> Self {
        let id = material_index as VoxelId + 1;
        Self {
            dimensions: grid.dimensions(),
            solid_array: grid.cells().iter().map(|cell| *cell == id).collect(),
        }
    }

    /// Builds a mask of the given size with every cell set by `f(x, y, z)`.
    pub fn from_fn(dimensions: [usize; 3], mut f: impl FnMut(usize, usize, usize) -> bool) -> Self {
        let [width, height, depth] = dimensions;
        let mut solid_array = BitVec::with_capacity(width * height * depth);
        for x in 0..width {
            for y in 0..height {
                for z in 0..depth {
                    solid_array.push(f(x, y, z));
                }
            }
        }
        Self {
            dimensions,
            solid_array,
        }
    }

    /// Builds a mask from a nested `[x][y][z]` boolean array.
    ///
    /// # Errors
    /// [`GeometryError::Ragged`] if the array is not a box.
    pub fn from_nested(cells: &[Vec<Vec<bool>>]) -> Result<Self, GeometryError> {
        let height = cells.first().map_or(0, Vec::len);
        let depth = cells
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);

        for (x, plane) in cells.iter().enumerate() {
            if plane.len() != height {
                return Err(GeometryError::Ragged {
                    path: vec![x],
                    expected: height,
                    found: plane.len(),
                });
            }
            for (y, row) in plane.iter().enumerate() {
                if row.len() != depth {
                    return Err(GeometryError::Ragged {
                        path: vec![x, y],
                        expected: depth,
                        found: row.len(),
                    });
                }
            }
        }

        Ok(Self::from_fn([cells.len(), height, depth], |x, y, z| {
            cells[x][y][z]
        }))
    }

    /// `[width, height, depth]`.
    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    /// Whether `(x, y, z)` is occupied. Cells outside the mask are empty.
    pub fn is_solid(&self, x: isize, y: isize, z: isize) -> bool {
        let [width, height, depth] = self.dimensions;
        if x < 0 || y < 0 || z < 0 {
            return false;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= width || y >= height || z >= depth {
            return false;
        }
        self.solid_array[(x * height + y) * depth + z]
    }

    /// Whether the face of cell `position` on `side` is visible, i.e. the cell is
    /// occupied and its neighbour across that face is not.
    pub fn is_face_visible(&self, position: [usize; 3], side: BlockSide) -> bool {
        let [x, y, z] = position.map(|c| c as isize);
        if !self.is_solid(x, y, z) {
            return false;
        }
        let [dx, dy, dz] = side.offset();
        !self.is_solid(x + dx, y + dy, z + dz)
    }

    /// Number of occupied cells.
    pub fn count_solid(&self) -> usize {
        self.solid_array.count_ones()
    }

    /// True if no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.solid_array.not_any()
    }
}
