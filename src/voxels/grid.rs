//! # Voxel Grid
//!
//! The immutable `[x][y][z]` array of voxel ids a level is built from.
//! Id `0` is empty; id `i > 0` refers to material `i - 1`.

use crate::error::GeometryError;

/// Id stored in a voxel cell.
pub type VoxelId = u32;

/// Id of an empty cell.
pub const EMPTY_VOXEL: VoxelId = 0;

/// A dense box of voxel ids.
///
/// Stored flat with `z` varying fastest, matching the nesting order of the
/// level description (`voxels[x][y][z]`). Never mutated after construction,
/// so it can be shared across meshing threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    dimensions: [usize; 3],
    cells: Vec<VoxelId>,
}

impl VoxelGrid {
    /// Builds a grid from the nested array found in a level description.
    ///
    /// # Errors
    /// [`GeometryError::Ragged`] if any `y` or `z` row differs in length from the first.
    pub fn from_nested(voxels: Vec<Vec<Vec<VoxelId>>>) -> Result<Self, GeometryError> {
        let width = voxels.len();
        let height = voxels.first().map_or(0, Vec::len);
        let depth = voxels
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width * height * depth);
        for (x, plane) in voxels.into_iter().enumerate() {
            if plane.len() != height {
                return Err(GeometryError::Ragged {
                    path: vec![x],
                    expected: height,
                    found: plane.len(),
                });
            }
            for (y, row) in plane.into_iter().enumerate() {
                if row.len() != depth {
                    return Err(GeometryError::Ragged {
                        path: vec![x, y],
                        expected: depth,
                        found: row.len(),
                    });
                }
                cells.extend(row);
            }
        }

        Ok(Self {
            dimensions: [width, height, depth],
            cells,
        })
    }

    /// Builds a grid of the given size with every cell set by `f(x, y, z)`.
    pub fn from_fn(dimensions: [usize; 3], mut f: impl FnMut(usize, usize, usize) -> VoxelId) -> Self {
        let [width, height, depth] = dimensions;
        let mut cells = Vec::with_capacity(width * height * depth);
        for x in 0..width {
            for y in 0..height {
                for z in 0..depth {
                    cells.push(f(x, y, z));
                }
            }
        }
        Self { dimensions, cells }
    }

    /// `[width, height, depth]`.
    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Id at `(x, y, z)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<VoxelId> {
        let [width, height, depth] = self.dimensions;
        if x >= width || y >= height || z >= depth {
            return None;
        }
        Some(self.cells[self.linear_index(x, y, z)])
    }

    /// All cells with their coordinates, `z` fastest.
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 3], VoxelId)> + '_ {
        let [_, height, depth] = self.dimensions;
        self.cells.iter().enumerate().map(move |(i, id)| {
            let z = i % depth;
            let y = (i / depth) % height;
            let x = i / (depth * height);
            ([x, y, z], *id)
        })
    }

    /// Raw cells in storage order.
    pub fn cells(&self) -> &[VoxelId] {
        &self.cells
    }

    /// Largest id stored in the grid, `0` for an empty or all-air grid.
    pub fn max_id(&self) -> VoxelId {
        self.cells.iter().copied().max().unwrap_or(EMPTY_VOXEL)
    }

    pub(crate) fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        let [_, height, depth] = self.dimensions;
        (x * height + y) * depth + z
    }
}
