use crate::voxels::block_side::BlockSide;

/// A rectangular quad lying on one face plane of the grid.
///
/// A face starts out covering a single voxel side and grows through
/// [`merge_right`](Self::merge_right) (along `u`) and [`merge_up`](Self::merge_up)
/// (along `v`). The `u`/`v` axes are the face's [`BlockSide::plane_axes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    /// Which side of the voxels this face covers
    pub block_side: BlockSide,
    /// Cell coordinate along the face normal
    pub layer: usize,
    /// Lowest covered cell along the `u` axis
    pub u: usize,
    /// Lowest covered cell along the `v` axis
    pub v: usize,
    /// Number of cells covered along `u`
    pub width: usize,
    /// Number of cells covered along `v`
    pub height: usize,
}

impl Face {
    /// Creates the unit face on `block_side` of the cell at `position`.
    pub fn new(position: [usize; 3], block_side: BlockSide) -> Self {
        let (u_axis, v_axis) = block_side.plane_axes();
        Face {
            block_side,
            layer: position[block_side.axis()],
            u: position[u_axis],
            v: position[v_axis],
            width: 1,
            height: 1,
        }
    }

    /// Attempts to merge this face with another face that is directly above it (along `v`).
    ///
    /// # Returns
    /// `Some(merged_face)` if both faces lie on the same plane, span exactly the same
    /// `u` range and touch, or `None` if they cannot be merged.
    pub fn merge_up(&self, other: &Face) -> Option<Face> {
        if self.block_side == other.block_side
            && self.layer == other.layer
            && self.u == other.u
            && self.width == other.width
            && self.v + self.height == other.v
        {
            return Some(Face {
                height: self.height + other.height,
                ..*self
            });
        }

        None
    }

    /// Attempts to merge this face with another face that is directly to its right (along `u`).
    ///
    /// # Returns
    /// `Some(merged_face)` if both faces lie on the same plane, span exactly the same
    /// `v` range and touch, or `None` if they cannot be merged.
    pub fn merge_right(&self, other: &Face) -> Option<Face> {
        if self.block_side == other.block_side
            && self.layer == other.layer
            && self.v == other.v
            && self.height == other.height
            && self.u + self.width == other.u
        {
            return Some(Face {
                width: self.width + other.width,
                ..*self
            });
        }

        None
    }

    /// Number of unit voxel faces covered.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Grid position of the quad's corners, ordered
    /// `(u0, v0)`, `(u1, v0)`, `(u1, v1)`, `(u0, v1)`.
    pub fn corners(&self) -> [[f32; 3]; 4] {
        let axis = self.block_side.axis();
        let (u_axis, v_axis) = self.block_side.plane_axes();
        let plane = self.layer + usize::from(self.block_side.is_positive());

        let corner = |u: usize, v: usize| {
            let mut position = [0.0; 3];
            position[axis] = plane as f32;
            position[u_axis] = u as f32;
            position[v_axis] = v as f32;
            position
        };

        let (u0, v0) = (self.u, self.v);
        let (u1, v1) = (self.u + self.width, self.v + self.height);
        [corner(u0, v0), corner(u1, v0), corner(u1, v1), corner(u0, v1)]
    }

    /// Cells whose `block_side` face this quad covers.
    pub fn cells(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        let axis = self.block_side.axis();
        let (u_axis, v_axis) = self.block_side.plane_axes();
        (self.v..self.v + self.height).flat_map(move |v| {
            (self.u..self.u + self.width).map(move |u| {
                let mut position = [0; 3];
                position[axis] = self.layer;
                position[u_axis] = u;
                position[v_axis] = v;
                position
            })
        })
    }
}
