//! # Block Side Module
//!
//! This module defines the six faces of a voxel and the axis arithmetic the
//! mesher needs to walk across them.

use cgmath::Vector3;

/// Number of faces on a voxel, and of images in a cube texture.
pub const FACE_COUNT: usize = 6;

/// Represents the six possible faces of a voxel block.
///
/// The discriminants are the slot order of a cube texture description:
/// `left, right, front, back, top, bottom`. `side as usize` indexes the
/// face images of a [`crate::assets::CubeTexture`].
///
/// Grid axes are `x` (left to right), `y` (bottom to top) and `z` (back to front).
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (facing negative X)
    LEFT = 0,

    /// The right face (facing positive X)
    RIGHT = 1,

    /// The front face (facing positive Z)
    FRONT = 2,

    /// The back face (facing negative Z)
    BACK = 3,

    /// The top face (facing positive Y)
    TOP = 4,

    /// The bottom face (facing negative Y)
    BOTTOM = 5,
}

impl BlockSide {
    /// Returns all six block faces in cube texture slot order.
    pub fn all() -> [BlockSide; FACE_COUNT] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::TOP,
            BlockSide::BOTTOM,
        ]
    }

    /// Index of this face in a cube texture's six slots.
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The grid axis this face is perpendicular to (0 = x, 1 = y, 2 = z).
    pub fn axis(self) -> usize {
        match self {
            BlockSide::LEFT | BlockSide::RIGHT => 0,
            BlockSide::TOP | BlockSide::BOTTOM => 1,
            BlockSide::FRONT | BlockSide::BACK => 2,
        }
    }

    /// Whether the outward normal points along the positive axis.
    pub fn is_positive(self) -> bool {
        matches!(self, BlockSide::RIGHT | BlockSide::TOP | BlockSide::FRONT)
    }

    /// The two in-plane axes `(u, v)` used to lay out quads on this face.
    ///
    /// `v` is the vertical axis of the face image wherever the face is upright
    /// (`y` for the four walls).
    pub fn plane_axes(self) -> (usize, usize) {
        match self.axis() {
            0 => (2, 1),
            1 => (0, 2),
            _ => (0, 1),
        }
    }

    /// Offset from a cell to its neighbour across this face.
    pub fn offset(self) -> [isize; 3] {
        let mut offset = [0; 3];
        offset[self.axis()] = if self.is_positive() { 1 } else { -1 };
        offset
    }

    /// Unit outward normal.
    pub fn normal(self) -> Vector3<f32> {
        let [x, y, z] = self.offset();
        Vector3::new(x as f32, y as f32, z as f32)
    }

    /// Whether the corner order `(u0,v0) (u1,v0) (u1,v1) (u0,v1)` winds clockwise
    /// seen from outside, so triangle indices must be reversed.
    ///
    /// The plane axes' cross product `u x v` points along `-x`, `-y` and `+z`
    /// respectively, so the positive x/y faces and the negative z face flip.
    pub fn flips_winding(self) -> bool {
        matches!(self, BlockSide::RIGHT | BlockSide::TOP | BlockSide::BACK)
    }

    /// Whether the `u` axis runs right-to-left when the face is seen from outside,
    /// so the face image must be mirrored along `u` to read the right way round.
    ///
    /// Only the +X and -Z walls; the top and bottom faces have no upright direction.
    pub fn mirrors_u(self) -> bool {
        matches!(self, BlockSide::RIGHT | BlockSide::BACK)
    }

    /// Array layer of this face in a GPU cube map (+X, -X, +Y, -Y, +Z, -Z).
    pub fn cube_map_layer(self) -> usize {
        match self {
            BlockSide::RIGHT => 0,
            BlockSide::LEFT => 1,
            BlockSide::TOP => 2,
            BlockSide::BOTTOM => 3,
            BlockSide::FRONT => 4,
            BlockSide::BACK => 5,
        }
    }
}
