//! Mesh data structures and operations for voxel rendering.
//!
//! This module turns merged [`Face`]s into the vertex and index arrays handed to
//! the renderer.

use cgmath::{InnerSpace, Vector3};

use super::face::Face;
use crate::{rendering::vertex::Vertex, voxels::block_side::BlockSide};

/// Triangle mesh of one material's voxel surface.
///
/// Four vertices and two triangles per quad; every triangle winds
/// counter-clockwise seen from outside the solid. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceMesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl SurfaceMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mesh for a list of quads, in order.
    pub fn from_faces(faces: &[Face]) -> Self {
        let mut vertices = Vec::with_capacity(faces.len() * 4);
        let mut indices = Vec::with_capacity(faces.len() * 6);

        for face in faces {
            let base = vertices.len() as u32;
            vertices.extend(Self::generate_face_vertices(face));
            indices.extend(Self::generate_face_indices(face, base));
        }

        Self { vertices, indices }
    }

    /// Generates the four corner vertices of a face.
    ///
    /// UVs span `0..width` and `0..height` so a repeating sampler tiles the face
    /// image once per voxel; `v = 0` is the upper edge of the quad. On sides that
    /// [mirror `u`](BlockSide::mirrors_u) the `u` coordinates are reversed.
    /// `texture_index` is the face's layer in the uploaded cube texture.
    pub fn generate_face_vertices(face: &Face) -> [Vertex; 4] {
        let normal: [f32; 3] = face.block_side.normal().into();
        let texture_index = face.block_side.cube_map_layer() as u32;
        let (width, height) = (face.width as f32, face.height as f32);
        let (u0, u1) = if face.block_side.mirrors_u() {
            (width, 0.0)
        } else {
            (0.0, width)
        };
        let tex_coords = [[u0, height], [u1, height], [u1, 0.0], [u0, 0.0]];

        let corners = face.corners();
        std::array::from_fn(|i| Vertex {
            position: corners[i],
            normal,
            tex_coords: tex_coords[i],
            texture_index,
        })
    }

    /// Generates the six indices of a face's two triangles, offset by `base`.
    pub fn generate_face_indices(face: &Face, base: u32) -> [u32; 6] {
        if face.block_side.flips_winding() {
            [base, base + 2, base + 1, base, base + 3, base + 2]
        } else {
            [base, base + 1, base + 2, base, base + 2, base + 3]
        }
    }

    /// All vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle list indices into [`vertices`](Self::vertices).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Corner positions of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize].position,
                self.vertices[tri[1] as usize].position,
                self.vertices[tri[2] as usize].position,
            ]
        })
    }

    /// Total area covered by the triangles, in voxel faces.
    pub fn surface_area(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (Vector3::from(a), Vector3::from(b), Vector3::from(c));
                (b - a).cross(c - a).magnitude() * 0.5
            })
            .sum()
    }
}
