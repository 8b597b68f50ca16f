//! # Scene Upload
//!
//! The hand-off point between a loaded level and whatever draws it. A
//! [`SceneSink`] receives the whole [`CompositeMesh`] in one call.
//!
//! [`GpuScene`] is the `wgpu` implementation: one vertex buffer, one index
//! buffer and one cube texture per material. Drawing, pipelines and the
//! frame loop stay with the caller.

use std::convert::Infallible;

use wgpu::util::DeviceExt;

use crate::level::CompositeMesh;

use super::texture::GpuTexture;

/// Receives a level's geometry for rendering.
pub trait SceneSink {
    /// Failure reported by the sink.
    type Error;

    /// Adds every entry of `composite` to the scene.
    fn add_composite(&mut self, composite: &CompositeMesh) -> Result<(), Self::Error>;
}

/// GPU resources of one material's mesh.
pub struct GpuMaterialMesh {
    /// Index of the material in the level.
    pub material_index: usize,
    /// Display name of the material.
    pub name: String,
    /// [`crate::rendering::Vertex`] data.
    pub vertex_buffer: wgpu::Buffer,
    /// `u32` triangle indices.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices in `index_buffer`.
    pub index_count: u32,
    /// Cube texture the mesh samples from.
    pub texture: GpuTexture,
}

/// Uploads composite meshes to the GPU.
pub struct GpuScene<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    nodes: Vec<GpuMaterialMesh>,
}

impl<'a> GpuScene<'a> {
    /// Creates an empty scene that uploads through `device` and `queue`.
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            nodes: Vec::new(),
        }
    }

    /// Uploaded meshes, in the order they were added.
    pub fn nodes(&self) -> &[GpuMaterialMesh] {
        &self.nodes
    }

    /// Bytes held in vertex and index buffers.
    pub fn buffer_memory(&self) -> u64 {
        self.nodes
            .iter()
            .map(|node| node.vertex_buffer.size() + node.index_buffer.size())
            .sum()
    }
}

impl SceneSink for GpuScene<'_> {
    type Error = Infallible;

    fn add_composite(&mut self, composite: &CompositeMesh) -> Result<(), Self::Error> {
        for entry in composite.iter() {
            let vertex_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} vertex buffer", entry.name)),
                    contents: bytemuck::cast_slice(entry.mesh.vertices()),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let index_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} index buffer", entry.name)),
                    contents: bytemuck::cast_slice(entry.mesh.indices()),
                    usage: wgpu::BufferUsages::INDEX,
                });
            let texture = GpuTexture::from_cube(
                self.device,
                self.queue,
                &entry.texture,
                &format!("{} texture", entry.name),
            );

            self.nodes.push(GpuMaterialMesh {
                material_index: entry.material_index,
                name: entry.name.clone(),
                vertex_buffer,
                index_buffer,
                index_count: entry.mesh.indices().len() as u32,
                texture,
            });
        }

        log::info!(
            "Uploaded {} material meshes ({} bytes of geometry)",
            composite.len(),
            self.buffer_memory()
        );
        Ok(())
    }
}
