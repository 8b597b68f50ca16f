//! GPU textures for level materials.
//!
//! Cube textures are uploaded as a six-layer 2D texture. Layers follow the GPU
//! cube-map order (+X, -X, +Y, -Y, +Z, -Z), which differs from the slot order a
//! [`CubeTexture`] stores its faces in. Mesh vertices carry the layer of their
//! face as `texture_index`, so the `D2Array` view can be sampled with the
//! vertex UVs and layer directly. The `Cube` view serves direction lookups.

use image::RgbaImage;
use wgpu::util::DeviceExt;

use crate::{
    assets::{CubeTexture, Tileset},
    error::TilesetError,
    voxels::{BlockSide, FACE_COUNT},
};

/// A GPU texture with its view and sampler.
pub struct GpuTexture {
    /// The underlying WebGPU texture resource.
    pub texture: wgpu::Texture,
    /// View used for binding; `Cube` for cube textures, `D2` otherwise.
    pub view: wgpu::TextureView,
    /// `D2Array` view over every layer, indexed by [`crate::rendering::Vertex::texture_index`].
    pub layers_view: wgpu::TextureView,
    /// Nearest-neighbour sampler that repeats, so merged quads tile their texture.
    pub sampler: wgpu::Sampler,
}

impl GpuTexture {
    /// The colour format every material texture is uploaded in.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Uploads the six faces of `cube`.
    ///
    /// # Arguments
    /// * `device` - The WebGPU device
    /// * `queue` - Queue the pixel data is written through
    /// * `cube` - Faces to upload
    /// * `label` - Debug label for the texture
    pub fn from_cube(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        cube: &CubeTexture,
        label: &str,
    ) -> Self {
        let (width, height) = cube.dimensions();
        let texture = device.create_texture_with_data(
            queue,
            &Self::descriptor(label, width, height, FACE_COUNT as u32),
            wgpu::util::TextureDataOrder::LayerMajor,
            &cube_layer_bytes(cube),
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(label),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            ..Default::default()
        });
        let layers_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some(label),
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });

        Self {
            view,
            layers_view,
            sampler: Self::sampler(device),
            texture,
        }
    }

    /// Uploads a single 2D image.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        label: &str,
    ) -> Self {
        let texture = device.create_texture_with_data(
            queue,
            &Self::descriptor(label, image.width(), image.height(), 1),
            wgpu::util::TextureDataOrder::LayerMajor,
            image.as_raw(),
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let layers_view = texture.create_view(&wgpu::TextureViewDescriptor {
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });

        Self {
            view,
            layers_view,
            sampler: Self::sampler(device),
            texture,
        }
    }

    /// Uploads tile `id` of `tileset` as its own 2D texture.
    ///
    /// # Errors
    /// [`TilesetError::OutOfRange`] if the tileset has no tile `id`.
    pub fn from_tile(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        tileset: &Tileset,
        id: u32,
        label: &str,
    ) -> Result<Self, TilesetError> {
        let tile = tileset.tile(id)?.to_image();
        Ok(Self::from_image(device, queue, &tile, label))
    }

    fn descriptor(label: &str, width: u32, height: u32, layers: u32) -> wgpu::TextureDescriptor<'_> {
        wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: layers,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        }
    }

    fn sampler(device: &wgpu::Device) -> wgpu::Sampler {
        device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        })
    }
}

/// RGBA bytes of all six faces, concatenated in cube-map layer order.
pub fn cube_layer_bytes(cube: &CubeTexture) -> Vec<u8> {
    let mut sides = BlockSide::all();
    sides.sort_by_key(|side| side.cube_map_layer());

    sides
        .iter()
        .flat_map(|side| cube.face(*side).image().as_raw().iter().copied())
        .collect()
}
