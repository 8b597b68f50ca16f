//! # Assets
//!
//! Everything that turns paths into pixels:
//!
//! * [`ImageSource`]: the async decode primitive, injected by the caller
//! * [`ImageAsset`]: one decoded image, remembered with the path it came from
//! * [`CubeTexture`]: six face images loaded concurrently
//! * [`Tileset`]: an atlas image cut into fixed-size tiles
//!
//! The filesystem implementations [`FsImageSource`] and [`FsLevelFetcher`]
//! resolve paths against [`LoaderConfig::asset_root`].

use std::{io, path::PathBuf};

use futures::future::BoxFuture;
use image::DynamicImage;

use crate::{config::LoaderConfig, error::ImageError};

pub mod cube_texture;
pub mod image_asset;
pub mod tileset;

pub use cube_texture::{CubeTexture, TextureDescriptor};
pub use image_asset::ImageAsset;
pub use tileset::{TileRect, Tileset};

/// Decodes the image behind a path. Suspends on I/O; never blocks the caller's executor
/// longer than the implementation's own read.
pub trait ImageSource: Send + Sync {
    /// Fetches and decodes `path`.
    fn decode<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<DynamicImage, ImageError>>;
}

/// Fetches the text of a level description.
pub trait LevelFetcher: Send + Sync {
    /// Fetches the document at `location`.
    fn fetch<'a>(&'a self, location: &'a str) -> BoxFuture<'a, io::Result<String>>;
}

/// Decodes raw image bytes, attributing failures to `path`.
pub fn decode_bytes(path: &str, bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes).map_err(|source| ImageError::Decode {
        path: path.to_string(),
        source,
    })
}

/// Reads images from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsImageSource {
    root: PathBuf,
}

impl FsImageSource {
    /// Resolves paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves paths against the configured asset root.
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.asset_root.clone())
    }
}

impl ImageSource for FsImageSource {
    fn decode<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<DynamicImage, ImageError>> {
        Box::pin(async move {
            let bytes = std::fs::read(self.root.join(path)).map_err(|source| ImageError::Io {
                path: path.to_string(),
                source,
            })?;
            decode_bytes(path, &bytes)
        })
    }
}

/// Reads level descriptions from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsLevelFetcher {
    root: PathBuf,
}

impl FsLevelFetcher {
    /// Resolves locations against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves locations against the configured asset root.
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.asset_root.clone())
    }
}

impl LevelFetcher for FsLevelFetcher {
    fn fetch<'a>(&'a self, location: &'a str) -> BoxFuture<'a, io::Result<String>> {
        Box::pin(async move { std::fs::read_to_string(self.root.join(location)) })
    }
}
