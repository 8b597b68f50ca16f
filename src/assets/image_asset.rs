//! A single decoded image and the path it was loaded from.

use image::{DynamicImage, RgbaImage};

use crate::error::ImageError;

use super::ImageSource;

/// A decoded RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    path: String,
    image: RgbaImage,
}

impl ImageAsset {
    /// Wraps an already decoded image.
    pub fn new(path: impl Into<String>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image: image.into_rgba8(),
        }
    }

    /// Decodes `path` through `source`.
    pub async fn load(source: &dyn ImageSource, path: &str) -> Result<Self, ImageError> {
        let image = source.decode(path).await?;
        log::debug!("Decoded {path} ({}x{})", image.width(), image.height());
        Ok(Self::new(path, image))
    }

    /// Path the image was requested with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Takes the pixels.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
