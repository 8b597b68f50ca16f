//! # Cube Textures
//!
//! A cube texture is six face images, one per [`BlockSide`], loaded together.
//! Either all six decode or the texture does not exist; a partially loaded
//! texture is never handed out.

use serde::Deserialize;

use crate::{
    error::AssetError,
    voxels::block_side::{BlockSide, FACE_COUNT},
};

use super::{image_asset::ImageAsset, ImageSource};

/// The six face image paths of a textured material, as written in a level description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextureDescriptor {
    /// Image for the face looking along -X
    pub left: String,
    /// Image for the face looking along +X
    pub right: String,
    /// Image for the face looking along +Z
    pub front: String,
    /// Image for the face looking along -Z
    pub back: String,
    /// Image for the face looking along +Y
    pub top: String,
    /// Image for the face looking along -Y
    pub bottom: String,
}

impl TextureDescriptor {
    /// Path of the image for `side`.
    pub fn path(&self, side: BlockSide) -> &str {
        match side {
            BlockSide::LEFT => &self.left,
            BlockSide::RIGHT => &self.right,
            BlockSide::FRONT => &self.front,
            BlockSide::BACK => &self.back,
            BlockSide::TOP => &self.top,
            BlockSide::BOTTOM => &self.bottom,
        }
    }
}

/// Six decoded face images of equal size, in slot order `left, right, front, back, top, bottom`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeTexture {
    faces: [ImageAsset; FACE_COUNT],
}

impl CubeTexture {
    /// Loads all six faces of `descriptor` concurrently.
    ///
    /// The six decodes are polled together and the call resolves once all of
    /// them have finished. Each image lands in its own face's slot no matter
    /// which decode finishes first.
    ///
    /// # Errors
    /// The first failing decode, or [`AssetError::FaceSizeMismatch`].
    pub async fn assemble(
        descriptor: &TextureDescriptor,
        source: &dyn ImageSource,
    ) -> Result<Self, AssetError> {
        let [left, right, front, back, top, bottom] =
            BlockSide::all().map(|side| ImageAsset::load(source, descriptor.path(side)));

        let (left, right, front, back, top, bottom) =
            futures::try_join!(left, right, front, back, top, bottom)?;

        Self::from_faces([left, right, front, back, top, bottom])
    }

    /// Wraps six images given in slot order.
    ///
    /// # Errors
    /// [`AssetError::FaceSizeMismatch`] if any face differs in size from `left`.
    pub fn from_faces(faces: [ImageAsset; FACE_COUNT]) -> Result<Self, AssetError> {
        let expected = faces[BlockSide::LEFT.slot()].dimensions();
        for side in BlockSide::all() {
            let found = faces[side.slot()].dimensions();
            if found != expected {
                return Err(AssetError::FaceSizeMismatch {
                    side,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { faces })
    }

    /// Image for `side`.
    pub fn face(&self, side: BlockSide) -> &ImageAsset {
        &self.faces[side.slot()]
    }

    /// All faces in slot order.
    pub fn faces(&self) -> &[ImageAsset; FACE_COUNT] {
        &self.faces
    }

    /// `(width, height)` shared by all faces.
    pub fn dimensions(&self) -> (u32, u32) {
        self.faces[0].dimensions()
    }
}
