//! # Materials
//!
//! A [`MaterialDescriptor`] resolved into something the compositor can bind:
//! either the `Empty` sentinel or a fully loaded cube texture.

use std::sync::Arc;

use crate::{
    assets::{CubeTexture, ImageSource},
    error::AssetError,
};

use super::description::{MaterialDescriptor, MaterialKind};

/// A resolved material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Material {
    /// Never rendered and carries no texture.
    Empty {
        /// Display name.
        name: String,
    },
    /// Rendered with `texture`.
    Textured {
        /// Display name.
        name: String,
        /// The `type` string from the description.
        type_name: String,
        /// Six loaded faces. Shared with the composite mesh.
        texture: Arc<CubeTexture>,
    },
}

impl Material {
    /// Resolves `descriptor`, loading its cube texture through `source`.
    ///
    /// `Empty` materials resolve without touching `source`.
    ///
    /// # Errors
    /// Any texture failure, wrapped in [`AssetError::Material`] with the material's name.
    pub async fn resolve(
        descriptor: &MaterialDescriptor,
        source: &dyn ImageSource,
    ) -> Result<Self, AssetError> {
        match &descriptor.kind {
            MaterialKind::Empty => Ok(Material::Empty {
                name: descriptor.name.clone(),
            }),
            MaterialKind::Textured { type_name, texture } => {
                let texture = CubeTexture::assemble(texture, source)
                    .await
                    .map_err(|source| AssetError::Material {
                        name: descriptor.name.clone(),
                        source: Box::new(source),
                    })?;
                log::debug!(
                    "Resolved material {} ({type_name}, {}x{} faces)",
                    descriptor.name,
                    texture.dimensions().0,
                    texture.dimensions().1
                );
                Ok(Material::Textured {
                    name: descriptor.name.clone(),
                    type_name: type_name.clone(),
                    texture: Arc::new(texture),
                })
            }
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Material::Empty { name } | Material::Textured { name, .. } => name,
        }
    }

    /// The cube texture, or `None` for `Empty`.
    pub fn texture(&self) -> Option<&Arc<CubeTexture>> {
        match self {
            Material::Empty { .. } => None,
            Material::Textured { texture, .. } => Some(texture),
        }
    }

    /// Whether this material is skipped during composition.
    pub fn is_empty(&self) -> bool {
        matches!(self, Material::Empty { .. })
    }
}
