//! # Level Description
//!
//! The JSON document a level is loaded from:
//!
//! ```json
//! {
//!   "materials": [
//!     { "name": "air", "type": "Empty" },
//!     { "name": "stone", "type": "Solid",
//!       "texture": { "left": "stone.png", "right": "stone.png", "front": "stone.png",
//!                    "back": "stone.png", "top": "stone_top.png", "bottom": "stone.png" } }
//!   ],
//!   "voxels": [[[0, 2], [1, 2]], [[2, 2], [0, 0]]]
//! }
//! ```
//!
//! The `type` string is read once here and turned into [`MaterialKind`].
//! Nothing downstream compares type strings.

use serde::Deserialize;

use crate::{assets::TextureDescriptor, error::ParseError, voxels::VoxelId};

/// `type` value marking a material that is never rendered.
pub const EMPTY_MATERIAL_TYPE: &str = "Empty";

#[derive(Deserialize)]
struct RawMaterial {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    texture: Option<TextureDescriptor>,
}

#[derive(Deserialize)]
struct RawLevel {
    materials: Vec<RawMaterial>,
    voxels: Vec<Vec<Vec<VoxelId>>>,
}

/// What a material is, decided at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialKind {
    /// Occupies ids but never produces geometry.
    Empty,
    /// Rendered with a cube texture.
    Textured {
        /// The `type` string from the description, kept for diagnostics.
        type_name: String,
        /// Face image paths.
        texture: TextureDescriptor,
    },
}

/// One entry of the `materials` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialDescriptor {
    /// Display name.
    pub name: String,
    /// Empty or textured.
    pub kind: MaterialKind,
}

impl MaterialDescriptor {
    /// Whether this material is skipped during composition.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, MaterialKind::Empty)
    }
}

/// A parsed level description. Material `i` is referenced by voxel value `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDescription {
    /// Materials in id order.
    pub materials: Vec<MaterialDescriptor>,
    /// Voxel ids indexed `[x][y][z]`. Not yet checked for raggedness.
    pub voxels: Vec<Vec<Vec<VoxelId>>>,
}

impl LevelDescription {
    /// Parses a level description from JSON text.
    ///
    /// # Errors
    /// [`ParseError::Json`] for malformed JSON or missing keys, and
    /// [`ParseError::MissingTexture`] for a non-`Empty` material without a texture.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        let raw: RawLevel = serde_json::from_str(text)?;

        let materials = raw
            .materials
            .into_iter()
            .map(|material| {
                let kind = if material.kind == EMPTY_MATERIAL_TYPE {
                    MaterialKind::Empty
                } else if let Some(texture) = material.texture {
                    MaterialKind::Textured {
                        type_name: material.kind,
                        texture,
                    }
                } else {
                    return Err(ParseError::MissingTexture {
                        name: material.name,
                        kind: material.kind,
                    });
                };
                Ok(MaterialDescriptor {
                    name: material.name,
                    kind,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            materials,
            voxels: raw.voxels,
        })
    }
}
