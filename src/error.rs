//! # Error Types
//!
//! Every failure the level pipeline can produce. All of them are fail-fast: nothing
//! in the crate retries, substitutes placeholder assets, or logs-and-continues.
//! The assembler folds everything into a single [`LevelLoadError`].

use std::io;

use thiserror::Error;

use crate::voxels::block_side::BlockSide;

/// A single image path could not be turned into pixels.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The bytes behind `path` could not be read.
    #[error("failed to read image `{path}`: {source}")]
    Io {
        /// Path as written in the level description.
        path: String,
        /// Underlying transport failure.
        #[source]
        source: io::Error,
    },

    /// The bytes were read but are not a valid image.
    #[error("failed to decode image `{path}`: {source}")]
    Decode {
        /// Path as written in the level description.
        path: String,
        /// Underlying decoder failure.
        #[source]
        source: image::ImageError,
    },
}

/// The level description is not usable.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed level description: {0}")]
    Json(#[from] serde_json::Error),

    /// A material that is not `Empty` came without a `texture` object.
    #[error("material `{name}` of type `{kind}` has no texture")]
    MissingTexture {
        /// Material display name.
        name: String,
        /// The `type` string found in the description.
        kind: String,
    },
}

/// A material or one of its textures failed to load.
#[derive(Error, Debug)]
pub enum AssetError {
    /// One of the face images failed.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The six faces of a cube texture do not share one size.
    #[error("cube face {side:?} is {found:?}, expected {expected:?}")]
    FaceSizeMismatch {
        /// The offending face.
        side: BlockSide,
        /// Size of the `left` face, which the others must match.
        expected: (u32, u32),
        /// Size of the offending face.
        found: (u32, u32),
    },

    /// Wraps any of the above with the name of the material being resolved.
    #[error("material `{name}` failed to load: {source}")]
    Material {
        /// Material display name.
        name: String,
        /// What went wrong.
        #[source]
        source: Box<AssetError>,
    },
}

/// The voxel data cannot be meshed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A nested voxel array is not a box.
    #[error("ragged voxel array: row {path:?} has length {found}, expected {expected}")]
    Ragged {
        /// Indices leading to the offending row (`[x]` or `[x, y]`).
        path: Vec<usize>,
        /// Length every row at this depth must have.
        expected: usize,
        /// Length actually found.
        found: usize,
    },

    /// A voxel references a material index that does not exist.
    #[error("voxel ({x}, {y}, {z}) has id {id} but only {materials} materials exist")]
    UnknownMaterial {
        /// Voxel x coordinate.
        x: usize,
        /// Voxel y coordinate.
        y: usize,
        /// Voxel z coordinate.
        z: usize,
        /// The stored voxel id.
        id: u32,
        /// Number of materials in the level.
        materials: usize,
    },
}

/// A tileset was built with bad dimensions or asked for a tile it does not have.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TilesetError {
    /// Tile width or height is zero.
    #[error("tile size must be non-zero, got {tile_width}x{tile_height}")]
    ZeroTileSize {
        /// Requested tile width.
        tile_width: u32,
        /// Requested tile height.
        tile_height: u32,
    },

    /// The atlas width is not a whole number of tiles.
    #[error("atlas width {width} is not a multiple of tile width {tile_width}")]
    UnevenWidth {
        /// Atlas width in pixels.
        width: u32,
        /// Requested tile width.
        tile_width: u32,
    },

    /// The tile id lies past the last row of the atlas.
    #[error("tile {id} out of range, atlas holds {count} tiles")]
    OutOfRange {
        /// Requested tile id.
        id: u32,
        /// Number of tiles in the atlas.
        count: u64,
    },
}

/// The loader configuration could not be read.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid JSON for [`crate::config::LoaderConfig`].
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loading a level failed. Carries the first underlying failure; no level is produced.
#[derive(Error, Debug)]
pub enum LevelLoadError {
    /// The level description could not be fetched.
    #[error("failed to fetch level `{location}`: {source}")]
    Fetch {
        /// Where the description was requested from.
        location: String,
        /// Underlying transport failure.
        #[source]
        source: io::Error,
    },

    /// The description was fetched but is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A material failed to resolve.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The voxel data is malformed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
