//! # Loader Configuration
//!
//! Settings that change how levels are loaded and meshed. Everything has a
//! default, so an empty JSON object is a valid config.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Default directory the filesystem collaborators resolve paths against.
pub const DEFAULT_ASSET_ROOT: &str = "assets";

/// Configuration for [`crate::level::LevelAssembler`] and the filesystem sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory that level and image paths are relative to.
    pub asset_root: PathBuf,
    /// Merge coplanar faces into larger quads. When off, one quad per visible face.
    pub greedy_meshing: bool,
    /// Mesh materials on the rayon thread pool instead of one after another.
    pub parallel_meshing: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            greedy_meshing: true,
            parallel_meshing: true,
        }
    }
}

impl LoaderConfig {
    /// Parses a config from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
