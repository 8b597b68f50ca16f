//! # Level Loading
//!
//! From a level location to a ready-to-render [`Level`]:
//!
//! 1. fetch and parse the description
//! 2. resolve every material concurrently
//! 3. build the voxel grid
//! 4. composite the per-material meshes
//!
//! Each step finishes before the next starts, and the first failure ends the
//! load. There is no partially loaded level.
//!
//! ## Cancellation
//!
//! [`LevelAssembler::load_level`] returns a plain future. Dropping it at any
//! await point (fetch or image decode) abandons the load. Compositing runs
//! without awaiting and always finishes once started.

use std::sync::Arc;

use futures::future::try_join_all;
use web_time::Instant;

use crate::{
    assets::{FsImageSource, FsLevelFetcher, ImageSource, LevelFetcher},
    config::LoaderConfig,
    error::LevelLoadError,
    rendering::{
        meshing::{surface_builder, SurfaceBuilder},
        scene::SceneSink,
    },
    voxels::VoxelGrid,
};

pub mod compositor;
pub mod description;
pub mod material;

pub use compositor::{composite, CompositeEntry, CompositeMesh};
pub use description::{LevelDescription, MaterialDescriptor, MaterialKind};
pub use material::Material;

/// Reserved slot for objects placed in a level. Levels load without any,
/// and nothing outside this crate can construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Entity {}

/// Reserved slot for per-frame level behaviour. Levels load without any,
/// and nothing outside this crate can construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Update {}

/// A loaded level.
#[derive(Debug)]
pub struct Level {
    grid: Arc<VoxelGrid>,
    materials: Vec<Material>,
    map: CompositeMesh,
    entities: Vec<Entity>,
    updates: Vec<Update>,
}

impl Level {
    /// The voxel ids the level was built from.
    pub fn grid(&self) -> &Arc<VoxelGrid> {
        &self.grid
    }

    /// Resolved materials in id order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Per-material meshes of the whole level.
    pub fn map(&self) -> &CompositeMesh {
        &self.map
    }

    /// Entities placed in the level. Always empty.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Update hooks attached to the level. Always empty.
    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    /// Hands the level's geometry to `sink` in one call.
    pub fn add_to_scene<S: SceneSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.add_composite(&self.map)
    }
}

/// Loads levels through injected collaborators.
pub struct LevelAssembler {
    fetcher: Box<dyn LevelFetcher>,
    images: Box<dyn ImageSource>,
    builder: Box<dyn SurfaceBuilder>,
    config: LoaderConfig,
}

impl LevelAssembler {
    /// Creates an assembler whose mesher is picked by `config`.
    ///
    /// # Arguments
    /// * `fetcher` - Fetches level description text
    /// * `images` - Decodes texture images
    /// * `config` - Meshing options
    pub fn new(
        fetcher: Box<dyn LevelFetcher>,
        images: Box<dyn ImageSource>,
        config: LoaderConfig,
    ) -> Self {
        Self {
            fetcher,
            images,
            builder: surface_builder(&config),
            config,
        }
    }

    /// Creates an assembler reading everything from `config.asset_root` on disk.
    pub fn from_config(config: LoaderConfig) -> Self {
        Self::new(
            Box::new(FsLevelFetcher::from_config(&config)),
            Box::new(FsImageSource::from_config(&config)),
            config,
        )
    }

    /// Replaces the mesher picked from the config.
    pub fn with_surface_builder(mut self, builder: Box<dyn SurfaceBuilder>) -> Self {
        self.builder = builder;
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the level at `location`.
    ///
    /// # Returns
    /// A level whose material `i` corresponds to voxel value `i + 1`, even if
    /// the materials' textures finished loading out of order.
    ///
    /// # Errors
    /// The first fetch, parse, asset or geometry failure, as a [`LevelLoadError`].
    pub async fn load_level(&self, location: &str) -> Result<Level, LevelLoadError> {
        let start = Instant::now();
        log::info!("Loading level {location}");

        let text = self
            .fetcher
            .fetch(location)
            .await
            .map_err(|source| LevelLoadError::Fetch {
                location: location.to_string(),
                source,
            })?;
        let description = LevelDescription::from_json(&text)?;
        log::debug!(
            "Parsed {location}: {} materials",
            description.materials.len()
        );

        let images = self.images.as_ref();
        let materials = try_join_all(
            description
                .materials
                .iter()
                .map(|descriptor| Material::resolve(descriptor, images)),
        )
        .await?;

        let grid = Arc::new(VoxelGrid::from_nested(description.voxels)?);
        let map = composite(
            &grid,
            &materials,
            self.builder.as_ref(),
            self.config.parallel_meshing,
        )?;

        log::info!(
            "Loaded level {location} ({:?} voxels, {} meshes) in {:?}",
            grid.dimensions(),
            map.len(),
            start.elapsed()
        );

        Ok(Level {
            grid,
            materials,
            map,
            entities: Vec::new(),
            updates: Vec::new(),
        })
    }
}
