#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Level
//!
//! Loads voxel levels into per-material, greedily merged triangle meshes and
//! the cube textures they are drawn with.
//!
//! ## Key Modules
//!
//! * `voxels` - The voxel grid, per-material occupancy masks and block sides
//! * `rendering` - Vertex layout, meshing and the GPU upload of a finished level
//! * `assets` - Image sources, cube textures and tilesets
//! * `level` - Description parsing, material resolution, compositing and loading
//!
//! ## Architecture
//!
//! Loading is asynchronous only where it waits on I/O: fetching the level
//! description and decoding images. Meshing is synchronous and, per material,
//! runs on the rayon thread pool. All collaborators (level fetcher, image
//! source, mesher, scene) are passed in explicitly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use voxel_level::{config::LoaderConfig, level::LevelAssembler};
//!
//! voxel_level::init_logger();
//!
//! let assembler = LevelAssembler::from_config(LoaderConfig::default());
//! let level = pollster::block_on(assembler.load_level("level.json"))?;
//! println!("{} material meshes", level.map().len());
//! # Ok::<(), voxel_level::error::LevelLoadError>(())
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod level;
pub mod rendering;
pub mod voxels;

pub use config::LoaderConfig;
pub use error::LevelLoadError;
pub use level::{Level, LevelAssembler};

/// Installs the stdout logger, filtered by `RUST_LOG`.
///
/// Calling it again, or after another logger was installed, does nothing.
pub fn init_logger() {
    let mut log_builder = env_logger::Builder::new();
    let initialized = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init()
        .is_ok();

    if initialized {
        log::info!("Logger initialized");
    }
}
