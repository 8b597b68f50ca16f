//! # Material Compositor
//!
//! Splits the voxel grid by material, meshes each textured material on its
//! own, and gathers the results into one [`CompositeMesh`].
//!
//! Each material's mask and mesh depend only on the read-only grid, so with
//! `parallel` set the materials are meshed on the rayon pool. Output order is
//! always material order regardless of which mesh finishes first.

use std::sync::Arc;

use rayon::prelude::*;
use web_time::Instant;

use crate::{
    assets::CubeTexture,
    error::GeometryError,
    rendering::meshing::{SurfaceBuilder, SurfaceMesh},
    voxels::{OccupancyMask, VoxelGrid},
};

use super::material::Material;

/// The mesh of one material bound to its texture.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeEntry {
    /// Index into the level's material list. Voxels store `material_index + 1`.
    pub material_index: usize,
    /// Display name of the material.
    pub name: String,
    /// Texture the mesh is drawn with.
    pub texture: Arc<CubeTexture>,
    /// Geometry of every voxel of this material.
    pub mesh: SurfaceMesh,
}

/// Per-material meshes of a whole level, ordered by material index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeMesh {
    entries: Vec<CompositeEntry>,
}

impl CompositeMesh {
    /// Entry for `material_index`, if that material produced geometry.
    pub fn get(&self, material_index: usize) -> Option<&CompositeEntry> {
        self.entries
            .binary_search_by_key(&material_index, |entry| entry.material_index)
            .ok()
            .map(|i| &self.entries[i])
    }

    /// All entries in material order.
    pub fn iter(&self) -> impl Iterator<Item = &CompositeEntry> {
        self.entries.iter()
    }

    /// All entries in material order.
    pub fn entries(&self) -> &[CompositeEntry] {
        &self.entries
    }

    /// Number of materials with geometry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no material produced geometry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Triangles across all entries.
    pub fn total_triangles(&self) -> usize {
        self.entries.iter().map(|entry| entry.mesh.triangle_count()).sum()
    }
}

/// Builds the composite mesh of `grid`.
///
/// # Arguments
/// * `grid` - voxel ids, `0` for air and `i + 1` for `materials[i]`
/// * `materials` - resolved materials in id order
/// * `builder` - turns one material's occupancy mask into a mesh
/// * `parallel` - mesh materials on the rayon pool
///
/// # Returns
/// One entry per textured material with at least one visible face. Empty
/// materials are skipped before any mask is computed.
///
/// # Errors
/// [`GeometryError::UnknownMaterial`] if a voxel references a material past the end of `materials`.
pub fn composite(
    grid: &VoxelGrid,
    materials: &[Material],
    builder: &dyn SurfaceBuilder,
    parallel: bool,
) -> Result<CompositeMesh, GeometryError> {
    validate_ids(grid, materials.len())?;

    let start = Instant::now();

    let textured: Vec<(usize, &Material, &Arc<CubeTexture>)> = materials
        .iter()
        .enumerate()
        .filter_map(|(index, material)| material.texture().map(|texture| (index, material, texture)))
        .collect();

    let build = |&(index, material, texture): &(usize, &Material, &Arc<CubeTexture>)| {
        let mask = OccupancyMask::from_grid(grid, index);
        let mesh = builder.build(&mask);
        log::debug!(
            "Meshed material {index} ({}): {} solid cells, {} triangles",
            material.name(),
            mask.count_solid(),
            mesh.triangle_count()
        );
        CompositeEntry {
            material_index: index,
            name: material.name().to_string(),
            texture: Arc::clone(texture),
            mesh,
        }
    };

    let meshed: Vec<CompositeEntry> = if parallel {
        textured.par_iter().map(build).collect()
    } else {
        textured.iter().map(build).collect()
    };

    let entries: Vec<CompositeEntry> = meshed
        .into_iter()
        .filter(|entry| !entry.mesh.is_empty())
        .collect();

    let composite = CompositeMesh { entries };
    log::info!(
        "Composited {} materials into {} meshes ({} triangles) in {:?}",
        textured.len(),
        composite.len(),
        composite.total_triangles(),
        start.elapsed()
    );
    Ok(composite)
}

fn validate_ids(grid: &VoxelGrid, material_count: usize) -> Result<(), GeometryError> {
    if (grid.max_id() as usize) <= material_count {
        return Ok(());
    }

    match grid.iter().find(|(_, id)| *id as usize > material_count) {
        Some(([x, y, z], id)) => Err(GeometryError::UnknownMaterial {
            x,
            y,
            z,
            id,
            materials: material_count,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use image::DynamicImage;

    use super::*;
    use crate::{
        assets::ImageAsset,
        rendering::meshing::{CulledMesher, GreedyMesher},
    };

    fn texture() -> Arc<CubeTexture> {
        let face = || ImageAsset::new("face.png", DynamicImage::new_rgba8(1, 1));
        Arc::new(CubeTexture::from_faces([face(), face(), face(), face(), face(), face()]).unwrap())
    }

    fn textured(name: &str) -> Material {
        Material::Textured {
            name: name.to_string(),
            type_name: "Solid".to_string(),
            texture: texture(),
        }
    }

    fn empty(name: &str) -> Material {
        Material::Empty {
            name: name.to_string(),
        }
    }

    struct Counting<B> {
        inner: B,
        calls: AtomicUsize,
    }

    impl<B: SurfaceBuilder> SurfaceBuilder for Counting<B> {
        fn build(&self, mask: &OccupancyMask) -> SurfaceMesh {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.build(mask)
        }
    }

    #[test]
    fn solid_cube_gives_one_entry() {
        let grid = VoxelGrid::from_fn([2, 2, 2], |_, _, _| 1);
        let composite = composite(&grid, &[textured("stone")], &GreedyMesher, false).unwrap();

        assert_eq!(composite.len(), 1);
        let entry = composite.get(0).unwrap();
        assert_eq!(entry.name, "stone");
        // Six faces of 2x2 merged into one quad each.
        assert_eq!(entry.mesh.triangle_count(), 12);
        assert!((entry.mesh.surface_area() - 24.0).abs() < 1e-4);
    }

    #[test]
    fn empty_materials_are_never_meshed() {
        let grid = VoxelGrid::from_fn([3, 3, 3], |x, _, _| (x % 3) as u32 + 1);
        let builder = Counting {
            inner: GreedyMesher,
            calls: AtomicUsize::new(0),
        };
        let materials = [empty("air"), textured("stone"), empty("water")];

        let composite = composite(&grid, &materials, &builder, false).unwrap();

        assert_eq!(builder.calls.load(Ordering::SeqCst), 1);
        assert_eq!(composite.len(), 1);
        assert!(composite.get(0).is_none());
        assert!(composite.get(1).is_some());
    }

    #[test]
    fn unused_material_contributes_nothing() {
        let grid = VoxelGrid::from_fn([2, 2, 2], |_, _, _| 2);
        let composite = composite(
            &grid,
            &[textured("unused"), textured("dirt")],
            &GreedyMesher,
            false,
        )
        .unwrap();
        assert_eq!(composite.len(), 1);
        assert_eq!(composite.entries()[0].material_index, 1);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = fastrand::Rng::with_seed(7);
        let grid = VoxelGrid::from_fn([8, 6, 7], |_, _, _| rng.u32(0..=4));
        let materials = [textured("a"), empty("b"), textured("c"), textured("d")];

        let sequential = composite(&grid, &materials, &CulledMesher, false).unwrap();
        let parallel = composite(&grid, &materials, &CulledMesher, true).unwrap();

        assert_eq!(sequential, parallel);
        let indices: Vec<usize> = parallel.iter().map(|entry| entry.material_index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let grid = VoxelGrid::from_fn([2, 1, 2], |x, _, z| if x == 1 && z == 1 { 3 } else { 1 });
        let err = composite(&grid, &[textured("a"), textured("b")], &GreedyMesher, true).unwrap_err();
        assert_eq!(
            err,
            GeometryError::UnknownMaterial {
                x: 1,
                y: 0,
                z: 1,
                id: 3,
                materials: 2
            }
        );
    }

    #[test]
    fn all_air_grid_is_empty() {
        let grid = VoxelGrid::from_fn([4, 4, 4], |_, _, _| 0);
        let composite = composite(&grid, &[textured("a")], &GreedyMesher, true).unwrap();
        assert!(composite.is_empty());
        assert_eq!(composite.total_triangles(), 0);
    }
}
