mod common;

use common::{
    empty_json, filled_cube, level_json, textured_json, CountingBuilder, MemoryFetcher, MockImages,
    RecordingSink,
};
use voxel_level::{
    error::{AssetError, GeometryError, ImageError, LevelLoadError, ParseError},
    level::{Level, LevelAssembler, Material},
    voxels::BlockSide,
    LoaderConfig,
};

fn assembler(document: String, images: MockImages) -> LevelAssembler {
    LevelAssembler::new(
        Box::new(MemoryFetcher::with("level.json", document)),
        Box::new(images),
        LoaderConfig::default(),
    )
}

fn load(assembler: &LevelAssembler) -> Result<Level, LevelLoadError> {
    pollster::block_on(assembler.load_level("level.json"))
}

#[test]
fn solid_cube_loads_into_one_merged_mesh() {
    let document = level_json(&[textured_json("stone")], &filled_cube(2, 1));
    let level = load(&assembler(document, MockImages::default())).unwrap();

    assert_eq!(level.grid().dimensions(), [2, 2, 2]);
    assert_eq!(level.map().len(), 1);

    let entry = level.map().get(0).unwrap();
    assert_eq!(entry.name, "stone");
    // 24 unit faces, merged into one quad per side.
    assert_eq!(entry.mesh.triangle_count(), 12);
    assert!((entry.mesh.surface_area() - 24.0).abs() < 1e-4);

    assert!(level.entities().is_empty());
    assert!(level.updates().is_empty());
}

#[test]
fn disabling_greedy_meshing_keeps_unit_faces() {
    let document = level_json(&[textured_json("stone")], &filled_cube(2, 1));
    let assembler = LevelAssembler::new(
        Box::new(MemoryFetcher::with("level.json", document)),
        Box::new(MockImages::default()),
        LoaderConfig {
            greedy_meshing: false,
            ..LoaderConfig::default()
        },
    );
    let level = load(&assembler).unwrap();
    assert_eq!(level.map().total_triangles(), 48);
}

#[test]
fn failing_top_texture_fails_the_load() {
    let document = level_json(&[textured_json("stone")], &filled_cube(2, 1));
    let images = MockImages::default().failing("stone_top.png");

    let err = load(&assembler(document, images)).unwrap_err();

    match err {
        LevelLoadError::Asset(AssetError::Material { name, source }) => {
            assert_eq!(name, "stone");
            assert!(matches!(
                *source,
                AssetError::Image(ImageError::Io { ref path, .. }) if path == "stone_top.png"
            ));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn empty_materials_are_never_meshed() {
    let voxels = "[[[1,2],[2,1]],[[3,3],[0,2]]]";
    let document = level_json(
        &[empty_json("air"), textured_json("stone"), empty_json("water")],
        voxels,
    );
    let builder = CountingBuilder::default();
    let images = MockImages::default();
    let assembler =
        assembler(document, images.clone()).with_surface_builder(Box::new(builder.clone()));

    let level = load(&assembler).unwrap();

    assert_eq!(builder.calls(), 1);
    assert_eq!(level.map().len(), 1);
    assert_eq!(level.map().entries()[0].material_index, 1);
    assert!(level.materials()[0].is_empty());
    assert!(level.materials()[2].is_empty());
    // Only stone's six faces were ever decoded.
    assert_eq!(images.decoded().len(), 6);
}

#[test]
fn material_order_survives_out_of_order_loading() {
    let document = level_json(
        &[textured_json("slow"), textured_json("fast")],
        "[[[1,2]]]",
    );
    let images = MockImages::default().delayed("slow", 8);

    let level = load(&assembler(document, images.clone())).unwrap();

    // Every fast face decoded before any slow one.
    let decoded = images.decoded();
    assert!(decoded[..6].iter().all(|path| path.starts_with("fast")));

    let names: Vec<&str> = level.materials().iter().map(Material::name).collect();
    assert_eq!(names, vec!["slow", "fast"]);
    let slow_texture = level.materials()[0].texture().unwrap();
    assert_eq!(slow_texture.face(BlockSide::TOP).path(), "slow_top.png");

    let indices: Vec<usize> = level.map().iter().map(|entry| entry.material_index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert_eq!(level.map().get(0).unwrap().name, "slow");
}

#[test]
fn textured_material_without_texture_is_a_parse_error() {
    let document = level_json(
        &[r#"{"name":"glass","type":"Solid"}"#.to_string()],
        "[[[1]]]",
    );
    let err = load(&assembler(document, MockImages::default())).unwrap_err();
    assert!(matches!(
        err,
        LevelLoadError::Parse(ParseError::MissingTexture { .. })
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = load(&assembler("{\"materials\": [".to_string(), MockImages::default())).unwrap_err();
    assert!(matches!(err, LevelLoadError::Parse(ParseError::Json(_))));
}

#[test]
fn ragged_voxels_are_a_geometry_error() {
    let document = level_json(&[textured_json("stone")], "[[[1,1],[1]]]");
    let err = load(&assembler(document, MockImages::default())).unwrap_err();
    assert!(matches!(
        err,
        LevelLoadError::Geometry(GeometryError::Ragged { .. })
    ));
}

#[test]
fn voxel_without_material_is_a_geometry_error() {
    let document = level_json(&[textured_json("stone")], "[[[1,2]]]");
    let err = load(&assembler(document, MockImages::default())).unwrap_err();
    assert!(matches!(
        err,
        LevelLoadError::Geometry(GeometryError::UnknownMaterial { id: 2, .. })
    ));
}

#[test]
fn missing_document_is_a_fetch_error() {
    let assembler = assembler(String::new(), MockImages::default());
    let err = pollster::block_on(assembler.load_level("elsewhere.json")).unwrap_err();
    assert!(matches!(
        err,
        LevelLoadError::Fetch { ref location, .. } if location == "elsewhere.json"
    ));
}

#[test]
fn level_is_added_to_scene_in_one_call() {
    let document = level_json(
        &[textured_json("stone"), textured_json("dirt")],
        "[[[1,1],[2,2]],[[1,1],[2,2]]]",
    );
    let level = load(&assembler(document, MockImages::default())).unwrap();

    let mut sink = RecordingSink::default();
    level.add_to_scene(&mut sink).unwrap();

    assert_eq!(sink.calls, 1);
    let names: Vec<&str> = sink.entries.iter().map(|(_, name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["stone", "dirt"]);
    // Each material is a 2x1x2 slab: six merged quads.
    assert!(sink.entries.iter().all(|(_, _, triangles)| *triangles == 12));
}
