#![allow(dead_code)]

use std::{
    collections::HashMap,
    future::Future,
    io,
    pin::Pin,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    task::{Context, Poll},
};

use futures::future::BoxFuture;
use image::{DynamicImage, Rgba, RgbaImage};
use voxel_level::{
    assets::{ImageSource, LevelFetcher},
    error::ImageError,
    level::CompositeMesh,
    rendering::{
        meshing::{GreedyMesher, SurfaceBuilder},
        SceneSink, SurfaceMesh,
    },
    voxels::OccupancyMask,
};

/// Serves level documents from memory.
#[derive(Default)]
pub struct MemoryFetcher {
    documents: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn with(location: &str, document: impl Into<String>) -> Self {
        let mut fetcher = Self::default();
        fetcher.documents.insert(location.to_string(), document.into());
        fetcher
    }
}

impl LevelFetcher for MemoryFetcher {
    fn fetch<'a>(&'a self, location: &'a str) -> BoxFuture<'a, io::Result<String>> {
        Box::pin(async move {
            self.documents
                .get(location)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, location.to_string()))
        })
    }
}

/// Returns `Pending` a fixed number of times before resolving.
pub struct Delay(pub u32);

impl Future for Delay {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

/// Serves 4x4 single-colour images for any path.
///
/// Paths in `failing` report an I/O error. Paths starting with a prefix in
/// `delays` suspend that many times before resolving.
#[derive(Default, Clone)]
pub struct MockImages {
    failing: Vec<String>,
    delays: Vec<(String, u32)>,
    decoded: Arc<Mutex<Vec<String>>>,
}

impl MockImages {
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.push(path.to_string());
        self
    }

    pub fn delayed(mut self, prefix: &str, polls: u32) -> Self {
        self.delays.push((prefix.to_string(), polls));
        self
    }

    /// Paths in the order their decodes completed.
    pub fn decoded(&self) -> Vec<String> {
        self.decoded.lock().unwrap().clone()
    }
}

impl ImageSource for MockImages {
    fn decode<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<DynamicImage, ImageError>> {
        Box::pin(async move {
            let polls = self
                .delays
                .iter()
                .find(|(prefix, _)| path.starts_with(prefix.as_str()))
                .map_or(0, |(_, polls)| *polls);
            Delay(polls).await;

            if self.failing.iter().any(|failing| failing == path) {
                return Err(ImageError::Io {
                    path: path.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no such image"),
                });
            }

            self.decoded.lock().unwrap().push(path.to_string());
            let image = RgbaImage::from_pixel(4, 4, Rgba([path.len() as u8, 0, 0, 255]));
            Ok(DynamicImage::ImageRgba8(image))
        })
    }
}

/// Greedy mesher that counts its invocations.
#[derive(Default, Clone)]
pub struct CountingBuilder {
    pub calls: Arc<AtomicUsize>,
}

impl CountingBuilder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SurfaceBuilder for CountingBuilder {
    fn build(&self, mask: &OccupancyMask) -> SurfaceMesh {
        self.calls.fetch_add(1, Ordering::SeqCst);
        GreedyMesher.build(mask)
    }
}

/// Scene that remembers what it was given.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: usize,
    pub entries: Vec<(usize, String, usize)>,
}

impl SceneSink for RecordingSink {
    type Error = std::convert::Infallible;

    fn add_composite(&mut self, composite: &CompositeMesh) -> Result<(), Self::Error> {
        self.calls += 1;
        self.entries.extend(
            composite
                .iter()
                .map(|entry| (entry.material_index, entry.name.clone(), entry.mesh.triangle_count())),
        );
        Ok(())
    }
}

/// A `texture` object whose six paths are `{prefix}_{face}.png`.
pub fn texture_json(prefix: &str) -> String {
    let faces = ["left", "right", "front", "back", "top", "bottom"]
        .map(|face| format!(r#""{face}":"{prefix}_{face}.png""#))
        .join(",");
    format!("{{{faces}}}")
}

/// A textured material entry.
pub fn textured_json(name: &str) -> String {
    format!(
        r#"{{"name":"{name}","type":"Solid","texture":{}}}"#,
        texture_json(name)
    )
}

/// An `Empty` material entry.
pub fn empty_json(name: &str) -> String {
    format!(r#"{{"name":"{name}","type":"Empty"}}"#)
}

/// A level document from material entries and a voxel array.
pub fn level_json(materials: &[String], voxels: &str) -> String {
    format!(
        r#"{{"materials":[{}],"voxels":{voxels}}}"#,
        materials.join(",")
    )
}

/// A `size`^3 voxel array filled with `id`.
pub fn filled_cube(size: usize, id: u32) -> String {
    serde_json::to_string(&vec![vec![vec![id; size]; size]; size]).unwrap()
}
