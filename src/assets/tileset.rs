//! # Tileset
//!
//! An atlas image cut into equally sized tiles. Tiles are numbered row-major
//! from the top-left corner starting at 0.

use image::{GenericImageView, RgbaImage, SubImage};

use crate::error::TilesetError;

use super::image_asset::ImageAsset;

/// Pixel rectangle of one tile inside the atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// An atlas image indexed by tile id.
#[derive(Debug, Clone)]
pub struct Tileset {
    image: RgbaImage,
    tile_width: u32,
    tile_height: u32,
}

impl Tileset {
    /// Indexes `image` into `tile_width` x `tile_height` tiles.
    ///
    /// # Errors
    /// [`TilesetError::ZeroTileSize`] for a zero tile dimension and
    /// [`TilesetError::UnevenWidth`] when the atlas width is not a whole number of tiles.
    pub fn new(image: RgbaImage, tile_width: u32, tile_height: u32) -> Result<Self, TilesetError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(TilesetError::ZeroTileSize {
                tile_width,
                tile_height,
            });
        }
        if image.width() % tile_width != 0 {
            return Err(TilesetError::UnevenWidth {
                width: image.width(),
                tile_width,
            });
        }
        Ok(Self {
            image,
            tile_width,
            tile_height,
        })
    }

    /// Indexes a loaded image asset.
    pub fn from_asset(
        asset: ImageAsset,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<Self, TilesetError> {
        Self::new(asset.into_image(), tile_width, tile_height)
    }

    /// Tiles per row.
    pub fn columns(&self) -> u32 {
        self.image.width() / self.tile_width
    }

    /// Complete rows of tiles.
    pub fn rows(&self) -> u32 {
        self.image.height() / self.tile_height
    }

    /// Number of addressable tiles. Wider than `u32` since an atlas of
    /// one-pixel tiles can hold more tiles than a tile id can name.
    pub fn tile_count(&self) -> u64 {
        tile_count(self.columns(), self.rows())
    }

    /// `(tile_width, tile_height)` in pixels.
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// The whole atlas.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Pixel rectangle of tile `id`.
    ///
    /// # Errors
    /// [`TilesetError::OutOfRange`] if `id` falls past the last row. Ids are
    /// never wrapped or clamped.
    pub fn tile_rect(&self, id: u32) -> Result<TileRect, TilesetError> {
        let columns = self.columns();
        if columns == 0 || id / columns >= self.rows() {
            return Err(TilesetError::OutOfRange {
                id,
                count: self.tile_count(),
            });
        }

        let (row, col) = (id / columns, id % columns);
        Ok(TileRect {
            x: col * self.tile_width,
            y: row * self.tile_height,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Borrowed view of tile `id`.
    pub fn tile(&self, id: u32) -> Result<SubImage<&RgbaImage>, TilesetError> {
        let rect = self.tile_rect(id)?;
        Ok(self.image.view(rect.x, rect.y, rect.width, rect.height))
    }

    /// Normalised atlas coordinates `[u0, v0, u1, v1]` of tile `id`.
    pub fn tile_uv(&self, id: u32) -> Result<[f32; 4], TilesetError> {
        let rect = self.tile_rect(id)?;
        let (width, height) = (self.image.width() as f32, self.image.height() as f32);
        Ok([
            rect.x as f32 / width,
            rect.y as f32 / height,
            (rect.x + rect.width) as f32 / width,
            (rect.y + rect.height) as f32 / height,
        ])
    }
}

fn tile_count(columns: u32, rows: u32) -> u64 {
    u64::from(columns) * u64::from(rows)
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn atlas() -> Tileset {
        // 3 columns, 2 rows of 64px tiles; each tile filled with its id.
        let image = RgbaImage::from_fn(192, 128, |x, y| {
            let id = (y / 64) * 3 + x / 64;
            Rgba([id as u8, 0, 0, 255])
        });
        Tileset::new(image, 64, 64).unwrap()
    }

    #[test]
    fn tile_four_is_second_row_second_column() {
        let tiles = atlas();
        assert_eq!(
            tiles.tile_rect(4).unwrap(),
            TileRect {
                x: 64,
                y: 64,
                width: 64,
                height: 64
            }
        );
        let tile = tiles.tile(4).unwrap();
        assert_eq!(tile.dimensions(), (64, 64));
        assert_eq!(tile.get_pixel(10, 10)[0], 4);
    }

    #[test]
    fn every_tile_maps_to_its_own_pixels() {
        let tiles = atlas();
        assert_eq!(tiles.tile_count(), 6);
        for id in 0..6 {
            let tile = tiles.tile(id).unwrap().to_image();
            assert!(tile.pixels().all(|p| p[0] == id as u8));
        }
    }

    #[test]
    fn ids_past_the_last_row_are_errors() {
        let tiles = atlas();
        assert_eq!(
            tiles.tile_rect(6).unwrap_err(),
            TilesetError::OutOfRange { id: 6, count: 6 }
        );
        assert!(tiles.tile(1000).is_err());
    }

    #[test]
    fn uv_rectangle() {
        let [u0, v0, u1, v1] = atlas().tile_uv(5).unwrap();
        assert_eq!((u0, v0), (128.0 / 192.0, 0.5));
        assert_eq!((u1, v1), (1.0, 1.0));
    }

    #[test]
    fn tile_count_does_not_overflow() {
        assert_eq!(tile_count(u32::MAX, u32::MAX), 18_446_744_065_119_617_025);
    }

    #[test]
    fn from_asset_keeps_the_pixels() {
        let image = RgbaImage::from_fn(4, 2, |x, _| Rgba([x as u8, 0, 0, 255]));
        let asset = ImageAsset::new("atlas.png", image::DynamicImage::ImageRgba8(image));
        let tiles = Tileset::from_asset(asset, 2, 2).unwrap();
        assert_eq!((tiles.columns(), tiles.rows(), tiles.tile_count()), (2, 1, 2));
        assert_eq!(tiles.tile(1).unwrap().get_pixel(1, 0)[0], 3);
        let odd = ImageAsset::new("odd.png", image::DynamicImage::new_rgba8(3, 2));
        assert_eq!(
            Tileset::from_asset(odd, 2, 2).unwrap_err(),
            TilesetError::UnevenWidth {
                width: 3,
                tile_width: 2
            }
        );
    }

    #[test]
    fn rejects_bad_tile_sizes() {
        let image = RgbaImage::new(100, 64);
        assert_eq!(
            Tileset::new(image.clone(), 0, 64).unwrap_err(),
            TilesetError::ZeroTileSize {
                tile_width: 0,
                tile_height: 64
            }
        );
        assert_eq!(
            Tileset::new(image, 64, 64).unwrap_err(),
            TilesetError::UnevenWidth {
                width: 100,
                tile_width: 64
            }
        );
    }
}
