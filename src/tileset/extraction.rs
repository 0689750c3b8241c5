//! Grid-aligned tile extraction from source images
//!
//! The source is cut into `width x height` cells in row-major order. Any
//! columns or rows left over past the last whole cell are dropped, so partial
//! tiles never reach the tile list.

use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ExtractionProgress;
use crate::tileset::deduplication::TileList;
use crate::tileset::tile::Tile;
use image::RgbaImage;
use image::imageops::crop_imm;

/// Validated tile size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDimensions {
    width: u32,
    height: u32,
}

impl TileDimensions {
    /// Validate a tile size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter(
                "tile_width",
                &width,
                &"tile width must be at least 1 pixel",
            ));
        }
        if height == 0 {
            return Err(invalid_parameter(
                "tile_height",
                &height,
                &"tile height must be at least 1 pixel",
            ));
        }
        Ok(Self { width, height })
    }

    // Dimensions read back from existing tiles are non-zero by construction
    pub(crate) const fn unchecked(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Tile width in pixels
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Tile height in pixels
    pub const fn height(self) -> u32 {
        self.height
    }

    /// Number of whole tiles that fit an image as `(cols, rows)`
    pub const fn grid_size(self, image_width: u32, image_height: u32) -> (u32, u32) {
        (image_width / self.width, image_height / self.height)
    }
}

/// Iterate the whole grid cells of an image in row-major order
pub fn grid_cells(
    image: &RgbaImage,
    dimensions: TileDimensions,
) -> impl Iterator<Item = Tile> + '_ {
    let (cols, rows) = dimensions.grid_size(image.width(), image.height());
    let (tile_w, tile_h) = (dimensions.width(), dimensions.height());

    (0..rows).flat_map(move |row| {
        (0..cols).map(move |col| {
            Tile::from(crop_imm(image, col * tile_w, row * tile_h, tile_w, tile_h).to_image())
        })
    })
}

/// Slice an image into tiles and keep only the first occurrence of each
///
/// A tile larger than the image yields an empty list rather than an error.
pub fn extract_unique_tiles(
    image: &RgbaImage,
    dimensions: TileDimensions,
    progress: Option<&ExtractionProgress>,
) -> TileList {
    let mut tiles = TileList::new();

    for tile in grid_cells(image, dimensions) {
        tiles.push_unique(tile);
        if let Some(progress) = progress {
            progress.advance(tiles.len());
        }
    }

    tiles
}

/// Total number of grid cells an extraction will visit
pub fn cell_count(image: &RgbaImage, dimensions: TileDimensions) -> u64 {
    let (cols, rows) = dimensions.grid_size(image.width(), image.height());
    u64::from(cols) * u64::from(rows)
}
