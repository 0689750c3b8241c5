//! Row-major grid packing of unique tiles into a single tileset image

use crate::io::configuration::TRANSPARENT;
use crate::io::error::{Result, TilesetError, invalid_parameter};
use crate::tileset::deduplication::TileList;
use crate::tileset::extraction::TileDimensions;
use image::imageops::replace;
use image::{Rgba, RgbaImage};

/// Grid geometry of a packed tileset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesetLayout {
    /// Grid columns actually occupied, `min(N, columns)`
    pub columns: u32,
    /// Grid rows, `floor(N / columns) + 1`
    pub rows: u32,
    /// Size of each grid cell
    pub tile: TileDimensions,
    stride: u32,
}

impl TilesetLayout {
    /// Compute the layout for `count` tiles packed `columns` to a row
    ///
    /// # Errors
    ///
    /// Returns an error if `count` or `columns` is zero, or the tileset
    /// would not fit in `u32` pixel coordinates
    pub fn for_tiles(count: usize, tile: TileDimensions, columns: u32) -> Result<Self> {
        if columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &columns,
                &"tileset must have at least one column",
            ));
        }
        if count == 0 {
            return Err(TilesetError::InvalidSourceData {
                reason: "No tiles were extracted from the source image".to_string(),
            });
        }

        let count = u32::try_from(count).map_err(|_overflow| too_large(count))?;
        // A full last row is still followed by one empty row
        let rows = count / columns + 1;
        let layout = Self {
            columns: count.min(columns),
            rows,
            tile,
            stride: columns,
        };

        let fits = layout.columns.checked_mul(tile.width()).is_some()
            && layout.rows.checked_mul(tile.height()).is_some();
        if fits {
            Ok(layout)
        } else {
            Err(too_large(count as usize))
        }
    }

    /// Output image size in pixels as `(width, height)`
    pub const fn pixel_size(&self) -> (u32, u32) {
        (
            self.columns * self.tile.width(),
            self.rows * self.tile.height(),
        )
    }

    /// Top-left pixel of the cell holding the tile at `index`
    pub const fn cell_origin(&self, index: u32) -> (u32, u32) {
        let col = index % self.stride;
        let row = index / self.stride;
        (col * self.tile.width(), row * self.tile.height())
    }
}

fn too_large(count: usize) -> TilesetError {
    TilesetError::InvalidSourceData {
        reason: format!("{count} tiles exceed the maximum tileset size"),
    }
}

/// Paste every tile into a transparent canvas, `columns` tiles per row
///
/// Tiles overwrite the canvas; cells past the last tile stay transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The tile list is empty
/// - `columns` is zero
/// - Tiles in the list differ in size
pub fn pack_tiles(tiles: &TileList, columns: u32) -> Result<RgbaImage> {
    let tile = tiles
        .tile_dimensions()
        .ok_or_else(|| TilesetError::InvalidSourceData {
            reason: "No tiles were extracted from the source image".to_string(),
        })?;
    let layout = TilesetLayout::for_tiles(tiles.len(), tile, columns)?;

    let (width, height) = layout.pixel_size();
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(TRANSPARENT));

    for (index, tile_image) in (0u32..).zip(tiles) {
        if tile_image.width() != tile.width() || tile_image.height() != tile.height() {
            return Err(TilesetError::InvalidSourceData {
                reason: format!(
                    "Tile {index} is {}x{}, expected {}x{}",
                    tile_image.width(),
                    tile_image.height(),
                    tile.width(),
                    tile.height()
                ),
            });
        }

        let (x, y) = layout.cell_origin(index);
        replace(&mut canvas, tile_image.pixels(), i64::from(x), i64::from(y));
    }

    Ok(canvas)
}
