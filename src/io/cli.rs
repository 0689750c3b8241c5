//! Command-line interface and the load, extract, pack, save pipeline

use crate::io::configuration::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, TILES_PER_ROW};
use crate::io::error::Result;
use crate::io::image::{load_source_image, save_tileset};
use crate::io::progress::ExtractionProgress;
use crate::tileset::deduplication::TileList;
use crate::tileset::extraction::{TileDimensions, cell_count, extract_unique_tiles};
use crate::tileset::packing::pack_tiles;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tileforge")]
#[command(author, version, about = "Image to tileset converter")]
/// Command-line arguments for the tileset converter
pub struct Cli {
    /// Path to the source image (expects an image with an alpha channel, e.g. PNG)
    #[arg(short = 'i', long = "input", value_name = "IMAGE")]
    pub image_path: PathBuf,

    /// Path to the output tileset (written as PNG)
    #[arg(short = 'o', long = "output", value_name = "TILESET")]
    pub output_path: PathBuf,

    /// Tile width in pixels
    #[arg(short = 'x', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Tile height in pixels
    #[arg(short = 'y', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Validated tile size from the `-x` and `-y` arguments
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn tile_dimensions(&self) -> Result<TileDimensions> {
        TileDimensions::new(self.tile_width, self.tile_height)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of unique tiles written to the tileset
    pub tile_count: usize,
    /// Where the tileset was saved
    pub output_path: PathBuf,
}

/// Runs a single image-to-tileset conversion
pub struct TilesetConverter {
    cli: Cli,
}

impl TilesetConverter {
    /// Create a converter for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the source and extract its unique tiles
    ///
    /// Tile dimensions are validated before the source image is touched. A
    /// tile larger than the image yields an empty list here; packing rejects it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A tile dimension is zero
    /// - The source image cannot be loaded
    pub fn extract(&self) -> Result<TileList> {
        let dimensions = self.cli.tile_dimensions()?;
        let source = load_source_image(&self.cli.image_path)?;

        let cells = cell_count(&source, dimensions);
        let progress = if self.cli.should_show_progress() {
            ExtractionProgress::new(&self.cli.image_path, cells)
        } else {
            ExtractionProgress::hidden(cells)
        };
        let tiles = extract_unique_tiles(&source, dimensions, Some(&progress));
        progress.finish();

        Ok(tiles)
    }

    /// Pack extracted tiles and save the tileset to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile list is empty
    /// - The tileset cannot be written to the output path
    pub fn write(&self, tiles: &TileList) -> Result<ConversionSummary> {
        let tileset = pack_tiles(tiles, TILES_PER_ROW)?;
        save_tileset(&tileset, &self.cli.output_path)?;

        Ok(ConversionSummary {
            tile_count: tiles.len(),
            output_path: self.cli.output_path.clone(),
        })
    }

    /// Extract, pack and save in one call
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::extract`] or [`Self::write`]
    pub fn run(&self) -> Result<ConversionSummary> {
        let tiles = self.extract()?;
        self.write(&tiles)
    }
}
