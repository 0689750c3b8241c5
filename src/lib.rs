//! Deduplicating image to tileset conversion
//!
//! Slices a source image into fixed-size tiles, drops duplicates using a
//! transparency-aware comparison, and packs the unique tiles into a grid.

#![forbid(unsafe_code)]

/// Command-line surface, image input/output and error handling
pub mod io;
/// Tile extraction, deduplication and packing
pub mod tileset;

pub use io::error::{Result, Stage, TilesetError};
