//! Tile data structures and the extract, deduplicate, pack pipeline
//!
//! This module contains:
//! - The tile value type and its transparency-aware equality
//! - Grid-aligned extraction from source images
//! - First-occurrence deduplication
//! - Row-major packing into a tileset image

/// First-occurrence tile list
pub mod deduplication;
/// Grid-aligned tile extraction
pub mod extraction;
/// Tileset grid layout and packing
pub mod packing;
/// Tile value type and comparison
pub mod tile;

pub use deduplication::TileList;
pub use extraction::TileDimensions;
pub use tile::Tile;
