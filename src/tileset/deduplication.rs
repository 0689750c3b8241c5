//! First-occurrence tile list with transparency-aware deduplication

use crate::tileset::extraction::TileDimensions;
use crate::tileset::tile::Tile;
use std::collections::HashMap;

/// Ordered collection of unique tiles
///
/// Tiles keep the order in which they were first pushed. No two tiles in the
/// list satisfy [`Tile::matches`]. Candidates are bucketed by fingerprint so a
/// push only runs the pixel comparison against tiles that could match.
#[derive(Debug, Clone, Default)]
pub struct TileList {
    tiles: Vec<Tile>,
    buckets: HashMap<u64, Vec<usize>>,
}

impl TileList {
    /// Create an empty tile list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tile unless an equivalent tile is already present
    ///
    /// Returns `true` when the tile was appended.
    pub fn push_unique(&mut self, tile: Tile) -> bool {
        let fingerprint = tile.fingerprint();
        let bucket = self.buckets.entry(fingerprint).or_default();

        let duplicate = bucket
            .iter()
            .filter_map(|&index| self.tiles.get(index))
            .any(|existing| existing.matches(&tile));
        if duplicate {
            return false;
        }

        bucket.push(self.tiles.len());
        self.tiles.push(tile);
        true
    }

    /// Number of unique tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether no tile has been accepted
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at the given first-occurrence index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Iterate tiles in first-occurrence order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Dimensions shared by the tiles, taken from the first one
    pub fn tile_dimensions(&self) -> Option<TileDimensions> {
        self.tiles
            .first()
            .map(|tile| TileDimensions::unchecked(tile.width(), tile.height()))
    }

    /// Borrow the tiles as a slice
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }
}

impl FromIterator<Tile> for TileList {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut list = Self::new();
        for tile in iter {
            list.push_unique(tile);
        }
        list
    }
}

impl<'a> IntoIterator for &'a TileList {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
