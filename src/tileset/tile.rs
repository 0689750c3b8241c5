//! Tile value type with transparency-aware equality
//!
//! Image editors often leave arbitrary color data behind fully transparent
//! pixels. Two tiles are considered the same when every pixel either matches
//! on all four channels or is fully transparent on both sides.

use crate::io::configuration::TRANSPARENT;
use image::{Rgba, RgbaImage};
use std::hash::{DefaultHasher, Hash, Hasher};

/// A fixed-size rectangular region cut from a source image
#[derive(Debug, Clone)]
pub struct Tile {
    pixels: RgbaImage,
}

impl Tile {
    /// Wrap owned pixel data as a tile
    pub const fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the underlying pixel data
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the tile and return its pixel data
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// Check whether every pixel has zero alpha
    pub fn is_fully_transparent(&self) -> bool {
        self.pixels.pixels().all(|p| p[3] == 0)
    }

    /// Compare two tiles, treating pixels transparent on both sides as equal
    ///
    /// Tiles of different dimensions never match. The scan runs in raster
    /// order and stops at the first mismatching pixel.
    pub fn matches(&self, other: &Self) -> bool {
        if self.pixels.dimensions() != other.pixels.dimensions() {
            return false;
        }

        self.pixels
            .pixels()
            .zip(other.pixels.pixels())
            .all(|(a, b)| pixels_match(*a, *b))
    }

    /// Hash of the tile content, consistent with [`Tile::matches`]
    ///
    /// Matching tiles always share a fingerprint; differing tiles may collide.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

const fn pixels_match(a: Rgba<u8>, b: Rgba<u8>) -> bool {
    if a.0[3] == 0 && b.0[3] == 0 {
        return true;
    }
    a.0[0] == b.0[0] && a.0[1] == b.0[1] && a.0[2] == b.0[2] && a.0[3] == b.0[3]
}

// Color behind zero alpha is don't-care, so hash it as a canonical value
const fn normalized(pixel: Rgba<u8>) -> [u8; 4] {
    if pixel.0[3] == 0 { TRANSPARENT } else { pixel.0 }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pixels.dimensions().hash(state);
        for pixel in self.pixels.pixels() {
            normalized(*pixel).hash(state);
        }
    }
}

impl From<RgbaImage> for Tile {
    fn from(pixels: RgbaImage) -> Self {
        Self::new(pixels)
    }
}
