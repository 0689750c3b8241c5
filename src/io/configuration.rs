//! Tileset layout constants and command-line defaults

// Grid policy for the packed output
/// Number of tiles placed in each row of the output tileset
pub const TILES_PER_ROW: u32 = 16;

/// Fill value for tileset cells no tile is pasted into
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

// Default values for configurable parameters
/// Tile width in pixels when `-x` is omitted
pub const DEFAULT_TILE_WIDTH: u32 = 8;
/// Tile height in pixels when `-y` is omitted
pub const DEFAULT_TILE_HEIGHT: u32 = 8;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
