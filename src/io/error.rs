//! Error types and stage attribution for tileset conversion

use std::fmt;
use std::path::PathBuf;

/// Pipeline stage a conversion failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and decoding the source image
    Load,
    /// Slicing the source image into tiles
    Extract,
    /// Arranging unique tiles into the output grid
    Pack,
    /// Encoding and persisting the tileset
    Save,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Load => "load",
            Self::Extract => "extract",
            Self::Pack => "pack",
            Self::Save => "save",
        };
        f.write_str(name)
    }
}

/// Main error type for all conversion operations
#[derive(Debug)]
pub enum TilesetError {
    /// Failed to open or decode the source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Parameter validation failed before extraction
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Extracted tiles cannot form a tileset
    InvalidSourceData {
        /// Description of what's wrong with the tile data
        reason: String,
    },

    /// Failed to encode the tileset image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// File system operation failure while writing output
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TilesetError {
    /// Stage of the conversion this error aborted
    pub const fn stage(&self) -> Stage {
        match self {
            Self::ImageLoad { .. } => Stage::Load,
            Self::InvalidParameter { .. } => Stage::Extract,
            Self::InvalidSourceData { .. } => Stage::Pack,
            Self::ImageExport { .. } | Self::FileSystem { .. } => Stage::Save,
        }
    }
}

impl fmt::Display for TilesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export tileset to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilesetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } | Self::InvalidSourceData { .. } => None,
        }
    }
}

/// Convenience type alias for conversion results
pub type Result<T> = std::result::Result<T, TilesetError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilesetError {
    TilesetError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
