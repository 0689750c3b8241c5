//! Source image decoding and atomic PNG export of the packed tileset

use crate::io::error::{Result, TilesetError};
use image::{ImageFormat, RgbaImage};
use std::io::BufWriter;
use std::path::Path;
use tempfile::NamedTempFile;

/// Load a source image and convert it to 8-bit RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable image
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| TilesetError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Save the tileset as PNG, replacing `output_path` only on success
///
/// The image is encoded into a temporary file beside the destination and then
/// renamed over it, so a failed save never leaves a partial file behind.
/// Missing parent directories are reported as an error rather than created.
///
/// # Errors
///
/// Returns an error if:
/// - The temporary file cannot be created in the destination directory
/// - PNG encoding fails
/// - The temporary file cannot be flushed or renamed onto `output_path`
pub fn save_tileset<P: AsRef<Path>>(image: &RgbaImage, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let directory = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(directory).map_err(|e| TilesetError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create temporary file",
        source: e,
    })?;

    let mut writer = BufWriter::new(temp_file);
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| TilesetError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    let temp_file = writer
        .into_inner()
        .map_err(|e| TilesetError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "flush",
            source: e.into_error(),
        })?;
    temp_file
        .persist(output_path)
        .map_err(|e| TilesetError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename",
            source: e.error,
        })?;

    Ok(())
}
