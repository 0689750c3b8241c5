//! Tests for source image loading and atomic tileset export

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;
    use tileforge::TilesetError;
    use tileforge::io::image::{load_source_image, save_tileset};

    fn sample_image() -> RgbaImage {
        RgbaImage::from_fn(16, 8, |x, y| Rgba([x as u8 * 10, y as u8 * 20, 5, (x * 16) as u8]))
    }

    // Tests saved pixels survive a reload, including transparent color data
    // Verified by encoding as a lossy format
    #[test]
    fn test_save_then_load_preserves_pixels() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tileset.png");
        let image = sample_image();

        save_tileset(&image, &output).unwrap();
        let loaded = load_source_image(&output).unwrap();

        assert_eq!(loaded.dimensions(), (16, 8));
        assert_eq!(loaded.as_raw(), image.as_raw());
    }

    // Tests output is PNG regardless of extension
    // Verified by inferring the format from the path
    #[test]
    fn test_save_always_png() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tileset.out");

        save_tileset(&sample_image(), &output).unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    // Tests an existing output file is replaced
    // Verified by refusing to overwrite
    #[test]
    fn test_save_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tileset.png");
        fs::write(&output, "stale").unwrap();

        save_tileset(&sample_image(), &output).unwrap();

        assert!(load_source_image(&output).is_ok());
    }

    // Tests a missing output directory fails without leaving files behind
    // Verified by creating parent directories
    #[test]
    fn test_save_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("tileset.png");

        let result = save_tileset(&sample_image(), &output);

        assert!(matches!(result, Err(TilesetError::FileSystem { .. })));
        assert!(!output.exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    // Tests no temporary file remains after a successful save
    // Verified by copying instead of renaming the temporary file
    #[test]
    fn test_save_leaves_only_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tileset.png");

        save_tileset(&sample_image(), &output).unwrap();

        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("tileset.png")]);
    }

    // Tests loading a nonexistent file reports the path
    // Verified by discarding the path from the error
    #[test]
    fn test_load_missing_file() {
        let result = load_source_image("does/not/exist.png");

        match result {
            Err(TilesetError::ImageLoad { path, .. }) => {
                assert!(path.ends_with("exist.png"));
            }
            other => panic!("expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests undecodable data is a load error
    // Verified by returning an empty image for bad data
    #[test]
    fn test_load_invalid_data() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("broken.png");
        fs::write(&input, "not a png").unwrap();

        let result = load_source_image(&input);

        assert!(matches!(result, Err(TilesetError::ImageLoad { .. })));
    }

    // Tests opaque RGB sources are widened to RGBA
    // Verified by keeping the decoded color type
    #[test]
    fn test_load_converts_to_rgba() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("rgb.png");
        image::RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]))
            .save(&input)
            .unwrap();

        let loaded = load_source_image(&input).unwrap();

        assert_eq!(loaded.get_pixel(2, 2), &Rgba([1, 2, 3, 255]));
    }
}
