use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{ImageFormat, RgbaImage};

use crate::error::SplitError;

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

/// Save an RGBA image as PNG, optionally with compression.
///
/// Any existing file at `path` is overwritten.
pub fn save_png(image: &RgbaImage, path: &Path, compress: Option<CompressionLevel>) -> Result<()> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| SplitError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            SplitError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| SplitError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 128])
            }
        })
    }

    #[test]
    fn test_save_png_preserves_pixels() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("strip.png");
        let img = checker(8, 4);

        save_png(&img, &path, None).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_compressed_png_is_lossless() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("strip.png");
        let img = checker(16, 16);

        save_png(&img, &path, Some(CompressionLevel::Level(2))).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_save_png_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("strip.png");
        fs::write(&path, b"stale").unwrap();

        save_png(&checker(2, 2), &path, None).unwrap();

        assert_eq!(image::open(&path).unwrap().into_rgba8(), checker(2, 2));
    }

    #[test]
    fn test_missing_parent_is_write_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope").join("strip.png");

        let err = save_png(&checker(2, 2), &path, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SplitError>(),
            Some(SplitError::OutputWrite { .. })
        ));
    }
}
