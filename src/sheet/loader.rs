use std::path::Path;

use anyhow::Result;
use image::{ImageReader, RgbaImage};
use log::debug;

use crate::error::SplitError;

/// Decode a sprite sheet into an RGBA raster, whatever its source color format.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SplitError::InputNotFound(path.to_path_buf()).into());
    }

    let sheet = ImageReader::open(path)
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SplitError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    debug!(
        "Decoded {} ({}x{})",
        path.display(),
        sheet.width(),
        sheet.height()
    );

    Ok(sheet)
}
