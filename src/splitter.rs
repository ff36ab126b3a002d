use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use image::RgbaImage;
use log::{debug, info};

use crate::config::LoadedConfig;
use crate::error::SplitError;
use crate::output::{CompressionLevel, row_filename, save_png};
use crate::sheet::{BoundsPolicy, GridLayout, crop_tile, load_sheet};
use crate::strip::compose_row;

/// Outcome of a completed split
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Source sheet width
    pub sheet_width: u32,
    /// Source sheet height
    pub sheet_height: u32,
    /// Grid the sheet was cut along
    pub grid: GridLayout,
    /// Strips written, in row order
    pub outputs: Vec<PathBuf>,
}

/// Crop one row's tiles and compose them into a strip.
fn compose_sheet_row(
    sheet: &RgbaImage,
    grid: &GridLayout,
    row: u32,
    policy: BoundsPolicy,
) -> Result<RgbaImage, SplitError> {
    let tiles = (0..grid.columns)
        .map(|column| crop_tile(sheet, grid.tile_rect(row, column), row, column, policy))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(compose_row(&tiles, grid))
}

/// Load the sheet, then write one `animation_row_N.png` per row into the output directory.
///
/// Files written before a failure are left in place.
pub fn split_sheet(loaded: &LoadedConfig) -> Result<SplitReport> {
    let config = &loaded.config;
    let input = loaded.resolve_input();
    let output_dir = loaded.resolve_output_dir();

    let compress: Option<CompressionLevel> =
        config.compress.as_ref().map(|c| c.level()).transpose()?;

    let sheet = load_sheet(&input)?;
    let (sheet_width, sheet_height) = sheet.dimensions();

    let grid = GridLayout::new(config.tile_width, config.tile_height, sheet_width)?;
    let rows = grid.rows_for_sheet(config.rows, config.derive_rows, sheet_height);

    info!(
        "Splitting {} ({}x{}) into {} rows of {} {}x{} tiles",
        input.display(),
        sheet_width,
        sheet_height,
        rows,
        grid.columns,
        grid.tile_width,
        grid.tile_height
    );

    fs::create_dir_all(&output_dir).map_err(|e| SplitError::OutputDir {
        path: output_dir.clone(),
        source: e,
    })?;

    let mut outputs = Vec::new();
    for row in 0..rows {
        let strip = compose_sheet_row(&sheet, &grid, row, config.bounds)?;
        debug!("Row {}: {}x{} strip", row + 1, strip.width(), strip.height());

        let path = output_dir.join(row_filename(row));
        save_png(&strip, &path, compress)?;
        info!("Saved {}", path.display());

        outputs.push(path);
    }

    Ok(SplitReport {
        sheet_width,
        sheet_height,
        grid,
        outputs,
    })
}
