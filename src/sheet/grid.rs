use log::warn;

use crate::error::SplitError;

/// Pixel rectangle of one grid cell on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl TileRect {
    /// Exclusive right edge
    pub fn right(&self) -> u32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// True if the rectangle lies entirely within a `width` x `height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

/// Uniform tile grid laid over a sprite sheet.
///
/// Columns come from the sheet width; any remainder narrower than a tile
/// is ignored. Rows are not tied to the sheet height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub tile_width: u32,
    pub tile_height: u32,
    pub columns: u32,
}

impl GridLayout {
    pub fn new(tile_width: u32, tile_height: u32, sheet_width: u32) -> Result<Self, SplitError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(SplitError::InvalidTileSize {
                width: tile_width,
                height: tile_height,
            });
        }

        let columns = sheet_width / tile_width;
        if columns == 0 {
            return Err(SplitError::SheetTooNarrow {
                sheet_width,
                tile_width,
            });
        }

        Ok(Self {
            tile_width,
            tile_height,
            columns,
        })
    }

    /// Width of one composed row strip
    pub fn strip_width(&self) -> u32 {
        self.tile_width * self.columns
    }

    /// Number of whole tile rows that fit in a sheet of the given height
    pub fn rows_in_sheet(&self, sheet_height: u32) -> u32 {
        sheet_height / self.tile_height
    }

    /// Decide how many rows to emit.
    ///
    /// Uses the sheet height when `derive` is set, `requested` otherwise.
    /// Rows past the bottom edge are allowed but logged.
    pub fn rows_for_sheet(&self, requested: u32, derive: bool, sheet_height: u32) -> u32 {
        let available = self.rows_in_sheet(sheet_height);
        let rows = if derive { available } else { requested };

        if u64::from(rows) * u64::from(self.tile_height) > u64::from(sheet_height) {
            warn!(
                "Requested {} rows of {}px but the sheet is {}px tall ({} whole rows); \
                 rows past the edge will be cropped out of bounds",
                rows, self.tile_height, sheet_height, available
            );
        }

        rows
    }

    /// Rectangle of the cell at (`row`, `column`)
    pub fn tile_rect(&self, row: u32, column: u32) -> TileRect {
        TileRect {
            left: column.saturating_mul(self.tile_width),
            top: row.saturating_mul(self.tile_height),
            width: self.tile_width,
            height: self.tile_height,
        }
    }
}
