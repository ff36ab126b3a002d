use image::{RgbaImage, imageops};
use serde::{Deserialize, Serialize};

use super::TileRect;
use crate::error::SplitError;

/// How to treat a tile rectangle that reaches past the sheet edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Copy the visible part, leave the rest fully transparent
    #[default]
    Transparent,
    /// Fail the run
    Error,
}

/// Copy one grid cell out of the sheet.
///
/// The result is always `rect.width` x `rect.height`. Pixels are copied
/// verbatim; nothing is resampled.
pub fn crop_tile(
    sheet: &RgbaImage,
    rect: TileRect,
    row: u32,
    column: u32,
    policy: BoundsPolicy,
) -> Result<RgbaImage, SplitError> {
    let (sheet_width, sheet_height) = sheet.dimensions();

    if rect.fits_within(sheet_width, sheet_height) {
        return Ok(
            imageops::crop_imm(sheet, rect.left, rect.top, rect.width, rect.height).to_image(),
        );
    }

    match policy {
        BoundsPolicy::Error => Err(SplitError::TileOutOfBounds {
            row,
            column,
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
            sheet_width,
            sheet_height,
        }),
        BoundsPolicy::Transparent => {
            let mut tile = RgbaImage::new(rect.width, rect.height);

            if rect.left < sheet_width && rect.top < sheet_height {
                let visible_width = rect.width.min(sheet_width - rect.left);
                let visible_height = rect.height.min(sheet_height - rect.top);
                let visible =
                    imageops::crop_imm(sheet, rect.left, rect.top, visible_width, visible_height)
                        .to_image();
                imageops::replace(&mut tile, &visible, 0, 0);
            }

            Ok(tile)
        }
    }
}
