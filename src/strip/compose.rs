use image::{RgbaImage, imageops};

use crate::sheet::GridLayout;

/// Lay a row's tiles out left to right in a fresh transparent strip.
///
/// The strip is `grid.strip_width()` x `grid.tile_height`. Tile `i` lands at
/// `(i * tile_width, 0)`. Pixels replace the transparent background as-is,
/// alpha included.
pub fn compose_row(tiles: &[RgbaImage], grid: &GridLayout) -> RgbaImage {
    let mut strip = RgbaImage::new(grid.strip_width(), grid.tile_height);

    let mut x = 0i64;
    for tile in tiles {
        imageops::replace(&mut strip, tile, x, 0);
        x += i64::from(grid.tile_width);
    }

    strip
}
