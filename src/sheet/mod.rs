mod grid;
mod loader;
mod tile;

pub use grid::{GridLayout, TileRect};
pub use loader::load_sheet;
pub use tile::{BoundsPolicy, crop_tile};
