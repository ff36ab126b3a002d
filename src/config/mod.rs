mod load;
mod types;

pub use load::{CONFIG_FILE_NAME, LoadedConfig};
pub use types::{
    CompressConfig, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_ROWS, DEFAULT_TILE_HEIGHT,
    DEFAULT_TILE_WIDTH, SplitConfig,
};
