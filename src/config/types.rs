use serde::{Deserialize, Serialize};

use crate::error::SplitError;
use crate::output::CompressionLevel;
use crate::sheet::BoundsPolicy;

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

impl CompressConfig {
    /// Resolve to a validated compression level.
    pub fn level(&self) -> Result<CompressionLevel, SplitError> {
        match self {
            CompressConfig::Level(n) if *n <= 6 => Ok(CompressionLevel::Level(*n)),
            CompressConfig::Level(n) => Err(SplitError::InvalidCompression(n.to_string())),
            CompressConfig::Max(s) if s.eq_ignore_ascii_case("max") => Ok(CompressionLevel::Max),
            CompressConfig::Max(s) => Err(SplitError::InvalidCompression(s.clone())),
        }
    }
}

/// Splitter configuration.
///
/// The defaults reproduce the Minotaur sheet layout: 140x96 tiles across
/// 20 rows, written to `./split_animations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Sprite sheet to split
    pub input: String,
    /// Directory receiving `animation_row_N.png` files
    pub output_dir: String,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Number of rows to emit
    pub rows: u32,
    /// Derive the row count from the sheet height instead of `rows`
    pub derive_rows: bool,
    /// What to do with tiles reaching past the sheet edge
    pub bounds: BoundsPolicy,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
    /// Debug logging
    pub verbose: bool,
}

pub const DEFAULT_INPUT: &str = "./Minotaur - Sprite Sheet.png";
pub const DEFAULT_OUTPUT_DIR: &str = "./split_animations";
pub const DEFAULT_TILE_WIDTH: u32 = 140;
pub const DEFAULT_TILE_HEIGHT: u32 = 96;
pub const DEFAULT_ROWS: u32 = 20;

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            rows: DEFAULT_ROWS,
            derive_rows: false,
            bounds: BoundsPolicy::Transparent,
            compress: None,
            verbose: false,
        }
    }
}
