use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Tile size must be non-zero, got {width}x{height}")]
    InvalidTileSize { width: u32, height: u32 },

    #[error("Sheet width {sheet_width} is narrower than one tile ({tile_width})")]
    SheetTooNarrow { sheet_width: u32, tile_width: u32 },

    #[error(
        "Tile at row {row}, column {column} ({left},{top} {width}x{height}) lies outside the \
         {sheet_width}x{sheet_height} sheet"
    )]
    TileOutOfBounds {
        row: u32,
        column: u32,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("Invalid compression level '{0}': expected 0-6 or 'max'")]
    InvalidCompression(String),
}
