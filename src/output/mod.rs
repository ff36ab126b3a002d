mod format;
mod naming;

pub use format::{CompressionLevel, save_png};
pub use naming::row_filename;
