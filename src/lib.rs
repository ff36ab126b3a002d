pub mod config;
pub mod error;
pub mod output;
pub mod sheet;
pub mod splitter;
pub mod strip;

pub use config::{LoadedConfig, SplitConfig};
pub use error::SplitError;
pub use sheet::{BoundsPolicy, GridLayout, TileRect};
pub use splitter::{SplitReport, split_sheet};
