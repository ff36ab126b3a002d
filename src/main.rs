use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use sheetsplit::config::{CONFIG_FILE_NAME, LoadedConfig};
use sheetsplit::split_sheet;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Logger may not be initialized if config loading failed
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let loaded = LoadedConfig::discover(Path::new("."))
        .with_context(|| format!("failed to load {}", CONFIG_FILE_NAME))?;

    env_logger::Builder::new()
        .filter_level(if loaded.config.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("sheetsplit v{}", env!("CARGO_PKG_VERSION"));

    let report = split_sheet(&loaded)?;
    info!(
        "Animations have been successfully split and saved ({} files from a {}x{} sheet, {} columns)",
        report.outputs.len(),
        report.sheet_width,
        report.sheet_height,
        report.grid.columns
    );

    Ok(())
}
