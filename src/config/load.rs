use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::SplitConfig;

/// Name of the optional config file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "sheetsplit.json";

/// A configuration with the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration
    pub config: SplitConfig,
    /// The directory containing the config file
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Built-in constants, resolved against the working directory.
    pub fn builtin() -> Self {
        Self {
            config: SplitConfig::default(),
            config_dir: PathBuf::from("."),
        }
    }

    /// Load a config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: SplitConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        let config_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, config_dir })
    }

    /// Load `sheetsplit.json` from `dir` if present, otherwise the built-in constants.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::builtin())
        }
    }

    /// Resolve the sprite sheet path relative to the config file directory.
    pub fn resolve_input(&self) -> PathBuf {
        self.config_dir.join(&self.config.input)
    }

    /// Resolve the output directory relative to the config file directory.
    pub fn resolve_output_dir(&self) -> PathBuf {
        self.config_dir.join(&self.config.output_dir)
    }
}
