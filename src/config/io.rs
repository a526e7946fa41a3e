// src/config/io.rs
use std::fs;
use std::path::Path;

use super::Config;
use crate::error::{DepGraphError, Result};

/// Reads a config file. Missing keys fall back to defaults.
pub(super) fn load_toml(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| DepGraphError::io(e, path))?;
    parse_toml(&content)
        .map_err(|e| DepGraphError::InvalidConfig(format!("{}: {e}", path.display())))
}

pub(super) fn parse_toml(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Writes the config as TOML.
pub(super) fn save_toml(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| DepGraphError::InvalidConfig(format!("cannot serialize config: {e}")))?;
    fs::write(path, content).map_err(|e| DepGraphError::io(e, path))
}
