// src/config/mod.rs
mod io;
pub mod types;

pub use self::types::Config;

use std::path::{Path, PathBuf};

use crate::error::{DepGraphError, Result};
use crate::output::OutputOptions;

/// Config file picked up from the working directory.
pub const CONFIG_FILE: &str = "depgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `depgraph.toml` from the working directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the file exists but is not valid TOML.
    pub fn load_local() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new());
        }
        Self::load_file(path)
    }

    /// Loads a specific config file.
    ///
    /// # Errors
    /// Returns `NotFound` if the file is missing, `InvalidConfig` if it does
    /// not parse.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DepGraphError::NotFound {
                path: path.to_path_buf(),
            });
        }
        io::load_toml(path)
    }

    /// Parses config from a TOML string.
    ///
    /// # Errors
    /// Returns `InvalidConfig` on syntax or type errors.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse_toml(content).map_err(|e| DepGraphError::InvalidConfig(e.to_string()))
    }

    /// Writes the configuration to `path`.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_toml(self, path)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a zero package count or empty output names.
    pub fn validate(&self) -> Result<()> {
        if self.top_packages == 0 {
            return Err(DepGraphError::InvalidConfig(
                "top_packages must be at least 1".into(),
            ));
        }
        if self.nodes_file.trim().is_empty() || self.edges_file.trim().is_empty() {
            return Err(DepGraphError::InvalidConfig(
                "output file names must not be empty".into(),
            ));
        }
        if self.nodes_file == self.edges_file {
            return Err(DepGraphError::InvalidConfig(
                "nodes and edges must go to different files".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn nodes_path(&self) -> PathBuf {
        self.output_dir.join(&self.nodes_file)
    }

    #[must_use]
    pub fn edges_path(&self) -> PathBuf {
        self.output_dir.join(&self.edges_file)
    }

    #[must_use]
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            nodes_path: self.nodes_path(),
            edges_path: self.edges_path(),
            pretty: self.pretty,
        }
    }
}
