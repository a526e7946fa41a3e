// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepGraphError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Malformed input in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid requirement {requirement:?}: {reason}")]
    InvalidRequirement {
        requirement: String,
        reason: &'static str,
    },

    #[error("Package '{package}' has an unparsable requirement {requirement:?}: {reason}")]
    UnparsableRequirement {
        package: String,
        requirement: String,
        reason: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl DepGraphError {
    /// True for errors caused by the input data rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::Malformed { .. }
                | Self::InvalidRequirement { .. }
                | Self::UnparsableRequirement { .. }
        )
    }

    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DepGraphError>;
