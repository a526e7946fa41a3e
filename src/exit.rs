// src/exit.rs
//! Standardized process exit codes for `depgraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::DepGraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DepGraphExit {
    /// Graph built and written.
    Success = 0,
    /// Generic error (e.g. IO while writing output).
    Error = 1,
    /// Input validation failed (missing file, malformed JSON, bad requirement).
    InvalidInput = 2,
    /// Configuration rejected before any input was read.
    InvalidConfig = 3,
}

impl DepGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run by looking for a library error in the chain.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        let Some(inner) = err.chain().find_map(|e| e.downcast_ref::<DepGraphError>()) else {
            return Self::Error;
        };
        match inner {
            DepGraphError::InvalidConfig(_) => Self::InvalidConfig,
            e if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for DepGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<()>> for DepGraphExit {
    fn from(res: anyhow::Result<()>) -> Self {
        match res {
            Ok(()) => Self::Success,
            Err(e) => Self::for_error(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_is_invalid_input() {
        let err: anyhow::Result<()> = Err(DepGraphError::NotFound {
            path: PathBuf::from("res/packages.json"),
        })
        .context("loading registry");
        assert_eq!(DepGraphExit::from(err), DepGraphExit::InvalidInput);
    }

    #[test]
    fn test_config_error_code() {
        let err = anyhow::Error::new(DepGraphError::InvalidConfig("zero".into()));
        assert_eq!(DepGraphExit::for_error(&err).code(), 3);
    }

    #[test]
    fn test_foreign_error_is_generic() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(DepGraphExit::for_error(&err), DepGraphExit::Error);
        assert_eq!(DepGraphExit::from(Ok(())), DepGraphExit::Success);
    }
}
