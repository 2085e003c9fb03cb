//! Error types for bootstrap operations.
//!
//! This module defines [`BootstrapError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Negative outcomes the operator can act on (declined prompt, no package
//!   manager, missing `package.json`) are ordinary values, not errors. See
//!   [`ProvisionOutcome`](crate::provision::ProvisionOutcome) and
//!   [`DependencyOutcome`](crate::dependencies::DependencyOutcome).
//! - `BootstrapError` is reserved for execution failures: a checked command
//!   exiting non-zero, a program that cannot be spawned, console I/O.
//! - Use `anyhow::Error` (via `BootstrapError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bootstrap operations.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A checked command exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A command could not be started at all.
    #[error("Could not run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The project manifest is missing.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for bootstrap operations.
pub type Result<T> = std::result::Result<T, BootstrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = BootstrapError::CommandFailed {
            command: "sudo apt-get update".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("sudo apt-get update"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn command_failed_without_code() {
        let err = BootstrapError::CommandFailed {
            command: "npm install".into(),
            code: None,
        };
        assert!(err.to_string().contains("None"));
    }

    #[test]
    fn command_spawn_displays_command_and_cause() {
        let err = BootstrapError::CommandSpawn {
            command: "brew install node".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew install node"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn manifest_not_found_displays_path() {
        let err = BootstrapError::ManifestNotFound {
            path: PathBuf::from("/srv/app/package.json"),
        };
        assert!(err.to_string().contains("/srv/app/package.json"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: BootstrapError = io_err.into();
        assert!(matches!(err, BootstrapError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: BootstrapError = anyhow::anyhow!("executable has no parent").into();
        assert_eq!(err.to_string(), "executable has no parent");
    }
}
