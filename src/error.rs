//! Error types for descriptor resolution.
//!
//! This module defines all error types for resolving the packaging
//! descriptor and assembling the bundle configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for descriptor operations
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Main error type for all descriptor operations
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// The descriptor location or the configuration built from it is unusable
    #[error("configuration error: {reason}")]
    Configuration {
        /// Reason for the error
        reason: String,
    },

    /// The descriptor path has no enclosing directory to derive roots from
    #[error("descriptor location {path:?} has no parent directory")]
    OrphanLocation {
        /// Path that could not be resolved
        path: PathBuf,
    },

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
