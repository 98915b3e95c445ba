//! Error types for CLI operations

use std::path::PathBuf;

use thiserror::Error;

use crate::serialization::SerializationError;

/// Errors reported by the command line tool
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    #[error("Failed to format output: {0}")]
    OutputError(String),
}
