//! CLI error types.

use randkit_core::RandomError;
use randkit_extras::ExtrasError;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Layered configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Table file is not valid TOML or has the wrong shape
    #[error("Table file error: {0}")]
    TableFormat(#[from] toml::de::Error),

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generator or table failure
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Dice or text failure
    #[error(transparent)]
    Extras(#[from] ExtrasError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid-argument error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
