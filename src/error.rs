use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the process model
#[derive(Debug, Error)]
pub enum ModelError {
    /// A root or otherwise invalid handle was used where a cell is required
    #[error("Invalid model index")]
    InvalidIndex,

    /// Handle refers to a row that no longer exists
    #[error("Stale model index: row {row} of {rows}")]
    StaleIndex { row: usize, rows: usize },

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration parsing failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is invalid
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },
}

impl ModelError {
    /// Create a stale index error
    pub fn stale_index(row: usize, rows: usize) -> Self {
        ModelError::StaleIndex { row, rows }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        ModelError::Config {
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: PathBuf) -> Self {
        ModelError::ConfigNotFound { path }
    }

    /// Create a config invalid error
    pub fn config_invalid(path: PathBuf, reason: impl Into<String>) -> Self {
        ModelError::ConfigInvalid {
            path,
            reason: reason.into(),
        }
    }
}

/// Result type alias for process model operations
pub type Result<T> = std::result::Result<T, ModelError>;

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        ModelError::Config {
            message: err.to_string(),
        }
    }
}
