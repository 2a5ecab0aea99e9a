//! Error types for the chatbot indexer.
//!
//! Every fatal condition of a build run maps onto one variant
//! here. Discovery-scan failures are recovered inside the
//! locator and never surface as an error.

use thiserror::Error;

/// Result type alias for indexer operations
pub type Result<T> = std::result::Result<T, IndexerError>;

/// Main error type for the indexer
#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("No input files: {0}")]
    NoInputFiles(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IndexerError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a configuration or input error
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            IndexerError::NoInputFiles(_)
                | IndexerError::ConfigError(_)
                | IndexerError::TomlError(_)
        )
    }

    /// Check if this is a file system error
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            IndexerError::ReadFailed { .. }
                | IndexerError::WriteFailed { .. }
                | IndexerError::IoError(_)
        )
    }
}
