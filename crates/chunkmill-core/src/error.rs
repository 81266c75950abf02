//! Error types for chunkmill

use thiserror::Error;

/// Result type alias using ChunkmillError
pub type Result<T> = std::result::Result<T, ChunkmillError>;

/// Error type alias for convenience
pub type Error = ChunkmillError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const STORAGE_ERROR: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for chunkmill
#[derive(Debug, Error)]
pub enum ChunkmillError {
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChunkmillError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::Config(_) => exit_codes::INVALID_INPUT,
            Self::Storage(_) => exit_codes::STORAGE_ERROR,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
