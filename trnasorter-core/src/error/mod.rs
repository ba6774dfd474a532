//! Core error types for trnasorter

use thiserror::Error;

/// Main error type for sorter operations
#[derive(Error, Debug)]
pub enum SorterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for sorter operations
pub type SorterResult<T> = Result<T, SorterError>;

impl From<toml::de::Error> for SorterError {
    fn from(err: toml::de::Error) -> Self {
        SorterError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for SorterError {
    fn from(err: toml::ser::Error) -> Self {
        SorterError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
