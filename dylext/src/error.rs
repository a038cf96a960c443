//! Error handling module for the dylext CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the dylext CLI application.
#[derive(Error, Debug)]
pub enum DylextError {
    /// Configuration could not be found, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input or output file could not be used.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Command-line or configuration values are inconsistent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DylextError.
pub type Result<T> = std::result::Result<T, DylextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DylextError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = DylextError::FileOperation("cannot read a.dylan".to_string());
        assert_eq!(err.to_string(), "File operation failed: cannot read a.dylan");
    }

    #[test]
    fn test_validation_error_display() {
        let err = DylextError::Validation("tab_size must be positive".to_string());
        assert_eq!(err.to_string(), "Validation error: tab_size must be positive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DylextError = io_err.into();
        assert!(matches!(err, DylextError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: DylextError = json_err.into();
        assert!(matches!(err, DylextError::Json(_)));
    }
}
