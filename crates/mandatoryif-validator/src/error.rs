//! Validator error types
//!
//! These cover setting the validator up. Validation itself never fails; it
//! reports violations as [`crate::ValidationError`] values instead.

use thiserror::Error;

/// Validator error type
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid YAML configuration
    #[error("Invalid configuration YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Record could not be read
    #[error("Record error: {0}")]
    RecordError(#[from] mandatoryif_core::CoreError),
}

/// Result type for validator operations
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = ValidatorError::ConfigError("directive keyword is empty".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("directive keyword is empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: ValidatorError = io_error.into();
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_record_error_conversion() {
        let core_error = mandatoryif_core::Record::from_json("[").unwrap_err();
        let error: ValidatorError = core_error.into();
        assert!(error.to_string().starts_with("Record error"));
    }
}
