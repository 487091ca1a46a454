//! Error types for mandatoryIf Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid record JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid record YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
