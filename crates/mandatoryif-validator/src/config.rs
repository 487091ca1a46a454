//! Configuration types for MandatoryIfValidator

use crate::error::{Result, ValidatorError};
use mandatoryif_core::condition::DEFAULT_DIRECTIVE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Directive keyword, written as `$<directive>` in descriptions
    pub directive: String,

    /// Compare numerically when both sides parse as numbers
    pub numeric_comparison: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            directive: DEFAULT_DIRECTIVE.to_string(),
            numeric_comparison: true,
        }
    }
}

impl ValidatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directive keyword
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }

    /// Enable or disable numeric comparison for range operators
    pub fn with_numeric_comparison(mut self, enabled: bool) -> Self {
        self.numeric_comparison = enabled;
        self
    }

    /// Parse a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let directive = self.directive.trim();
        if directive.is_empty() {
            return Err(ValidatorError::ConfigError(
                "directive keyword must not be empty".to_string(),
            ));
        }
        if directive.starts_with('$') || directive.contains(|c: char| c == '(' || c == ')') {
            return Err(ValidatorError::ConfigError(format!(
                "directive keyword '{}' must not contain '$' or parentheses",
                self.directive
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.directive, "mandatoryIf");
        assert!(config.numeric_comparison);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ValidatorConfig::new()
            .with_directive("requiredIf")
            .with_numeric_comparison(false);

        assert_eq!(config.directive, "requiredIf");
        assert!(!config.numeric_comparison);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = ValidatorConfig::from_yaml_str("numeric_comparison: false\n").unwrap();
        assert_eq!(config.directive, "mandatoryIf");
        assert!(!config.numeric_comparison);
    }

    #[test]
    fn test_invalid_directive() {
        assert!(ValidatorConfig::from_yaml_str("directive: \"\"\n").is_err());
        assert!(ValidatorConfig::from_yaml_str("directive: \"$mandatoryIf\"\n").is_err());
    }
}
