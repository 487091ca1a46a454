//! Unit tests for ValidatorConfig file loading

use mandatoryif_validator::{
    Field, InstanceFieldsValidator, MandatoryIfValidator, ValidatorConfig, ValidatorError,
};
use std::io::Write;

#[test]
fn test_load_config_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "directive: requiredIf")?;
    writeln!(file, "numeric_comparison: true")?;

    let config = ValidatorConfig::from_file(file.path())?;
    assert_eq!(config.directive, "requiredIf");
    assert!(config.numeric_comparison);

    let validator = MandatoryIfValidator::with_config(&config)?;
    let fields = vec![
        Field::new("Distance").with_value("9"),
        Field::new("Message").with_description("$requiredIf(Distance < 10)"),
    ];
    assert_eq!(validator.validate_instance_fields(&fields).len(), 1);

    Ok(())
}

#[test]
fn test_empty_directive_is_rejected() {
    let config = ValidatorConfig::new().with_directive("");

    let result = MandatoryIfValidator::with_config(&config);
    assert!(matches!(result, Err(ValidatorError::ConfigError(_))));
}

#[test]
fn test_default_config_ignores_enum_directive() -> anyhow::Result<()> {
    let validator = MandatoryIfValidator::with_config(&ValidatorConfig::default())?;
    let fields = vec![Field::new("User Type").with_description("$[Robot,User]")];

    assert!(validator.validate_instance_fields(&fields).is_empty());
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let result = ValidatorConfig::from_file("/nonexistent/validator.yaml");
    assert!(matches!(result, Err(ValidatorError::IoError(_))));
}

#[test]
fn test_load_invalid_yaml() {
    let result = ValidatorConfig::from_yaml_str("numeric_comparison: [not, a, bool]");
    assert!(matches!(result, Err(ValidatorError::YamlError(_))));
}

#[test]
fn test_empty_yaml_uses_defaults() -> anyhow::Result<()> {
    let config = ValidatorConfig::from_yaml_str("{}")?;
    assert_eq!(config, ValidatorConfig::default());
    Ok(())
}
