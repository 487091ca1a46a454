//! Unit tests for CliConfig loading

use mandatoryif_cli::{check_record, CliConfig};
use std::io::Write;

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_load_from_yaml_file() {
    let file = config_file(
        r#"
pretty: true
validator:
  directive: requiredIf
  numeric_comparison: false
"#,
    );

    let config = CliConfig::load_from(file.path()).unwrap();

    assert!(config.pretty);
    assert_eq!(config.validator.directive, "requiredIf");
    assert!(!config.validator.numeric_comparison);
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let file = config_file("pretty: true\n");

    let config = CliConfig::load_from(file.path()).unwrap();

    assert!(config.pretty);
    assert_eq!(config.validator.directive, "mandatoryIf");
    assert!(config.validator.numeric_comparison);
}

#[test]
fn test_load_rejects_invalid_directive() {
    let file = config_file("validator:\n  directive: \"$bad\"\n");

    let err = CliConfig::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_loaded_config_drives_validation() {
    let file = config_file("validator:\n  numeric_comparison: false\n");
    let config = CliConfig::load_from(file.path()).unwrap();

    let record = r#"{
        "fields": [
            {"name": "Distance", "value": "9"},
            {"name": "Message", "description": "$mandatoryIf(Distance < 10)"}
        ]
    }"#;

    // Text comparison: "9" sorts after "10"
    assert!(check_record(record, None, &config).unwrap().is_empty());
    assert_eq!(
        check_record(record, None, &CliConfig::default()).unwrap().len(),
        1
    );
}
