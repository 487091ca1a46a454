//! Record checking and violation reports

use crate::config::CliConfig;
use mandatoryif_core::Record;
use mandatoryif_validator::{InstanceFieldsValidator, MandatoryIfValidator, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A violation as printed by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl From<&ValidationError> for Violation {
    fn from(error: &ValidationError) -> Self {
        Self {
            field: error.field().to_string(),
            message: error.to_string(),
        }
    }
}

/// Parse a record and validate it
///
/// `source` picks the format: `.yaml`/`.yml` paths are read as YAML,
/// everything else (including stdin) as JSON.
pub fn check_record(
    content: &str,
    source: Option<&Path>,
    config: &CliConfig,
) -> anyhow::Result<Vec<Violation>> {
    let is_yaml = source
        .and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let record = if is_yaml {
        Record::from_yaml(content)?
    } else {
        Record::from_json(content)?
    };

    let validator = MandatoryIfValidator::with_config(&config.validator)?;
    let errors = validator.validate_instance_fields(&record.fields);
    tracing::debug!(
        fields = record.fields.len(),
        violations = errors.len(),
        "Record validated"
    );

    Ok(errors.iter().map(Violation::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "fields": [
            {"name": "User Type", "description": "$[Robot,User]", "value": "User"},
            {"name": "Address", "description": "$mandatoryIf(User Type=User)"}
        ]
    }"#;

    #[test]
    fn test_check_json_record() {
        let violations = check_record(RECORD, None, &CliConfig::default()).unwrap();

        assert_eq!(
            violations,
            vec![Violation {
                field: "Address".to_string(),
                message: "Field 'Address' is required because 'User Type' = 'User'".to_string(),
            }]
        );
    }

    #[test]
    fn test_check_yaml_record() {
        let yaml = r#"
fields:
  - name: Address
    description: "$mandatoryIf"
"#;
        let violations =
            check_record(yaml, Some(Path::new("record.yml")), &CliConfig::default()).unwrap();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Field 'Address' is required");
    }

    #[test]
    fn test_check_invalid_record() {
        assert!(check_record("not json", None, &CliConfig::default()).is_err());
    }
}
