//! mandatoryIf field validation
//!
//! Walks a record's fields, and for every field carrying the directive checks
//! that it is filled in whenever its condition holds.

use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::evaluator::ConditionEvaluator;
use crate::resolver;
use mandatoryif_core::{Condition, DirectiveParser, Field, Operator, Record};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Validation error reported for a field that must be filled in
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Field carries a bare `$mandatoryIf`
    #[error("Field '{field}' is required")]
    Mandatory { field: String },

    /// Field's condition holds against its target field
    #[error("Field '{field}' is required because '{target}' {operator} '{values}'")]
    MandatoryIf {
        field: String,
        target: String,
        operator: Operator,
        values: String,
    },
}

impl ValidationError {
    /// Build the error for `field` given the condition that made it required
    pub fn for_condition(field: &str, condition: &Condition) -> Self {
        match (&condition.target, condition.operator) {
            (Some(target), Some(operator)) => ValidationError::MandatoryIf {
                field: field.to_string(),
                target: target.clone(),
                operator,
                values: condition.values.join(", "),
            },
            _ => ValidationError::Mandatory {
                field: field.to_string(),
            },
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Mandatory { field } | ValidationError::MandatoryIf { field, .. } => {
                field
            }
        }
    }
}

/// Validator hook the host calls with a record instance's fields
pub trait InstanceFieldsValidator {
    /// Validate the fields, returning every violation found (empty when valid)
    fn validate_instance_fields(&self, fields: &[Field]) -> Vec<ValidationError>;
}

/// Validator for `$mandatoryIf` directives
#[derive(Debug, Clone, Default)]
pub struct MandatoryIfValidator {
    parser: DirectiveParser,
    evaluator: ConditionEvaluator,
}

impl MandatoryIfValidator {
    /// Create a validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator from configuration
    ///
    /// Fails when the configuration does not pass [`ValidatorConfig::validate`].
    pub fn with_config(config: &ValidatorConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            parser: DirectiveParser::with_keyword(config.directive.trim()),
            evaluator: ConditionEvaluator::new().with_numeric_comparison(config.numeric_comparison),
        })
    }

    /// Validate every field of a record
    pub fn validate_record(&self, record: &Record) -> Vec<ValidationError> {
        self.validate_instance_fields(&record.fields)
    }

    /// Returns true if `field` is currently required, looking targets up in `fields`
    ///
    /// Fields without the directive are never required by this validator.
    pub fn is_required(&self, field: &Field, fields: &[Field]) -> bool {
        let Some(condition) = self.condition_of(field) else {
            return false;
        };
        let flattened = resolver::flatten(fields);
        self.condition_holds(&condition, &flattened)
    }

    fn condition_of(&self, field: &Field) -> Option<Condition> {
        field
            .description
            .as_deref()
            .and_then(|description| self.parser.parse(description))
    }

    fn condition_holds(&self, condition: &Condition, flattened: &[&Field]) -> bool {
        let Some(target_name) = condition.target.as_deref() else {
            return self.evaluator.evaluate(condition, None);
        };

        match resolver::find_field(flattened, target_name) {
            Some(target) => self.evaluator.evaluate(condition, target.value.as_deref()),
            None => {
                debug!(target = %target_name, "Target field not found, condition is false");
                false
            }
        }
    }
}

impl InstanceFieldsValidator for MandatoryIfValidator {
    fn validate_instance_fields(&self, fields: &[Field]) -> Vec<ValidationError> {
        let flattened = resolver::flatten(fields);
        let mut errors = Vec::new();

        for field in &flattened {
            let Some(condition) = self.condition_of(field) else {
                continue;
            };

            if !self.condition_holds(&condition, &flattened) {
                continue;
            }

            if field.is_empty() {
                debug!(field = %field.name, condition = %condition, "Required field is empty");
                errors.push(ValidationError::for_condition(&field.name, &condition));
            }
        }

        errors
    }
}
