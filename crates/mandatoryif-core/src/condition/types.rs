//! Condition types for mandatoryIf directives

use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed `$mandatoryIf` condition
///
/// A condition without a target or without an operator is unconditional:
/// the field carrying it is always mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Name of the field whose value drives the requirement
    pub target: Option<String>,
    /// Comparison operator
    pub operator: Option<Operator>,
    /// Comparison literals, already split and unescaped
    #[serde(default)]
    pub values: Vec<String>,
}

impl Condition {
    /// Create a condition comparing `target` against `values`
    pub fn new(target: impl Into<String>, operator: Operator, values: Vec<String>) -> Self {
        Self {
            target: Some(target.into()),
            operator: Some(operator),
            values,
        }
    }

    /// Create a condition that always holds (plain `$mandatoryIf`)
    pub fn unconditional() -> Self {
        Self::default()
    }

    pub fn is_unconditional(&self) -> bool {
        self.target.is_none() || self.operator.is_none()
    }

    /// First comparison literal, the only one range operators look at
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.target, &self.operator) {
            (Some(target), Some(operator)) => {
                write!(f, "{} {} {}", target, operator, self.values.join(", "))
            }
            _ => f.write_str("always"),
        }
    }
}
