//! Record and field model
//!
//! A record is an ordered list of fields. Any field may own child fields,
//! which is how the host models groups and nested sub-records.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A single field of a record instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, used by conditions to reference this field
    pub name: String,

    /// Current value; `None` when the field was never filled in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Free-text description carrying directives such as `$number` or `$mandatoryIf(...)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Child fields (non-empty for group fields)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Field>,
}

impl Field {
    /// Create a field with no value, description or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the field value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the field description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the child fields
    pub fn with_children(mut self, children: Vec<Field>) -> Self {
        self.children = children;
        self
    }

    /// Value as a string slice, empty when absent
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// True when the value is absent or the empty string
    pub fn is_empty(&self) -> bool {
        self.value_str().is_empty()
    }

    /// True when the field owns child fields
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A record instance: the top-level fields handed to the validator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Record {
    /// Create a record from its top-level fields
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Parse a record from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a record from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
