//! mandatoryIf Validator
//!
//! Checks that fields marked with `$mandatoryIf(...)` are filled in whenever
//! their condition holds.
//!
//! # Example
//!
//! ```rust
//! use mandatoryif_core::Field;
//! use mandatoryif_validator::{InstanceFieldsValidator, MandatoryIfValidator};
//!
//! let fields = vec![
//!     Field::new("User Type").with_description("$[Robot,User]").with_value("User"),
//!     Field::new("Address").with_description("$mandatoryIf(User Type=User)"),
//! ];
//!
//! let errors = MandatoryIfValidator::new().validate_instance_fields(&fields);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].field(), "Address");
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod resolver;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::{Result, ValidatorError};
pub use evaluator::ConditionEvaluator;
pub use validator::{InstanceFieldsValidator, MandatoryIfValidator, ValidationError};

// Re-export core types for convenience
pub use mandatoryif_core::{Condition, DirectiveParser, Field, Operator, Record};
