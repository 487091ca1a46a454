//! mandatoryIf Core - Record model and directive parsing
//!
//! This crate provides the fundamental types used by the mandatoryIf validator:
//! - Record and field model (fields with nested children)
//! - Comparison operators
//! - Condition types and the `$mandatoryIf(...)` directive parser
//! - Error types

pub mod condition;
pub mod error;
pub mod record;

// Re-export commonly used types
pub use condition::{split_values, Condition, DirectiveParser, Operator};
pub use error::CoreError;
pub use record::{Field, Record};
