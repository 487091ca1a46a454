//! mandatoryIf command-line runner
//!
//! Validates a record read from JSON or YAML and reports the violations.

pub mod config;
pub mod report;

pub use crate::config::CliConfig;
pub use crate::report::{check_record, Violation};
