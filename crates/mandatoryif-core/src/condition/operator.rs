//! Comparison operators for mandatoryIf conditions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
}

impl Operator {
    /// Symbol as written in a directive
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
        }
    }

    /// Returns true for the ordering operators, which compare against a single value
    pub fn is_range(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbol() {
        assert_eq!(Operator::Eq.symbol(), "=");
        assert_eq!(Operator::Ne.symbol(), "!=");
        assert_eq!(Operator::Le.to_string(), "<=");
        assert_eq!(Operator::Gt.to_string(), ">");
    }

    #[test]
    fn test_operator_is_range() {
        assert!(Operator::Lt.is_range());
        assert!(Operator::Ge.is_range());
        assert!(!Operator::Eq.is_range());
        assert!(!Operator::Ne.is_range());
    }
}
