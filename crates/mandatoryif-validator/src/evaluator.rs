//! Condition evaluation
//!
//! Decides whether a field is required given its parsed condition and the
//! current value of the target field.

use mandatoryif_core::{Condition, Operator};
use std::cmp::Ordering;

/// Evaluates parsed conditions against a target value
#[derive(Debug, Clone)]
pub struct ConditionEvaluator {
    numeric_comparison: bool,
}

impl Default for ConditionEvaluator {
    fn default() -> Self {
        Self {
            numeric_comparison: true,
        }
    }
}

impl ConditionEvaluator {
    /// Create an evaluator with numeric comparison enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable numeric comparison for range operators
    pub fn with_numeric_comparison(mut self, enabled: bool) -> Self {
        self.numeric_comparison = enabled;
        self
    }

    /// Returns true if the field carrying `condition` is required
    ///
    /// `target_value` is the current value of the target field; `None` and
    /// the empty string are both treated as empty.
    pub fn evaluate(&self, condition: &Condition, target_value: Option<&str>) -> bool {
        let Some(operator) = condition.operator else {
            return true;
        };
        if condition.target.is_none() {
            return true;
        }

        let value = target_value.unwrap_or_default();
        let matches_any = || condition.values.iter().any(|v| v == value);

        match operator {
            Operator::Eq => (value.is_empty() && condition.values.is_empty()) || matches_any(),
            Operator::Ne => !value.is_empty() && !matches_any(),
            Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => {
                // Empty values never satisfy an ordering
                let Some(literal) = condition.first_value() else {
                    return false;
                };
                if value.is_empty() {
                    return false;
                }

                let ordering = self.compare(value, literal);
                match operator {
                    Operator::Gt => ordering == Ordering::Greater,
                    Operator::Ge => ordering != Ordering::Less,
                    Operator::Lt => ordering == Ordering::Less,
                    _ => ordering != Ordering::Greater,
                }
            }
        }
    }

    /// Numeric ordering when both sides are numbers, code-point ordering otherwise
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        if self.numeric_comparison {
            if let (Some(l), Some(r)) = (parse_number(left), parse_number(right)) {
                // Both finite, so partial_cmp always succeeds
                return l.partial_cmp(&r).unwrap_or(Ordering::Equal);
            }
        }
        left.cmp(right)
    }
}

/// Parse a decimal number, rejecting NaN and infinities
fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}
