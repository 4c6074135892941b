//! Numeric predicates over an integer attribute (stack count, damage).
//!
//! A predicate value is tried as a condition string first. If it is not one,
//! it falls back to threshold mode: a bare JSON number `n` means
//! `value >= n`, a percentage string `"p%"` means `value / max >= p / 100`.
//! Anything else never holds.

use std::fmt;

use serde_json::Value as JsonValue;

use crate::json;
use crate::parse::parse_percentage;
use crate::Condition;

/// A numeric predicate with its evaluation mode decided up front.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericPredicate {
    /// A parsed condition string such as `">3 & <10"`.
    Condition(Condition),
    /// A bare number: the attribute must be at least this.
    AtLeast(i64),
    /// A percentage of the attribute's maximum, e.g. `50.0` for `"50%"`.
    Percentage(f32),
    /// Any other shape. Never holds.
    Malformed,
}

impl NumericPredicate {
    /// Decide the evaluation mode for a predicate value.
    #[must_use]
    pub fn from_pattern(pattern: &JsonValue) -> Self {
        match pattern {
            JsonValue::String(text) => {
                if let Ok(condition) = Condition::parse(text) {
                    NumericPredicate::Condition(condition)
                } else if let Ok(percent) = parse_percentage(text) {
                    NumericPredicate::Percentage(percent)
                } else {
                    NumericPredicate::Malformed
                }
            }
            JsonValue::Number(_) => json::as_integer(pattern)
                .map_or(NumericPredicate::Malformed, NumericPredicate::AtLeast),
            _ => NumericPredicate::Malformed,
        }
    }

    /// Evaluate against `value`, with `max` as the denominator for percentages.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, value: i32, max: i32) -> bool {
        match self {
            NumericPredicate::Condition(condition) => condition.evaluate(value),
            NumericPredicate::AtLeast(threshold) => i64::from(value) >= *threshold,
            NumericPredicate::Percentage(percent) => {
                value as f32 / max as f32 >= *percent / 100.0
            }
            NumericPredicate::Malformed => false,
        }
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, NumericPredicate::Malformed)
    }
}

impl fmt::Display for NumericPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericPredicate::Condition(c) => write!(f, "{c}"),
            NumericPredicate::AtLeast(n) => write!(f, ">={n}"),
            NumericPredicate::Percentage(p) => write!(f, "{p}%"),
            NumericPredicate::Malformed => write!(f, "<malformed>"),
        }
    }
}

/// Evaluate a raw predicate value against `value` out of `max`.
///
/// ```
/// use overlay_state::numeric;
/// use serde_json::json;
///
/// assert!(numeric::evaluate(&json!(">3 & <10 | =15"), 5, 64));
/// assert!(numeric::evaluate(&json!("50%"), 5, 10));
/// assert!(!numeric::evaluate(&json!("50%"), 4, 10));
/// assert!(numeric::evaluate(&json!(8), 8, 64));
/// ```
#[must_use]
pub fn evaluate(pattern: &JsonValue, value: i32, max: i32) -> bool {
    NumericPredicate::from_pattern(pattern).evaluate(value, max)
}

/// Evaluate a condition string against `value`.
///
/// Returns `None` when `text` is not a condition, so callers can defer to
/// other logic instead of treating it as a failed match.
#[must_use]
pub fn evaluate_condition(text: &str, value: i32) -> Option<bool> {
    Condition::parse(text).ok().map(|c| c.evaluate(value))
}
