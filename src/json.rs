//! Narrowing helpers for JSON numbers.
//!
//! Rule files write numbers as plain JSON; the tree side is typed. These
//! conversions truncate toward zero and then wrap to the target width.

use serde_json::{Number, Value as JsonValue};

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) fn integer(n: &Number) -> i64 {
    if let Some(v) = n.as_i64() {
        v
    } else if let Some(v) = n.as_u64() {
        v as i64
    } else {
        n.as_f64().map_or(0, |f| f as i64)
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn float(n: &Number) -> f64 {
    n.as_f64().unwrap_or_else(|| integer(n) as f64)
}

/// The value as a whole number, if it is a JSON number at all.
pub(crate) fn as_integer(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => Some(integer(n)),
        _ => None,
    }
}

/// A string, or an array made only of strings. Anything else is `None`.
pub(crate) fn string_or_strings(value: &JsonValue) -> Option<Vec<String>> {
    match value {
        JsonValue::String(s) => Some(vec![s.clone()]),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => None,
    }
}
