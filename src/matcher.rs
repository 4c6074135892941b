//! Structural matching of a tag tree against a JSON-shaped pattern.
//!
//! [`matches`] answers "is the pattern satisfied by the tree". The per-type
//! helpers below answer the opposite question: each `*_are_not_equal` returns
//! `true` when the leaf does NOT satisfy its pattern, and the compound walk
//! fails on the first such key.

use serde_json::{Number, Value as JsonValue};
use tracing::trace;

use crate::json;
use crate::types::{Compound, Tag};

/// Returns `true` when `pattern` is satisfied by `tree`.
///
/// - An array pattern requires every element to match the same tree node.
/// - An object pattern requires `tree` to be a compound containing every key,
///   with each value passing the check for the tree child's type.
/// - Any other pattern shape never matches.
#[must_use]
pub fn matches(tree: &Tag, pattern: &JsonValue) -> bool {
    match pattern {
        JsonValue::Array(items) => items.iter().all(|item| matches(tree, item)),
        JsonValue::Object(object) => match tree {
            Tag::Compound(compound) => object
                .iter()
                .all(|(key, value)| !entry_is_not_equal(compound, key, value)),
            _ => false,
        },
        _ => false,
    }
}

fn entry_is_not_equal(compound: &Compound, key: &str, value: &JsonValue) -> bool {
    let Some(tag) = compound.get(key) else {
        return true;
    };
    match tag {
        Tag::End => end_is_not_equal(tag),
        Tag::Byte(_) | Tag::Short(_) | Tag::Int(_) | Tag::Long(_) | Tag::Float(_) | Tag::Double(_) => {
            numbers_are_not_equal(value, tag)
        }
        Tag::ByteArray(_) | Tag::IntArray(_) | Tag::LongArray(_) | Tag::List(_) => {
            arrays_are_not_equal(value, tag)
        }
        Tag::String(_) => strings_are_not_equal(value, tag),
        Tag::Compound(_) => compounds_are_not_equal(value, tag),
        Tag::Unknown(id) => {
            trace!(key, type_id = *id, "skipping tag of unknown type");
            false
        }
    }
}

/// An end marker carries no value, so nothing a pattern says about it holds.
fn end_is_not_equal(tag: &Tag) -> bool {
    matches!(tag, Tag::End)
}

/// Numeric leaves are gated on "tree value is at least the pattern value":
/// the leaf mismatches when `tree < pattern`, after narrowing the pattern to
/// the leaf's width. A boolean pattern only applies to bytes, where `true`
/// means non-zero.
#[allow(clippy::cast_possible_truncation)]
fn numbers_are_not_equal(value: &JsonValue, tag: &Tag) -> bool {
    match value {
        JsonValue::Bool(flag) => match tag {
            Tag::Byte(b) => (*b == 0) == *flag,
            _ => true,
        },
        JsonValue::Number(n) => match tag {
            Tag::Byte(b) => *b < json::integer(n) as i8,
            Tag::Short(s) => *s < json::integer(n) as i16,
            Tag::Int(i) => *i < json::integer(n) as i32,
            Tag::Long(l) => *l < json::integer(n),
            Tag::Float(f) => *f < json::float(n) as f32,
            Tag::Double(d) => *d < json::float(n),
            _ => true,
        },
        _ => true,
    }
}

fn strings_are_not_equal(value: &JsonValue, tag: &Tag) -> bool {
    match (value, tag) {
        (JsonValue::String(expected), Tag::String(actual)) => expected != actual,
        _ => true,
    }
}

/// Primitive arrays must contain every pattern element somewhere (order and
/// length are ignored). For lists, every tree element must itself satisfy
/// the whole pattern array.
#[allow(clippy::cast_possible_truncation)]
fn arrays_are_not_equal(value: &JsonValue, tag: &Tag) -> bool {
    let JsonValue::Array(items) = value else {
        return true;
    };
    match tag {
        Tag::ByteArray(bytes) => !contains_all(items, |n| bytes.contains(&(json::integer(n) as i8))),
        Tag::IntArray(ints) => !contains_all(items, |n| ints.contains(&(json::integer(n) as i32))),
        Tag::LongArray(longs) => !contains_all(items, |n| longs.contains(&json::integer(n))),
        Tag::List(elements) => elements.iter().any(|element| !matches(element, value)),
        _ => true,
    }
}

fn contains_all(items: &[JsonValue], contains: impl Fn(&Number) -> bool) -> bool {
    items.iter().all(|item| match item {
        JsonValue::Number(n) => contains(n),
        _ => false,
    })
}

fn compounds_are_not_equal(value: &JsonValue, tag: &Tag) -> bool {
    match (value, tag) {
        (JsonValue::Object(_), Tag::Compound(_)) => !matches(tag, value),
        _ => true,
    }
}
