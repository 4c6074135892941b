use overlay_state::{CompareOp, Tag};
use proptest::prelude::*;
use serde_json::{json, Map, Value as JsonValue};

// --- Condition strings ---
// Thresholds are non-negative: the grammar has no sign.
// Values cover the same range plus negatives so every operator flips.

pub const OPS: &[(&str, CompareOp)] = &[
    ("<", CompareOp::Lt),
    (">", CompareOp::Gt),
    ("<=", CompareOp::Lte),
    (">=", CompareOp::Gte),
    ("=", CompareOp::Eq),
    ("!=", CompareOp::Neq),
];

/// Reference semantics for one operator, independent of the crate.
#[must_use]
pub fn reference_holds(symbol: &str, value: i32, threshold: i32) -> bool {
    match symbol {
        "<" => value < threshold,
        ">" => value > threshold,
        "<=" => value <= threshold,
        ">=" => value >= threshold,
        "=" => value == threshold,
        _ => value != threshold,
    }
}

pub fn arb_value() -> impl Strategy<Value = i32> {
    prop_oneof![-20_i32..=40, any::<i32>()]
}

pub fn arb_threshold() -> impl Strategy<Value = i32> {
    prop_oneof![0_i32..=30, 0_i32..=i32::MAX]
}

fn arb_ws() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just(" ".to_owned()), Just("\t ".to_owned())]
}

/// A single comparison as `(text, symbol, threshold)`, with random spacing.
pub fn arb_comparison() -> impl Strategy<Value = (String, &'static str, i32)> {
    (prop::sample::select(OPS), arb_threshold(), arb_ws(), arb_ws()).prop_map(
        |((symbol, _), threshold, before, after)| {
            (format!("{before}{symbol}{after}{threshold}"), symbol, threshold)
        },
    )
}

/// A generated condition: OR of ANDs of `(symbol, threshold)`.
#[derive(Debug, Clone)]
pub struct GenCondition {
    pub text: String,
    pub groups: Vec<Vec<(&'static str, i32)>>,
}

impl GenCondition {
    /// Evaluate with the reference semantics.
    #[must_use]
    pub fn reference(&self, value: i32) -> bool {
        self.groups.iter().any(|group| {
            group
                .iter()
                .all(|(symbol, threshold)| reference_holds(symbol, value, *threshold))
        })
    }
}

pub fn arb_condition() -> impl Strategy<Value = GenCondition> {
    prop::collection::vec(prop::collection::vec(arb_comparison(), 1..=3), 1..=3).prop_map(
        |groups| {
            let text = groups
                .iter()
                .map(|group| {
                    group
                        .iter()
                        .map(|(text, _, _)| text.as_str())
                        .collect::<Vec<_>>()
                        .join("&")
                })
                .collect::<Vec<_>>()
                .join(" | ");
            let groups = groups
                .into_iter()
                .map(|group| group.into_iter().map(|(_, op, t)| (op, t)).collect())
                .collect();
            GenCondition { text, groups }
        },
    )
}

// --- Tag trees ---

fn arb_key() -> impl Strategy<Value = String> {
    prop::sample::select(&["Count", "Damage", "id", "lvl", "Name", "a", "b", "c"][..])
        .prop_map(str::to_owned)
}

fn arb_leaf() -> impl Strategy<Value = Tag> {
    prop_oneof![
        any::<i8>().prop_map(Tag::Byte),
        any::<i16>().prop_map(Tag::Short),
        any::<i32>().prop_map(Tag::Int),
        any::<i64>().prop_map(Tag::Long),
        any::<f32>()
            .prop_filter("must be finite", |f| f.is_finite())
            .prop_map(Tag::Float),
        any::<f64>()
            .prop_filter("must be finite", |f| f.is_finite())
            .prop_map(Tag::Double),
        "[a-z:_]{0,10}".prop_map(Tag::String),
        prop::collection::vec(any::<i8>(), 0..4).prop_map(Tag::ByteArray),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(Tag::IntArray),
        prop::collection::vec(any::<i64>(), 0..4).prop_map(Tag::LongArray),
    ]
}

/// Compound trees up to three levels deep, with lists of compounds.
pub fn arb_compound() -> impl Strategy<Value = Tag> {
    let leaf = prop::collection::hash_map(arb_key(), arb_leaf(), 0..5).prop_map(Tag::Compound);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::hash_map(
            arb_key(),
            prop_oneof![
                arb_leaf(),
                inner.clone(),
                prop::collection::vec(inner, 0..3).prop_map(Tag::List),
            ],
            0..5,
        )
        .prop_map(Tag::Compound)
    })
}

/// A pattern that `tree` satisfies exactly: every key, every value at the
/// number gate's boundary. Lists get an empty array pattern.
#[must_use]
pub fn exact_pattern(tree: &Tag) -> JsonValue {
    match tree {
        Tag::Byte(v) => json!(v),
        Tag::Short(v) => json!(v),
        Tag::Int(v) => json!(v),
        Tag::Long(v) => json!(v),
        Tag::Float(v) => json!(f64::from(*v)),
        Tag::Double(v) => json!(v),
        Tag::String(v) => json!(v),
        Tag::ByteArray(v) => json!(v),
        Tag::IntArray(v) => json!(v),
        Tag::LongArray(v) => json!(v),
        Tag::List(_) => json!([]),
        Tag::Compound(children) => {
            let mut object = Map::new();
            for (key, child) in children {
                object.insert(key.clone(), exact_pattern(child));
            }
            JsonValue::Object(object)
        }
        Tag::End | Tag::Unknown(_) => JsonValue::Null,
    }
}
