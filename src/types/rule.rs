use regex::Regex;
use serde_json::{Map, Value as JsonValue};

use super::attributes::ItemAttributes;
use super::resource::ResourceLocation;
use crate::numeric::NumericPredicate;

/// The ordered `key -> pattern` mapping written in an override's `predicate`
/// object. Order matters: only the first recognized key is consulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateSet {
    entries: Vec<(ResourceLocation, JsonValue)>,
}

impl PredicateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: &str, value: JsonValue) {
        let key = ResourceLocation::new(key);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.insert(key, value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceLocation, &JsonValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&Map<String, JsonValue>> for PredicateSet {
    fn from(object: &Map<String, JsonValue>) -> Self {
        let mut set = PredicateSet::new();
        for (key, value) in object {
            set.insert(key, value.clone());
        }
        set
    }
}

/// A plain numeric predicate handled by the game's own property getters:
/// the getter's value must be at least `min`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyThreshold {
    pub key: ResourceLocation,
    pub min: f32,
}

/// An extension predicate with its payload parsed once at load time.
///
/// `None` payloads mark malformed values; they never match.
#[derive(Debug, Clone)]
pub(crate) enum Predicate {
    Stacking(NumericPredicate),
    Damage(NumericPredicate),
    Nbt(JsonValue),
    IncludeNbt(Option<Vec<String>>),
    Enchantment(Option<Vec<(ResourceLocation, i16)>>),
    IncludeEnchantment(Option<Vec<ResourceLocation>>),
    Name(Option<Regex>),
    Day(Option<i64>),
    Time(Option<i64>),
    /// A path under the extension namespace that this crate does not know.
    /// Always holds.
    Unrecognized(String),
    /// Recognized keys were present but every value was null.
    Unsatisfiable,
}

impl Predicate {
    pub(crate) fn is_malformed(&self) -> bool {
        match self {
            Predicate::Stacking(p) | Predicate::Damage(p) => p.is_malformed(),
            Predicate::IncludeNbt(v) => v.is_none(),
            Predicate::Enchantment(v) => v.is_none(),
            Predicate::IncludeEnchantment(v) => v.is_none(),
            Predicate::Name(v) => v.is_none(),
            Predicate::Day(v) | Predicate::Time(v) => v.is_none(),
            Predicate::Nbt(_) | Predicate::Unrecognized(_) | Predicate::Unsatisfiable => false,
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Predicate::Stacking(_) => "stacking",
            Predicate::Damage(_) => "damage",
            Predicate::Nbt(_) => "nbt",
            Predicate::IncludeNbt(_) => "includeNbt",
            Predicate::Enchantment(_) => "enchantment",
            Predicate::IncludeEnchantment(_) => "includeEnchantment",
            Predicate::Name(_) => "name",
            Predicate::Day(_) => "day",
            Predicate::Time(_) => "time",
            Predicate::Unrecognized(path) => path,
            Predicate::Unsatisfiable => "<null>",
        }
    }
}

/// One entry of an item model's `overrides` list.
///
/// Created by [`OverrideListBuilder`](super::OverrideListBuilder), by
/// [`OverrideRule::new`], or by loading a model file with
/// [`OverrideList::from_json`](super::OverrideList::from_json). Immutable
/// once built.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    pub(crate) model: ResourceLocation,
    pub(crate) predicate: Option<Predicate>,
    pub(crate) legacy: Vec<LegacyThreshold>,
}

impl OverrideRule {
    /// Compile a predicate set for `model` under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidThreshold`](super::LoadError::InvalidThreshold)
    /// if a key outside the recognized namespaces has a non-numeric value.
    pub fn new(
        model: &str,
        predicates: &PredicateSet,
        config: &crate::SelectorConfig,
    ) -> Result<Self, super::LoadError> {
        crate::compile::compile_rule(model, predicates, config)
    }

    /// The model this override switches to.
    #[must_use]
    pub fn model(&self) -> &ResourceLocation {
        &self.model
    }

    #[must_use]
    pub fn legacy_thresholds(&self) -> &[LegacyThreshold] {
        &self.legacy
    }

    /// Name of the extension predicate consulted for this rule, if any.
    #[must_use]
    pub fn extension_predicate(&self) -> Option<&str> {
        self.predicate.as_ref().map(Predicate::name)
    }

    /// Whether this override applies to `item`.
    #[must_use]
    pub fn matches<A: ItemAttributes + ?Sized>(&self, item: &A) -> bool {
        crate::evaluate::rule_matches(self, item)
    }
}
