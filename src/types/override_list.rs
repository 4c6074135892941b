use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use super::attributes::ItemAttributes;
use super::error::LoadError;
use super::rule::{OverrideRule, PredicateSet};
use super::selection::Selection;
use super::selection_report::SelectionReport;
use crate::SelectorConfig;

/// Builder for constructing an [`OverrideList`].
///
/// Overrides are defined via closures, in the order they should be tried.
///
/// # Example
///
/// ```
/// use overlay_state::{ItemSnapshot, OverrideListBuilder};
///
/// let overrides = OverrideListBuilder::new()
///     .rule("item/apple_pile", |r| r.predicate("ios:stacking", ">=32"))
///     .rule("item/apple_few", |r| r.predicate("ios:stacking", ">1 & <32"))
///     .build()
///     .unwrap();
///
/// let apples = ItemSnapshot::new("apple").with_count(40);
/// let selected = overrides.select(&apples).unwrap();
/// assert_eq!(selected.model().to_string(), "minecraft:item/apple_pile");
/// ```
#[derive(Debug, Default)]
pub struct OverrideListBuilder {
    config: SelectorConfig,
    rules: Vec<(String, PredicateSet)>,
}

/// Intermediate builder passed to the override definition closure.
#[derive(Debug, Default)]
pub struct RuleBuilder {
    predicates: PredicateSet,
}

impl OverrideListBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` instead of the default namespaces.
    #[must_use]
    pub fn config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Append an override switching to `model`.
    #[must_use]
    pub fn rule(mut self, model: &str, f: impl FnOnce(RuleBuilder) -> RuleBuilder) -> Self {
        let builder = f(RuleBuilder::default());
        self.rules.push((model.to_owned(), builder.predicates));
        self
    }

    /// Compile the overrides into an immutable `OverrideList`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidThreshold`] if a legacy threshold is not a
    /// number.
    pub fn build(self) -> Result<OverrideList, LoadError> {
        let rules = self
            .rules
            .iter()
            .map(|(model, predicates)| OverrideRule::new(model, predicates, &self.config))
            .collect::<Result<_, _>>()?;
        Ok(OverrideList {
            rules,
            config: self.config,
        })
    }
}

impl RuleBuilder {
    /// Add a predicate entry. Keys are resource locations such as
    /// `ios:stacking`; entries keep the order they are added in.
    #[must_use]
    pub fn predicate(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.predicates.insert(key, value.into());
        self
    }

    /// Add a legacy property threshold, e.g. `pulling >= 1.0`.
    #[must_use]
    pub fn threshold(self, key: &str, min: f32) -> Self {
        self.predicate(key, f64::from(min))
    }
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(default)]
    overrides: Vec<OverrideEntry>,
}

#[derive(Debug, Deserialize)]
struct OverrideEntry {
    predicate: Map<String, JsonValue>,
    model: String,
}

/// The compiled `overrides` of one item model. Thread-safe and designed to
/// live behind `Arc`.
#[derive(Debug, Clone)]
pub struct OverrideList {
    pub(crate) rules: Vec<OverrideRule>,
    pub(crate) config: SelectorConfig,
}

impl OverrideList {
    /// Load the overrides of an item model JSON document with the default
    /// [`SelectorConfig`].
    ///
    /// A document without an `overrides` array yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on malformed JSON, a missing `predicate`/`model`,
    /// or a non-numeric legacy threshold.
    pub fn from_json(input: &str) -> Result<Self, LoadError> {
        Self::from_json_with(input, &SelectorConfig::default())
    }

    /// Like [`from_json`](Self::from_json) with explicit namespaces.
    ///
    /// # Errors
    ///
    /// See [`from_json`](Self::from_json).
    pub fn from_json_with(input: &str, config: &SelectorConfig) -> Result<Self, LoadError> {
        let file: ModelFile = serde_json::from_str(input)?;
        let rules = file
            .overrides
            .iter()
            .map(|entry| {
                OverrideRule::new(&entry.model, &PredicateSet::from(&entry.predicate), config)
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            rules,
            config: config.clone(),
        })
    }

    /// Read an item model file and load its overrides.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError`](crate::OverlayError) on I/O or load failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::OverlayError> {
        Self::from_file_with(path, &SelectorConfig::default())
    }

    /// Like [`from_file`](Self::from_file) with explicit namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError`](crate::OverlayError) on I/O or load failure.
    pub fn from_file_with(
        path: impl AsRef<std::path::Path>,
        config: &SelectorConfig,
    ) -> Result<Self, crate::OverlayError> {
        let input = std::fs::read_to_string(path)?;
        Ok(Self::from_json_with(&input, config)?)
    }

    /// The first override that applies to `item`, or `None` to keep the
    /// default model.
    #[must_use]
    pub fn select<A: ItemAttributes + ?Sized>(&self, item: &A) -> Option<Selection<'_>> {
        crate::evaluate::select(&self.rules, item)
    }

    /// Select with per-override diagnostics and timing.
    pub fn select_detailed<A: ItemAttributes + ?Sized>(&self, item: &A) -> SelectionReport<'_> {
        crate::evaluate::select_detailed(&self.rules, item)
    }

    /// Overrides in file order.
    #[must_use]
    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for OverrideList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OverrideList({} overrides, {} with extension predicates, namespace '{}')",
            self.rules.len(),
            self.rules.iter().filter(|r| r.predicate.is_some()).count(),
            self.config.namespace,
        )
    }
}
