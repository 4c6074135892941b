//! Item model override selection driven by predicate sets.
//!
//! An item model lists `overrides`, each pairing a predicate set with a
//! model. [`OverrideList`] compiles those overrides once and picks the first
//! one that applies to an item described through [`ItemAttributes`].

pub mod adapters;
mod compile;
mod config;
mod error;
mod evaluate;
mod json;
pub mod matcher;
pub mod numeric;
pub mod parse;
mod types;

pub use config::SelectorConfig;
pub use error::OverlayError;
pub use evaluate::select_override;
pub use parse::ParseError;
pub use types::{
    CompareOp, Comparison, Compound, Condition, Conjunction, ItemAttributes, ItemSnapshot,
    LegacyThreshold, LoadError, OverrideList, OverrideListBuilder, OverrideRule, PredicateSet,
    ResourceLocation, RuleBuilder, RuleOutcome, Selection, SelectionReport, Tag, WorldClock,
    DEFAULT_NAMESPACE, TICKS_PER_DAY,
};
