mod attributes;
mod condition;
mod error;
mod override_list;
mod resource;
mod rule;
mod selection;
mod selection_report;
mod tag;

pub use attributes::{ItemAttributes, ItemSnapshot, WorldClock, TICKS_PER_DAY};
pub use condition::{CompareOp, Comparison, Condition, Conjunction};
pub use error::LoadError;
pub use override_list::{OverrideList, OverrideListBuilder, RuleBuilder};
pub use resource::{ResourceLocation, DEFAULT_NAMESPACE};
pub(crate) use rule::Predicate;
pub use rule::{LegacyThreshold, OverrideRule, PredicateSet};
pub use selection::Selection;
pub use selection_report::{RuleOutcome, SelectionReport};
pub use tag::{Compound, Tag};
