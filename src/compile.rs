use serde_json::Value as JsonValue;
use tracing::debug;

use crate::adapters::{parse_enchantment_levels, parse_enchantment_names, whole_name_regex};
use crate::config::KeyClass;
use crate::json;
use crate::numeric::NumericPredicate;
use crate::types::{LegacyThreshold, Predicate, PredicateSet};
use crate::{LoadError, OverrideRule, ResourceLocation, SelectorConfig};

/// Path names understood under the extension namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PredicateKind {
    Stacking,
    Damage,
    Nbt,
    IncludeNbt,
    Enchantment,
    IncludeEnchantment,
    Name,
    Day,
    Time,
}

impl PredicateKind {
    const ALL: [PredicateKind; 9] = [
        PredicateKind::Stacking,
        PredicateKind::Damage,
        PredicateKind::Nbt,
        PredicateKind::IncludeNbt,
        PredicateKind::Enchantment,
        PredicateKind::IncludeEnchantment,
        PredicateKind::Name,
        PredicateKind::Day,
        PredicateKind::Time,
    ];

    fn name(self) -> &'static str {
        match self {
            PredicateKind::Stacking => "stacking",
            PredicateKind::Damage => "damage",
            PredicateKind::Nbt => "nbt",
            PredicateKind::IncludeNbt => "includeNbt",
            PredicateKind::Enchantment => "enchantment",
            PredicateKind::IncludeEnchantment => "includeEnchantment",
            PredicateKind::Name => "name",
            PredicateKind::Day => "day",
            PredicateKind::Time => "time",
        }
    }

    fn from_path(path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(path))
    }
}

/// Compile one override: pick its extension predicate and collect the
/// legacy thresholds.
///
/// Only the first recognized key with a non-null value becomes the extension
/// predicate. Later recognized keys are kept out of evaluation entirely.
pub(crate) fn compile_rule(
    model: &str,
    predicates: &PredicateSet,
    config: &SelectorConfig,
) -> Result<OverrideRule, LoadError> {
    let model = ResourceLocation::new(model);
    let mut predicate = None;
    let mut recognized = false;
    let mut legacy = Vec::new();

    for (key, value) in predicates.iter() {
        match config.classify(key) {
            KeyClass::Extension => {
                recognized = true;
                if predicate.is_some() {
                    continue;
                }
                if value.is_null() {
                    debug!(model = %model, key = %key, "skipping null predicate");
                    continue;
                }
                predicate = Some(compile_predicate(&model, key, value));
            }
            KeyClass::Ignored => {
                debug!(model = %model, key = %key, "legacy namespace only supports stacking");
            }
            KeyClass::Threshold => legacy.push(compile_threshold(&model, key, value)?),
        }
    }

    if recognized && predicate.is_none() {
        predicate = Some(Predicate::Unsatisfiable);
    }

    Ok(OverrideRule {
        model,
        predicate,
        legacy,
    })
}

fn compile_predicate(model: &ResourceLocation, key: &ResourceLocation, value: &JsonValue) -> Predicate {
    let Some(kind) = PredicateKind::from_path(key.path()) else {
        debug!(model = %model, key = %key, "unrecognized predicate; it always matches");
        return Predicate::Unrecognized(key.path().to_owned());
    };

    let compiled = match kind {
        PredicateKind::Stacking => Predicate::Stacking(NumericPredicate::from_pattern(value)),
        PredicateKind::Damage => Predicate::Damage(NumericPredicate::from_pattern(value)),
        PredicateKind::Nbt => Predicate::Nbt(value.clone()),
        PredicateKind::IncludeNbt => Predicate::IncludeNbt(json::string_or_strings(value)),
        PredicateKind::Enchantment => Predicate::Enchantment(parse_enchantment_levels(value)),
        PredicateKind::IncludeEnchantment => {
            Predicate::IncludeEnchantment(parse_enchantment_names(value))
        }
        PredicateKind::Name => Predicate::Name(value.as_str().and_then(|pattern| {
            whole_name_regex(pattern)
                .map_err(|err| debug!(model = %model, key = %key, %err, "invalid name regex"))
                .ok()
        })),
        PredicateKind::Day => Predicate::Day(json::as_integer(value)),
        PredicateKind::Time => Predicate::Time(json::as_integer(value)),
    };

    if compiled.is_malformed() {
        debug!(model = %model, key = %key, value = %value, "malformed predicate; it never matches");
    }
    compiled
}

#[allow(clippy::cast_possible_truncation)]
fn compile_threshold(
    model: &ResourceLocation,
    key: &ResourceLocation,
    value: &JsonValue,
) -> Result<LegacyThreshold, LoadError> {
    let min = value.as_f64().ok_or_else(|| LoadError::InvalidThreshold {
        model: model.to_string(),
        key: key.to_string(),
    })?;
    Ok(LegacyThreshold {
        key: key.clone(),
        min: min as f32,
    })
}
