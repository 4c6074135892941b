use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use tracing::{trace, warn};

use crate::adapters::{
    day_reached, enchantment_levels, enchantment_levels_reached, includes_enchantments,
    includes_tag_keys, time_reached,
};
use crate::matcher::matches;
use crate::types::{Predicate, RuleOutcome, Selection, SelectionReport};
use crate::{ItemAttributes, OverrideRule, ResourceLocation};

/// Pick the model of the first override in `rules` that applies to `item`.
///
/// `None` means the host should keep its default model.
#[must_use]
pub fn select_override<'r, A: ItemAttributes + ?Sized>(
    item: &A,
    rules: &'r [OverrideRule],
) -> Option<&'r ResourceLocation> {
    select(rules, item).map(|s| s.model())
}

pub(crate) fn select<'r, A: ItemAttributes + ?Sized>(
    rules: &'r [OverrideRule],
    item: &A,
) -> Option<Selection<'r>> {
    rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule_matches(rule, item))
        .map(|(index, rule)| Selection::new(index, &rule.model))
}

pub(crate) fn select_detailed<'r, A: ItemAttributes + ?Sized>(
    rules: &'r [OverrideRule],
    item: &A,
) -> SelectionReport<'r> {
    let start = Instant::now();
    let mut outcomes = Vec::new();
    let mut selection = None;

    for (index, rule) in rules.iter().enumerate() {
        let extension = rule
            .predicate
            .as_ref()
            .map(|p| guarded(&rule.model, || evaluate_predicate(p, item)));
        let legacy = if extension.unwrap_or(true) {
            Some(guarded(&rule.model, || legacy_matches(rule, item)))
        } else {
            None
        };
        let matched = legacy.unwrap_or(false);
        trace!(index, model = %rule.model, ?extension, ?legacy, "override evaluated");
        outcomes.push(RuleOutcome::new(index, &rule.model, extension, legacy));
        if matched {
            selection = Some(Selection::new(index, &rule.model));
            break;
        }
    }

    SelectionReport::new(selection, outcomes, start.elapsed())
}

/// Both layers: the extension predicate (when present) and then every
/// legacy threshold.
pub(crate) fn rule_matches<A: ItemAttributes + ?Sized>(rule: &OverrideRule, item: &A) -> bool {
    let matched = guarded(&rule.model, || {
        let extension = rule
            .predicate
            .as_ref()
            .map_or(true, |p| evaluate_predicate(p, item));
        extension && legacy_matches(rule, item)
    });
    trace!(model = %rule.model, matched, "override evaluated");
    matched
}

/// Run a check that calls into host attribute code. A panic there counts
/// as no match for this override.
fn guarded(model: &ResourceLocation, check: impl FnOnce() -> bool) -> bool {
    panic::catch_unwind(AssertUnwindSafe(check)).unwrap_or_else(|_| {
        warn!(model = %model, "attribute source panicked, override skipped");
        false
    })
}

fn legacy_matches<A: ItemAttributes + ?Sized>(rule: &OverrideRule, item: &A) -> bool {
    rule.legacy
        .iter()
        .all(|t| item.property(&t.key).is_some_and(|value| value >= t.min))
}

pub(crate) fn evaluate_predicate<A: ItemAttributes + ?Sized>(predicate: &Predicate, item: &A) -> bool {
    match predicate {
        Predicate::Stacking(p) => p.evaluate(item.count(), item.max_count()),
        Predicate::Damage(p) => p.evaluate(item.damage(), item.max_damage()),
        Predicate::Nbt(pattern) => matches(&item.serialized(), pattern),
        Predicate::IncludeNbt(Some(keys)) => includes_tag_keys(&item.serialized(), keys),
        Predicate::Enchantment(Some(required)) => {
            enchantment_levels_reached(&enchantment_levels(item), required)
        }
        Predicate::IncludeEnchantment(Some(names)) => {
            includes_enchantments(&enchantment_levels(item), names)
        }
        Predicate::Name(Some(re)) => re.is_match(item.display_name()),
        Predicate::Day(Some(threshold)) => day_reached(item.world(), *threshold),
        Predicate::Time(Some(threshold)) => time_reached(item.world(), *threshold),
        Predicate::Unrecognized(_) => true,
        Predicate::IncludeNbt(None)
        | Predicate::Enchantment(None)
        | Predicate::IncludeEnchantment(None)
        | Predicate::Name(None)
        | Predicate::Day(None)
        | Predicate::Time(None)
        | Predicate::Unsatisfiable => false,
    }
}
