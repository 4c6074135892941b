//! Small extractors that turn item and world state into predicate inputs.
//!
//! All checks here fail closed: missing context or malformed input yields
//! `false`.

use std::collections::HashMap;

use regex::Regex;
use serde_json::Value as JsonValue;

use crate::json;
use crate::types::{ItemAttributes, ResourceLocation, Tag, WorldClock};

/// Map each registered enchantment on the item to its level.
///
/// Entries whose id the registry does not know are skipped. A later entry for
/// the same enchantment replaces an earlier one.
#[must_use]
pub fn enchantment_levels<A: ItemAttributes + ?Sized>(item: &A) -> HashMap<ResourceLocation, i16> {
    item.enchantment_list()
        .iter()
        .filter_map(|entry| {
            let name = item.enchantment_name(entry.short_or_zero("id"))?;
            Some((name, entry.short_or_zero("lvl")))
        })
        .collect()
}

/// Compile `pattern` so that it must match the whole display name.
///
/// # Errors
///
/// Returns the regex error for invalid patterns.
pub fn whole_name_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Whether `pattern` is a string regex matching the whole `display_name`.
#[must_use]
pub fn name_matches(display_name: &str, pattern: &JsonValue) -> bool {
    pattern
        .as_str()
        .and_then(|p| whole_name_regex(p).ok())
        .is_some_and(|re| re.is_match(display_name))
}

/// `day(world) >= threshold`, where the day count starts at 1.
#[must_use]
pub fn day_reached(world: Option<WorldClock>, threshold: i64) -> bool {
    world.is_some_and(|w| w.day() >= threshold)
}

/// `world_time >= threshold`.
#[must_use]
pub fn time_reached(world: Option<WorldClock>, threshold: i64) -> bool {
    world.is_some_and(|w| w.world_time >= threshold)
}

/// Every required enchantment is present at no less than the given level.
#[must_use]
pub fn enchantment_levels_reached(
    levels: &HashMap<ResourceLocation, i16>,
    required: &[(ResourceLocation, i16)],
) -> bool {
    required
        .iter()
        .all(|(name, min)| levels.get(name).is_some_and(|lvl| lvl >= min))
}

/// Every listed enchantment is present at any level.
#[must_use]
pub fn includes_enchantments(
    levels: &HashMap<ResourceLocation, i16>,
    required: &[ResourceLocation],
) -> bool {
    required.iter().all(|name| levels.contains_key(name))
}

/// Every key is present in the serialized item's `tag` compound.
#[must_use]
pub fn includes_tag_keys<S: AsRef<str>>(serialized: &Tag, keys: &[S]) -> bool {
    match serialized.get("tag") {
        Some(tag @ Tag::Compound(_)) => keys.iter().all(|key| tag.contains_key(key.as_ref())),
        _ => false,
    }
}

/// Parse an `{"<enchantment>": <min level>}` object.
///
/// `None` when the value is not an object or a level is not a number.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parse_enchantment_levels(value: &JsonValue) -> Option<Vec<(ResourceLocation, i16)>> {
    value
        .as_object()?
        .iter()
        .map(|(key, level)| Some((ResourceLocation::new(key), json::as_integer(level)? as i16)))
        .collect()
}

/// Parse a string or array of strings into enchantment names.
pub(crate) fn parse_enchantment_names(value: &JsonValue) -> Option<Vec<ResourceLocation>> {
    json::string_or_strings(value)
        .map(|names| names.iter().map(|n| ResourceLocation::new(n)).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ItemSnapshot;

    fn enchanted_sword() -> ItemSnapshot {
        ItemSnapshot::new("diamond_sword")
            .with_enchantment_id(16, "minecraft:sharpness")
            .with_enchantment_id(34, "minecraft:unbreaking")
            .with_tag(Tag::compound([
                (
                    "ench",
                    Tag::list([
                        Tag::compound([("id", Tag::Short(16)), ("lvl", Tag::Short(5))]),
                        Tag::compound([("id", Tag::Short(34)), ("lvl", Tag::Short(3))]),
                        Tag::compound([("id", Tag::Short(999)), ("lvl", Tag::Short(1))]),
                    ]),
                ),
                ("display", Tag::compound([("Name", Tag::from("Excalibur"))])),
            ]))
    }

    #[test]
    fn enchantment_map_skips_unregistered_ids() {
        let levels = enchantment_levels(&enchanted_sword());
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[&ResourceLocation::new("sharpness")], 5);
        assert_eq!(levels[&ResourceLocation::new("unbreaking")], 3);
    }

    #[test]
    fn name_must_match_whole_string() {
        assert!(name_matches("Excalibur", &json!("Excal.*")));
        assert!(!name_matches("Excalibur", &json!("Excal")));
        assert!(name_matches("Excalibur", &json!("Excal|Excalibur")));
        assert!(!name_matches("Excalibur", &json!("(unclosed")));
        assert!(!name_matches("Excalibur", &json!(1)));
    }

    #[test]
    fn day_and_time_need_a_world() {
        assert!(!day_reached(None, 1));
        assert!(!time_reached(None, 0));
        let world = Some(WorldClock::new(13_000, 48_000));
        assert!(day_reached(world, 3));
        assert!(!day_reached(world, 4));
        assert!(time_reached(world, 13_000));
        assert!(!time_reached(world, 13_001));
    }

    #[test]
    fn enchantment_level_thresholds() {
        let levels = enchantment_levels(&enchanted_sword());
        let parse = |v| parse_enchantment_levels(&v).unwrap();
        assert!(enchantment_levels_reached(&levels, &parse(json!({"sharpness": 5}))));
        assert!(enchantment_levels_reached(
            &levels,
            &parse(json!({"minecraft:sharpness": 2, "unbreaking": 3}))
        ));
        assert!(!enchantment_levels_reached(&levels, &parse(json!({"sharpness": 6}))));
        assert!(!enchantment_levels_reached(&levels, &parse(json!({"mending": 1}))));
    }

    #[test]
    fn malformed_enchantment_levels() {
        assert!(parse_enchantment_levels(&json!({"sharpness": "5"})).is_none());
        assert!(parse_enchantment_levels(&json!(["sharpness"])).is_none());
    }

    #[test]
    fn enchantment_inclusion() {
        let levels = enchantment_levels(&enchanted_sword());
        let names = parse_enchantment_names(&json!(["sharpness", "UNBREAKING"])).unwrap();
        assert!(includes_enchantments(&levels, &names));
        let names = parse_enchantment_names(&json!("mending")).unwrap();
        assert!(!includes_enchantments(&levels, &names));
        assert!(parse_enchantment_names(&json!(["sharpness", 3])).is_none());
    }

    #[test]
    fn tag_key_inclusion() {
        let root = enchanted_sword().serialized().into_owned();
        assert!(includes_tag_keys(&root, &["display"]));
        assert!(includes_tag_keys(&root, &["display", "ench"]));
        assert!(!includes_tag_keys(&root, &["display", "Unbreakable"]));
        // Root keys are not tag keys.
        assert!(!includes_tag_keys(&root, &["Count"]));

        let bare = ItemSnapshot::new("stick").serialized().into_owned();
        assert!(!includes_tag_keys(&bare, &["display"]));
    }
}
