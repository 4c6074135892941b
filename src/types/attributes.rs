use std::borrow::Cow;
use std::collections::HashMap;

use super::{ResourceLocation, Tag};

/// Ticks in one in-game day.
pub const TICKS_PER_DAY: i64 = 24_000;

/// The world clock as seen by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldClock {
    /// Time of day, as set by `/time`.
    pub world_time: i64,
    /// Ticks the world has existed for.
    pub total_ticks: i64,
}

impl WorldClock {
    #[must_use]
    pub fn new(world_time: i64, total_ticks: i64) -> Self {
        Self {
            world_time,
            total_ticks,
        }
    }

    /// One-based day number.
    #[must_use]
    pub fn day(&self) -> i64 {
        self.total_ticks / TICKS_PER_DAY + 1
    }
}

/// Everything the selector reads from an item and its surroundings.
///
/// Hosts implement this over their own item representation;
/// [`ItemSnapshot`] is a ready-made owned implementation.
///
/// A panic inside any of these methods fails only the override being
/// checked; selection moves on to the next one. Builds with
/// `panic = "abort"` cannot recover and abort as usual.
pub trait ItemAttributes {
    fn count(&self) -> i32;

    fn max_count(&self) -> i32;

    fn damage(&self) -> i32;

    fn max_damage(&self) -> i32;

    /// The item serialized to a tag tree: a compound with `id`, `Count`,
    /// `Damage` and, when present, `tag`.
    fn serialized(&self) -> Cow<'_, Tag>;

    /// Raw enchantment entries (`{id: short, lvl: short}` compounds).
    ///
    /// Defaults to the `ench` list under the serialized tree's `tag`.
    fn enchantment_list(&self) -> Vec<Tag> {
        match self.serialized().get("tag").and_then(|tag| tag.get("ench")) {
            Some(Tag::List(entries)) => entries.clone(),
            _ => Vec::new(),
        }
    }

    /// Resolve a numeric enchantment id through the registry.
    fn enchantment_name(&self, id: i16) -> Option<ResourceLocation>;

    fn display_name(&self) -> &str;

    /// `None` when there is no world, e.g. on the title screen.
    fn world(&self) -> Option<WorldClock>;

    /// Value of a legacy item property getter, `None` when the item has none.
    fn property(&self, _key: &ResourceLocation) -> Option<f32> {
        None
    }
}

/// An owned snapshot of item state.
///
/// ```
/// use overlay_state::{ItemAttributes, ItemSnapshot, Tag, WorldClock};
///
/// let apple = ItemSnapshot::new("minecraft:apple")
///     .with_count(5)
///     .with_tag(Tag::compound([("Fresh", Tag::Byte(1))]))
///     .with_world(WorldClock::new(6000, 30_000));
///
/// assert_eq!(apple.count(), 5);
/// assert_eq!(apple.serialized().get("Count"), Some(&Tag::Byte(5)));
/// assert_eq!(apple.world().map(|w| w.day()), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct ItemSnapshot {
    id: ResourceLocation,
    count: i32,
    max_count: i32,
    damage: i32,
    max_damage: i32,
    tag: Option<Tag>,
    display_name: String,
    world: Option<WorldClock>,
    enchantment_registry: HashMap<i16, ResourceLocation>,
    properties: HashMap<ResourceLocation, f32>,
}

impl ItemSnapshot {
    /// A single, undamaged item stackable to 64 and named after its id.
    #[must_use]
    pub fn new(id: &str) -> Self {
        let id = ResourceLocation::new(id);
        Self {
            display_name: id.path().to_owned(),
            id,
            count: 1,
            max_count: 64,
            damage: 0,
            max_damage: 0,
            tag: None,
            world: None,
            enchantment_registry: HashMap::new(),
            properties: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_max_count(mut self, max_count: i32) -> Self {
        self.max_count = max_count;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: i32, max_damage: i32) -> Self {
        self.damage = damage;
        self.max_damage = max_damage;
        self
    }

    /// Set the item's `tag` compound (custom data, display, enchantments).
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    #[must_use]
    pub fn with_world(mut self, world: WorldClock) -> Self {
        self.world = Some(world);
        self
    }

    /// Register an enchantment id so it can be resolved by name.
    #[must_use]
    pub fn with_enchantment_id(mut self, id: i16, name: &str) -> Self {
        self.enchantment_registry
            .insert(id, ResourceLocation::new(name));
        self
    }

    #[must_use]
    pub fn with_property(mut self, key: &str, value: f32) -> Self {
        self.properties.insert(ResourceLocation::new(key), value);
        self
    }
}

#[allow(clippy::cast_possible_truncation)]
impl ItemAttributes for ItemSnapshot {
    fn count(&self) -> i32 {
        self.count
    }

    fn max_count(&self) -> i32 {
        self.max_count
    }

    fn damage(&self) -> i32 {
        self.damage
    }

    fn max_damage(&self) -> i32 {
        self.max_damage
    }

    fn serialized(&self) -> Cow<'_, Tag> {
        let mut root = vec![
            ("id", Tag::String(self.id.to_string())),
            ("Count", Tag::Byte(self.count as i8)),
            ("Damage", Tag::Short(self.damage as i16)),
        ];
        if let Some(tag) = &self.tag {
            root.push(("tag", tag.clone()));
        }
        Cow::Owned(Tag::compound(root))
    }

    fn enchantment_name(&self, id: i16) -> Option<ResourceLocation> {
        self.enchantment_registry.get(&id).cloned()
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn world(&self) -> Option<WorldClock> {
        self.world
    }

    fn property(&self, key: &ResourceLocation) -> Option<f32> {
        self.properties.get(key).copied()
    }
}
