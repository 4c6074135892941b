use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Namespace assumed when an identifier has no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced identifier such as `ios:stacking` or `minecraft:sharpness`.
///
/// Both halves are lowercased on construction, as the game does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    /// Split `text` at its first `:`. A missing or empty namespace becomes
    /// [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn new(text: &str) -> Self {
        let (namespace, path) = match text.split_once(':') {
            Some((ns, path)) if !ns.is_empty() => (ns, path),
            Some((_, path)) => (DEFAULT_NAMESPACE, path),
            None => (DEFAULT_NAMESPACE, text),
        };
        Self {
            namespace: namespace.to_ascii_lowercase(),
            path: path.to_ascii_lowercase(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl From<&str> for ResourceLocation {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl FromStr for ResourceLocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::new(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_namespace_and_path() {
        let loc = ResourceLocation::new("ios:stacking");
        assert_eq!(loc.namespace(), "ios");
        assert_eq!(loc.path(), "stacking");
    }

    #[test]
    fn defaults_namespace() {
        assert_eq!(ResourceLocation::new("sharpness").to_string(), "minecraft:sharpness");
        assert_eq!(ResourceLocation::new(":pulling").to_string(), "minecraft:pulling");
    }

    #[test]
    fn lowercases_both_halves() {
        let loc = ResourceLocation::new("IOS:includeNbt");
        assert_eq!(loc.namespace(), "ios");
        assert_eq!(loc.path(), "includenbt");
    }

    #[test]
    fn only_first_colon_splits() {
        let loc = ResourceLocation::new("mod:a:b");
        assert_eq!(loc.namespace(), "mod");
        assert_eq!(loc.path(), "a:b");
    }

    #[test]
    fn serde_uses_string_form() {
        let loc: ResourceLocation = serde_json::from_str(r#""item/apple_1""#).unwrap();
        assert_eq!(loc, ResourceLocation::new("minecraft:item/apple_1"));
        assert_eq!(serde_json::to_string(&loc).unwrap(), r#""minecraft:item/apple_1""#);
    }
}
