use serde::{Deserialize, Serialize};

use crate::{OverlayError, ResourceLocation};

/// Which predicate namespaces the selector treats as its own.
///
/// ```
/// use overlay_state::SelectorConfig;
///
/// let config = SelectorConfig::from_json(r#"{"legacy_namespace": null}"#).unwrap();
/// assert_eq!(config.namespace, "ios");
/// assert_eq!(config.legacy_namespace, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Namespace carrying the full predicate set.
    pub namespace: String,
    /// Older namespace that only knows `stacking`. `None` disables it.
    pub legacy_namespace: Option<String>,
}

/// How a predicate key is handled when a rule is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyClass {
    /// A candidate extension predicate.
    Extension,
    /// A legacy-namespace path other than `stacking`. Dropped.
    Ignored,
    /// A plain property threshold for the host's getters.
    Threshold,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            namespace: "ios".to_owned(),
            legacy_namespace: Some("sti".to_owned()),
        }
    }
}

impl SelectorConfig {
    /// A config with a single namespace and no legacy alias.
    #[must_use]
    pub fn unified(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_owned(),
            legacy_namespace: None,
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::Json`] on malformed input or unknown fields.
    pub fn from_json(input: &str) -> Result<Self, OverlayError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read and parse a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError`] on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, OverlayError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// Whether `key` belongs to a namespace this selector handles.
    #[must_use]
    pub fn recognizes(&self, key: &ResourceLocation) -> bool {
        self.classify(key) == KeyClass::Extension
    }

    pub(crate) fn classify(&self, key: &ResourceLocation) -> KeyClass {
        if key.namespace().eq_ignore_ascii_case(&self.namespace) {
            return KeyClass::Extension;
        }
        match &self.legacy_namespace {
            Some(legacy) if key.namespace().eq_ignore_ascii_case(legacy) => {
                if key.path().eq_ignore_ascii_case("stacking") {
                    KeyClass::Extension
                } else {
                    KeyClass::Ignored
                }
            }
            _ => KeyClass::Threshold,
        }
    }
}
