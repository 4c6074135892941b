use std::fmt;
use std::time::Duration;

use super::resource::ResourceLocation;
use super::selection::Selection;

/// How one override fared during a detailed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome<'a> {
    index: usize,
    model: &'a ResourceLocation,
    extension: Option<bool>,
    legacy: Option<bool>,
}

impl<'a> RuleOutcome<'a> {
    pub(crate) fn new(
        index: usize,
        model: &'a ResourceLocation,
        extension: Option<bool>,
        legacy: Option<bool>,
    ) -> Self {
        Self {
            index,
            model,
            extension,
            legacy,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn model(&self) -> &'a ResourceLocation {
        self.model
    }

    /// Result of the extension predicate, `None` when the rule has none.
    #[must_use]
    pub fn extension(&self) -> Option<bool> {
        self.extension
    }

    /// Result of the legacy thresholds, `None` when they were not reached
    /// because the extension predicate failed.
    #[must_use]
    pub fn legacy(&self) -> Option<bool> {
        self.legacy
    }

    #[must_use]
    pub fn matched(&self) -> bool {
        self.extension.unwrap_or(true) && self.legacy.unwrap_or(false)
    }
}

impl fmt::Display for RuleOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layer = |v: Option<bool>| match v {
            Some(true) => "pass",
            Some(false) => "fail",
            None => "-",
        };
        write!(
            f,
            "#{} {} (extension: {}, legacy: {})",
            self.index,
            self.model,
            layer(self.extension),
            layer(self.legacy)
        )
    }
}

/// Detailed selection report returned by
/// [`OverrideList::select_detailed()`](super::OverrideList::select_detailed).
///
/// Contains the selection, the outcome of every override evaluated up to and
/// including the selected one, and the wall-clock duration of the lookup.
#[derive(Debug, Clone)]
#[must_use]
pub struct SelectionReport<'a> {
    selection: Option<Selection<'a>>,
    outcomes: Vec<RuleOutcome<'a>>,
    duration: Duration,
}

impl<'a> SelectionReport<'a> {
    pub(crate) fn new(
        selection: Option<Selection<'a>>,
        outcomes: Vec<RuleOutcome<'a>>,
        duration: Duration,
    ) -> Self {
        Self {
            selection,
            outcomes,
            duration,
        }
    }

    /// Same as [`OverrideList::select()`](super::OverrideList::select).
    #[must_use]
    pub fn selection(&self) -> Option<Selection<'a>> {
        self.selection
    }

    /// Overrides in the order they were evaluated.
    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome<'a>] {
        &self.outcomes
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for SelectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.selection {
            Some(s) => write!(f, "selected: {s}")?,
            None => write!(f, "selected: none")?,
        }
        write!(f, ", evaluated: {}", self.outcomes.len())?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
