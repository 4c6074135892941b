use thiserror::Error;

use crate::LoadError;

/// Unified error type for loading overrides and configuration from disk.
///
/// Returned by convenience methods like
/// [`OverrideList::from_file()`](crate::OverrideList::from_file) and
/// [`SelectorConfig::from_json()`](crate::SelectorConfig::from_json).
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
