use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid item model json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("predicate '{key}' of override '{model}' must be a number")]
    InvalidThreshold { model: String, key: String },
}
