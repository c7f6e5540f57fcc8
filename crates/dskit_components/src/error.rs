use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown variation {0}")]
    UnknownVariation(Uuid),

    #[error("variation {variation} has no style {style}")]
    UnknownStyle { variation: Uuid, style: Uuid },

    /// A prop binding refers to an id with no matching component API entry.
    #[error("no prop bound to component API {0}")]
    UnknownProp(Uuid),

    #[error("default for variation {0} is listed more than once")]
    DuplicateDefault(Uuid),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
