use thiserror::Error;

use crate::platform::{Platform, VariationKind};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("token `{name}` has tags {tags:?} that do not match its name")]
    TagMismatch { name: String, tags: Vec<String> },

    #[error("token `{name}` ({kind}) is missing its {platform} value")]
    MissingPlatform {
        name: String,
        kind: VariationKind,
        platform: Platform,
    },

    #[error("invalid {kind} value for {platform}: {source}")]
    InvalidValue {
        kind: VariationKind,
        platform: Platform,
        #[source]
        source: serde_json::Error,
    },

    #[error("value does not fit {kind} on {platform}")]
    ValueMismatch {
        kind: VariationKind,
        platform: Platform,
    },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("unknown platform `{0}`")]
    UnknownPlatform(String),

    #[error("unknown variation kind `{0}`")]
    UnknownVariation(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
