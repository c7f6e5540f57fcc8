use dskit_tokens::{Platform, TokenError, VariationKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// The default catalog names a token one of the value tables lacks.
    #[error("default token `{name}` ({kind}) has no {platform} value")]
    MissingDefaultValue {
        name: String,
        kind: VariationKind,
        platform: Platform,
    },

    #[error("token not found: `{name}` ({kind}) has no {platform} entry")]
    TokenNotFound {
        name: String,
        kind: VariationKind,
        platform: Platform,
    },

    #[error("invalid theme config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Token(#[from] TokenError),
}
