use std::path::PathBuf;

use dskit_tokens::TokenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed draft data: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Token(#[from] TokenError),
}
