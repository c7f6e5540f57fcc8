use std::path::PathBuf;

use dskit_theme::ThemeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot access archive {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("archive member `{member}` is not valid JSON: {source}")]
    Json {
        member: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("archive has no theme meta document")]
    MissingMeta,

    #[error(transparent)]
    Theme(#[from] ThemeError),
}
