//! Design system error types

use std::path::PathBuf;

use dskit_archive::ArchiveError;
use dskit_components::ConfigError;
use dskit_draft::DraftError;
use dskit_theme::ThemeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignSystemError {
    /// Reading or writing a stored design system failed
    #[error("design system store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored document is not a design system
    #[error("malformed design system data: {0}")]
    Json(#[from] serde_json::Error),

    /// Name or version cannot be used as a storage key
    #[error("invalid design system key `{0}`")]
    InvalidKey(String),

    /// Record stored under one key holds a theme with another identity
    #[error("record `{requested}` holds design system `{stored}`")]
    IdentityMismatch { requested: String, stored: String },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Result type for design system operations
pub type Result<T> = std::result::Result<T, DesignSystemError>;
