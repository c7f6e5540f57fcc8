//! dskit
//!
//! Multi-platform design tokens and theme assembly. This crate re-exports the
//! workspace crates and adds the design-system boundary: a [`DesignSystem`]
//! is a theme plus component configs, loaded through a [`DesignSystemSource`]
//! and overlaid with local drafts.
//!
//! ```rust
//! use dskit::prelude::*;
//!
//! let source = MemoryDesignSystemSource::new();
//! let drafts = DraftOverlay::new(MemoryDraftStore::new());
//!
//! // Nothing stored yet: defaults are generated.
//! let (system, _) = DesignSystem::load(&source, &drafts, &DefaultThemeConfig::new("acme")).unwrap();
//! assert_eq!(system.origin(), Origin::Generated);
//! assert!(system.theme().token("round.m", VariationKind::Shape).is_some());
//! ```

mod data;
mod error;
mod session;
mod source;

pub use data::{design_system_key, DesignSystemData};
pub use error::{DesignSystemError, Result};
pub use session::{DesignSystem, Origin};
pub use source::{DesignSystemSource, FsDesignSystemSource, MemoryDesignSystemSource};

pub use dskit_archive as archive;
pub use dskit_components as components;
pub use dskit_draft as draft;
pub use dskit_theme as theme;
pub use dskit_tokens as tokens;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::{
        DesignSystem, DesignSystemData, DesignSystemError, DesignSystemSource,
        FsDesignSystemSource, MemoryDesignSystemSource, Origin,
    };

    pub use dskit_archive::{ThemeArchiveCodec, ZipThemeCodec};
    pub use dskit_components::{ComponentMeta, Config};
    pub use dskit_draft::{DraftAction, DraftOverlay, FileDraftStore, MemoryDraftStore};
    pub use dskit_theme::{
        build_default_theme, build_theme, group_tokens, DefaultThemeConfig, Theme, ThemeData,
    };
    pub use dskit_tokens::{Platform, Token, VariationKind};
}
