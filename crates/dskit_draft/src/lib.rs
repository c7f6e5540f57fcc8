//! Local drafts of theme edits
//!
//! Pending token edits are kept per design-system version under
//! `ds_draft:{name}:{version}` and replayed onto a freshly loaded theme.
//!
//! ```rust
//! use dskit_draft::{DraftAction, DraftOverlay, MemoryDraftStore};
//! use dskit_theme::{build_default_theme, DefaultThemeConfig};
//! use dskit_tokens::{Platform, VariationKind};
//! use serde_json::json;
//!
//! let mut theme = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();
//! let mut overlay = DraftOverlay::new(MemoryDraftStore::new());
//!
//! let token = theme.token_mut("round.m", VariationKind::Shape).unwrap();
//! token.set_value(Platform::Web, json!("14px")).unwrap();
//! overlay
//!     .update_token_change("acme", "0.1.0", token, DraftAction::Save)
//!     .unwrap();
//!
//! let mut reloaded = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();
//! let report = overlay.apply_draft_changes(&mut reloaded, "acme", "0.1.0").unwrap();
//! assert_eq!(report.applied, 1);
//! ```

mod change;
mod error;
mod overlay;
mod store;

pub use change::{draft_key, DraftAction, DraftChange, DraftChanges, DraftValues};
pub use error::DraftError;
pub use overlay::{ApplyReport, DraftOverlay};
pub use store::{DraftStore, FileDraftStore, MemoryDraftStore};
