//! Applying and recording draft changes

use dskit_theme::Theme;
use dskit_tokens::{Platform, Token};
use tracing::{debug, info};

use crate::change::{draft_key, DraftAction, DraftChange, DraftChanges};
use crate::store::DraftStore;
use crate::DraftError;

/// Outcome of applying drafts to a theme
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Tokens overwritten from their draft
    pub applied: usize,
    /// Draft entries naming a token the theme does not have
    pub skipped: Vec<String>,
}

/// Draft changes of design systems, persisted through a [`DraftStore`]
#[derive(Debug, Default)]
pub struct DraftOverlay<S> {
    store: S,
}

impl<S: DraftStore> DraftOverlay<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Pending changes of `name`@`version`, empty when none are stored
    pub fn changes(&self, name: &str, version: &str) -> Result<DraftChanges, DraftError> {
        Ok(self.store.load(&draft_key(name, version))?.unwrap_or_default())
    }

    /// Record or drop the draft of `token`.
    ///
    /// An empty change map removes the storage key instead of saving `{}`.
    pub fn update_token_change(
        &mut self,
        name: &str,
        version: &str,
        token: &Token,
        action: DraftAction,
    ) -> Result<(), DraftError> {
        let key = draft_key(name, version);
        let mut changes = self.store.load(&key)?.unwrap_or_default();

        match action {
            DraftAction::Save | DraftAction::Toggle => {
                changes.insert(token.name().to_string(), DraftChange::from_token(token)?);
            }
            DraftAction::Remove => {
                changes.shift_remove(token.name());
            }
        }

        if changes.is_empty() {
            self.store.clear(&key)
        } else {
            self.store.save(&key, &changes)
        }
    }

    /// Overwrite tokens of `theme` with their drafted state.
    ///
    /// Entries whose token is missing from `theme` are skipped; drafts never
    /// add tokens.
    pub fn apply_draft_changes(
        &self,
        theme: &mut Theme,
        name: &str,
        version: &str,
    ) -> Result<ApplyReport, DraftError> {
        let mut report = ApplyReport::default();
        for (token_name, change) in self.changes(name, version)? {
            let Some(token) = theme.token_mut(&token_name, change.kind) else {
                debug!("Draft for `{token_name}` ({}) has no token in the theme", change.kind);
                report.skipped.push(token_name);
                continue;
            };

            for platform in Platform::all().iter().copied() {
                token.replace_value(platform, change.values.get(platform).clone())?;
            }
            if change.description.is_some() {
                token.set_description(change.description);
            }
            token.set_enabled(change.enabled);
            report.applied += 1;
        }

        if report.applied > 0 || !report.skipped.is_empty() {
            info!(
                "Applied {} draft changes to {name}@{version}, skipped {}",
                report.applied,
                report.skipped.len()
            );
        }
        Ok(report)
    }

    /// Drop every pending change of `name`@`version`.
    pub fn discard(&mut self, name: &str, version: &str) -> Result<(), DraftError> {
        self.store.clear(&draft_key(name, version))
    }
}
