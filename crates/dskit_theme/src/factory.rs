//! Reconstruction of themes from storage, and the inverse projection

use dskit_tokens::{Platform, Token};
use tracing::{debug, info};

use crate::formulas::derived_tokens;
use crate::storage::{
    insert_variation_value, variation_value, PlatformsVariations, ThemeData, ThemeMeta,
};
use crate::theme::Theme;
use crate::ThemeError;

/// Rebuild a theme from its stored metadata and raw per-platform values.
///
/// Every declared token must have an entry for all three platforms; the first
/// gap aborts with [`ThemeError::TokenNotFound`]. Entries marked derived, as
/// written by [`create_meta_tokens`], are left out.
pub fn build_theme(meta: &ThemeMeta, variations: &PlatformsVariations) -> Result<Theme, ThemeError> {
    let mut theme = Theme::new(&meta.name, &meta.version);

    for token_meta in &meta.tokens {
        if token_meta.is_derived() {
            debug!("Skipping derived state token `{}`", token_meta.name());
            continue;
        }

        let kind = token_meta.kind();
        let mut values = Vec::with_capacity(Platform::all().len());
        for platform in Platform::all().iter().copied() {
            let raw = variation_value(variations, kind, platform, token_meta.name()).ok_or_else(
                || ThemeError::TokenNotFound {
                    name: token_meta.name().to_string(),
                    kind,
                    platform,
                },
            )?;
            values.push((platform, raw.clone()));
        }

        theme.add_token(kind, Token::new(token_meta.clone(), values)?);
    }

    info!(
        "Built theme `{}` {} with {} tokens",
        theme.name(),
        theme.version(),
        theme.len()
    );
    Ok(theme)
}

/// Flatten token metadata, derived state tokens included.
pub fn create_meta_tokens(theme: &Theme) -> ThemeMeta {
    let derived = derived_tokens(theme);
    meta_of(theme, &derived)
}

/// Flatten per-platform values, derived state tokens included.
pub fn create_variation_tokens(theme: &Theme) -> Result<PlatformsVariations, ThemeError> {
    let derived = derived_tokens(theme);
    variations_of(theme, &derived)
}

fn meta_of(theme: &Theme, derived: &[Token]) -> ThemeMeta {
    ThemeMeta {
        name: theme.name().to_string(),
        version: theme.version().to_string(),
        tokens: theme
            .iter()
            .chain(derived)
            .map(|token| token.meta().clone())
            .collect(),
    }
}

fn variations_of(theme: &Theme, derived: &[Token]) -> Result<PlatformsVariations, ThemeError> {
    let mut variations = PlatformsVariations::new();
    for token in theme.iter().chain(derived) {
        for platform in Platform::all().iter().copied() {
            insert_variation_value(
                &mut variations,
                token.kind(),
                platform,
                token.name(),
                token.value_json(platform)?,
            );
        }
    }
    Ok(variations)
}

impl ThemeData {
    /// Storage form of `theme`
    pub fn from_theme(theme: &Theme) -> Result<Self, ThemeError> {
        let derived = derived_tokens(theme);
        Ok(Self {
            meta: meta_of(theme, &derived),
            variations: variations_of(theme, &derived)?,
        })
    }

    pub fn build(&self) -> Result<Theme, ThemeError> {
        build_theme(&self.meta, &self.variations)
    }
}
