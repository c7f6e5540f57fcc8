//! Default theme generation
//!
//! Each variation kind has a catalog of default token names and a set of
//! per-platform value tables. The two are kept in lock-step: a catalog name
//! without a value on some platform is a catalog bug and aborts generation.

mod color;
mod gradient;
mod shadow;
mod shape;
mod spacing;
mod typography;

use dskit_tokens::{Platform, Token, TokenMeta, TokenPath, TokenValue, VariationKind};
use tracing::info;

use crate::palette::DefaultThemeConfig;
use crate::theme::Theme;
use crate::ThemeError;

pub(crate) use color::{ink, scheme_for};

/// One catalog entry
pub(crate) struct DefaultEntry {
    pub path: TokenPath,
    pub description: Option<&'static str>,
}

impl DefaultEntry {
    pub fn new(path: TokenPath) -> Self {
        Self {
            path,
            description: None,
        }
    }

    pub fn described(path: TokenPath, description: &'static str) -> Self {
        Self {
            path,
            description: Some(description),
        }
    }
}

/// Default token catalog plus value tables for one variation kind
pub(crate) trait DefaultCatalog {
    const KIND: VariationKind;

    fn entries(&self) -> Vec<DefaultEntry>;

    /// Value of a catalog token on `platform`; `None` if the table lacks it.
    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue>;
}

/// Expand a palette configuration into the full default token set.
///
/// Output is a pure function of `config`.
pub fn build_default_theme(config: &DefaultThemeConfig) -> Result<Theme, ThemeError> {
    let palette = config.resolve()?;
    let mut theme = Theme::new(&config.name, &config.version);

    assemble(&mut theme, &color::ColorDefaults::new(&palette))?;
    assemble(&mut theme, &gradient::GradientDefaults::new(&palette))?;
    assemble(&mut theme, &shadow::ShadowDefaults)?;
    assemble(&mut theme, &shape::ShapeDefaults)?;
    assemble(&mut theme, &spacing::SpacingDefaults)?;
    assemble(&mut theme, &typography::TypographyDefaults)?;
    assemble(&mut theme, &typography::FontFamilyDefaults)?;

    info!(
        "Generated default theme `{}` {} with {} tokens",
        theme.name(),
        theme.version(),
        theme.len()
    );
    Ok(theme)
}

fn assemble<C: DefaultCatalog>(theme: &mut Theme, catalog: &C) -> Result<(), ThemeError> {
    for entry in catalog.entries() {
        let name = entry.path.name();
        let lookup = |platform| {
            catalog
                .value(&entry.path, platform)
                .ok_or_else(|| ThemeError::MissingDefaultValue {
                    name: name.clone(),
                    kind: C::KIND,
                    platform,
                })
        };
        let web = lookup(Platform::Web)?;
        let ios = lookup(Platform::Ios)?;
        let android = lookup(Platform::Android)?;

        let display_name = entry.path.leaf().to_string();
        let mut meta = TokenMeta::new(C::KIND, entry.path, display_name)?;
        if let Some(description) = entry.description {
            meta = meta.with_description(description);
        }

        theme.add_token(C::KIND, Token::from_values(meta, web, ios, android)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lopsided;

    impl DefaultCatalog for Lopsided {
        const KIND: VariationKind = VariationKind::Shape;

        fn entries(&self) -> Vec<DefaultEntry> {
            vec![DefaultEntry::new(TokenPath::flat("round", "m"))]
        }

        fn value(&self, _path: &TokenPath, platform: Platform) -> Option<TokenValue> {
            match platform {
                Platform::Web => Some(TokenValue::WebShape("12px".to_string())),
                _ => None,
            }
        }
    }

    #[test]
    fn missing_table_value_is_fatal() {
        let mut theme = Theme::new("test", "0.1.0");
        let err = assemble(&mut theme, &Lopsided).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::MissingDefaultValue {
                kind: VariationKind::Shape,
                platform: Platform::Ios,
                ..
            }
        ));
    }
}
