//! Token naming and metadata
//!
//! Token names are dot paths (`dark.text.default.primary`). The hierarchy is
//! kept in named fields on [`TokenPath`]; `name` and `tags` are rendered from
//! it, so the two can never diverge.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::platform::VariationKind;
use crate::TokenError;

/// Structured form of a token's dot-path name
///
/// - `mode.leaf` (`round.m`, `spacing.4x`)
/// - `mode.category.leaf` (`down.soft.m`, `screen-s.body.m`)
/// - `mode.category.subcategory.leaf` (`dark.text.default.primary`)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenPath {
    mode: String,
    category: Option<String>,
    subcategory: Option<String>,
    leaf: String,
}

impl TokenPath {
    pub fn flat(mode: impl Into<String>, leaf: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            category: None,
            subcategory: None,
            leaf: leaf.into(),
        }
    }

    pub fn nested(
        mode: impl Into<String>,
        category: impl Into<String>,
        leaf: impl Into<String>,
    ) -> Self {
        Self {
            mode: mode.into(),
            category: Some(category.into()),
            subcategory: None,
            leaf: leaf.into(),
        }
    }

    pub fn full(
        mode: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        leaf: impl Into<String>,
    ) -> Self {
        Self {
            mode: mode.into(),
            category: Some(category.into()),
            subcategory: Some(subcategory.into()),
            leaf: leaf.into(),
        }
    }

    pub fn parse(name: &str) -> Result<Self, TokenError> {
        let invalid = |reason| TokenError::InvalidName {
            name: name.to_string(),
            reason,
        };

        let segments: Vec<&str> = name.split('.').collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("empty path segment"));
        }

        match segments.as_slice() {
            [mode, leaf] => Ok(Self::flat(*mode, *leaf)),
            [mode, category, leaf] => Ok(Self::nested(*mode, *category, *leaf)),
            [mode, category, subcategory, leaf] => {
                Ok(Self::full(*mode, *category, *subcategory, *leaf))
            }
            [_] => Err(invalid("expected at least two segments")),
            _ => Err(invalid("expected at most four segments")),
        }
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// Same path with another leaf
    pub fn with_leaf(&self, leaf: impl Into<String>) -> Self {
        Self {
            leaf: leaf.into(),
            ..self.clone()
        }
    }

    /// Path components in order: the positional tag view of the path.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = vec![self.mode.clone()];
        tags.extend(self.category.clone());
        tags.extend(self.subcategory.clone());
        tags.push(self.leaf.clone());
        tags
    }

    pub fn name(&self) -> String {
        self.tags().join(".")
    }

    fn validate(&self) -> Result<(), TokenError> {
        let segments = [
            Some(self.mode.as_str()),
            self.category.as_deref(),
            self.subcategory.as_deref(),
            Some(self.leaf.as_str()),
        ];
        for segment in segments.into_iter().flatten() {
            if segment.trim().is_empty() || segment.contains('.') {
                return Err(TokenError::InvalidName {
                    name: self.name(),
                    reason: "path segments must be non-empty and dot-free",
                });
            }
        }
        Ok(())
    }
}

impl Display for TokenPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for TokenPath {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Token metadata as exchanged with persistence and codegen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TokenMetaRepr", into = "TokenMetaRepr")]
pub struct TokenMeta {
    kind: VariationKind,
    path: TokenPath,
    name: String,
    display_name: String,
    description: Option<String>,
    enabled: bool,
    derived: bool,
}

impl TokenMeta {
    pub fn new(
        kind: VariationKind,
        path: TokenPath,
        display_name: impl Into<String>,
    ) -> Result<Self, TokenError> {
        path.validate()?;
        Ok(Self {
            kind,
            name: path.name(),
            path,
            display_name: display_name.into(),
            description: None,
            enabled: true,
            derived: false,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> VariationKind {
        self.kind
    }

    pub fn path(&self) -> &TokenPath {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> Vec<String> {
        self.path.tags()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Marks an entry generated from another token. Marked entries are
    /// emitted when flattening and skipped when a theme is rebuilt.
    pub fn mark_derived(mut self) -> Self {
        self.derived = true;
        self
    }

    pub fn is_derived(&self) -> bool {
        self.derived
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenMetaRepr {
    #[serde(rename = "type")]
    kind: VariationKind,
    name: String,
    tags: Vec<String>,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    derived: bool,
}

fn default_enabled() -> bool {
    true
}

impl TryFrom<TokenMetaRepr> for TokenMeta {
    type Error = TokenError;

    fn try_from(repr: TokenMetaRepr) -> Result<Self, Self::Error> {
        let path = TokenPath::parse(&repr.name)?;
        if path.tags() != repr.tags {
            return Err(TokenError::TagMismatch {
                name: repr.name,
                tags: repr.tags,
            });
        }

        let mut meta = TokenMeta::new(repr.kind, path, repr.display_name)?;
        meta.description = repr.description;
        meta.enabled = repr.enabled;
        meta.derived = repr.derived;
        Ok(meta)
    }
}

impl From<TokenMeta> for TokenMetaRepr {
    fn from(meta: TokenMeta) -> Self {
        Self {
            kind: meta.kind,
            tags: meta.path.tags(),
            name: meta.name,
            display_name: meta.display_name,
            description: meta.description,
            enabled: meta.enabled,
            derived: meta.derived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parse_fills_named_fields() {
        let path = TokenPath::parse("dark.text.default.primary").unwrap();
        assert_eq!(path.mode(), "dark");
        assert_eq!(path.category(), Some("text"));
        assert_eq!(path.subcategory(), Some("default"));
        assert_eq!(path.leaf(), "primary");
        assert_eq!(path.tags(), vec!["dark", "text", "default", "primary"]);

        let flat = TokenPath::parse("round.m").unwrap();
        assert_eq!(flat.category(), None);
        assert_eq!(flat.name(), "round.m");
    }

    #[test]
    fn parse_rejects_bad_depth() {
        assert!(TokenPath::parse("single").is_err());
        assert!(TokenPath::parse("a.b.c.d.e").is_err());
        assert!(TokenPath::parse("dark..primary").is_err());
    }

    #[test]
    fn builder_rejects_dotted_segments() {
        let path = TokenPath::flat("round", "m.l");
        assert!(TokenMeta::new(VariationKind::Shape, path, "m").is_err());
    }

    #[test]
    fn serializes_wire_shape() {
        let meta = TokenMeta::new(
            VariationKind::Color,
            TokenPath::full("dark", "text", "default", "primary"),
            "primary",
        )
        .unwrap()
        .with_description("Main text color");

        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "type": "color",
                "name": "dark.text.default.primary",
                "tags": ["dark", "text", "default", "primary"],
                "displayName": "primary",
                "description": "Main text color",
                "enabled": true,
            })
        );
    }

    #[test]
    fn diverging_tags_are_rejected() {
        let raw = json!({
            "type": "color",
            "name": "dark.text.default.primary",
            "tags": ["dark", "text", "primary"],
            "displayName": "primary",
            "enabled": true,
        });
        assert!(serde_json::from_value::<TokenMeta>(raw).is_err());
    }

    #[test]
    fn enabled_defaults_to_true() {
        let raw = json!({
            "type": "shape",
            "name": "round.m",
            "tags": ["round", "m"],
            "displayName": "m",
        });
        let meta: TokenMeta = serde_json::from_value(raw).unwrap();
        assert!(meta.enabled());
        assert_eq!(meta.description(), None);
    }

    #[test]
    fn derived_marker_survives_serde() {
        let meta = TokenMeta::new(
            VariationKind::Color,
            TokenPath::parse("dark.text.default.primary-hover").unwrap(),
            "primary-hover",
        )
        .unwrap();
        let plain = serde_json::to_value(&meta).unwrap();
        assert_eq!(plain.get("derived"), None);

        let marked = serde_json::to_value(meta.clone().mark_derived()).unwrap();
        assert_eq!(marked["derived"], json!(true));
        let back: TokenMeta = serde_json::from_value(marked).unwrap();
        assert!(back.is_derived());
        assert!(!serde_json::from_value::<TokenMeta>(plain).unwrap().is_derived());
    }
}
