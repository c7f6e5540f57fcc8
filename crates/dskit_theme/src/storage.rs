//! Storage shapes exchanged with persistence and code generators

use dskit_tokens::{Platform, TokenMeta, VariationKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Theme-level metadata document (`meta.json` in archives)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub tokens: Vec<TokenMeta>,
}

/// Raw values keyed by token name
pub type PlatformTokens = IndexMap<String, Value>;

/// `variation -> platform -> token name -> raw value`
pub type PlatformsVariations = IndexMap<VariationKind, IndexMap<Platform, PlatformTokens>>;

/// A stored theme: metadata plus raw per-platform values
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeData {
    pub meta: ThemeMeta,
    #[serde(default)]
    pub variations: PlatformsVariations,
}

/// Insert one raw value, creating intermediate maps as needed.
pub fn insert_variation_value(
    variations: &mut PlatformsVariations,
    kind: VariationKind,
    platform: Platform,
    name: impl Into<String>,
    value: Value,
) {
    variations
        .entry(kind)
        .or_default()
        .entry(platform)
        .or_default()
        .insert(name.into(), value);
}

/// Look up one raw value.
pub fn variation_value<'a>(
    variations: &'a PlatformsVariations,
    kind: VariationKind,
    platform: Platform,
    name: &str,
) -> Option<&'a Value> {
    variations.get(&kind)?.get(&platform)?.get(name)
}
