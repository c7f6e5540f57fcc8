//! Tokens: metadata plus one value per platform

use serde_json::Value;

use crate::meta::{TokenMeta, TokenPath};
use crate::platform::{Platform, VariationKind};
use crate::value::PlatformValue;
use crate::values::TokenValue;
use crate::TokenError;

/// A named design value with a representation for every platform
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    meta: TokenMeta,
    values: [PlatformValue; 3],
}

impl Token {
    /// Build a token from raw JSON payloads. Fails unless all three platforms are present.
    pub fn new(
        meta: TokenMeta,
        values: impl IntoIterator<Item = (Platform, Value)>,
    ) -> Result<Self, TokenError> {
        let mut slots: [Option<PlatformValue>; 3] = [None, None, None];
        for (platform, raw) in values {
            slots[platform.index()] = Some(PlatformValue::new(meta.kind(), platform, raw)?);
        }
        Self::from_slots(meta, slots)
    }

    /// Build a token from decoded values, one per platform.
    pub fn from_values(
        meta: TokenMeta,
        web: TokenValue,
        ios: TokenValue,
        android: TokenValue,
    ) -> Result<Self, TokenError> {
        let kind = meta.kind();
        let slots = [
            Some(PlatformValue::from_value(kind, Platform::Web, web)?),
            Some(PlatformValue::from_value(kind, Platform::Ios, ios)?),
            Some(PlatformValue::from_value(kind, Platform::Android, android)?),
        ];
        Self::from_slots(meta, slots)
    }

    fn from_slots(meta: TokenMeta, slots: [Option<PlatformValue>; 3]) -> Result<Self, TokenError> {
        let [web, ios, android] = slots;
        let missing = |platform| TokenError::MissingPlatform {
            name: meta.name().to_string(),
            kind: meta.kind(),
            platform,
        };
        let values = [
            web.ok_or_else(|| missing(Platform::Web))?,
            ios.ok_or_else(|| missing(Platform::Ios))?,
            android.ok_or_else(|| missing(Platform::Android))?,
        ];
        Ok(Self { meta, values })
    }

    pub fn meta(&self) -> &TokenMeta {
        &self.meta
    }

    pub fn name(&self) -> &str {
        self.meta.name()
    }

    pub fn kind(&self) -> VariationKind {
        self.meta.kind()
    }

    pub fn path(&self) -> &TokenPath {
        self.meta.path()
    }

    pub fn tags(&self) -> Vec<String> {
        self.meta.tags()
    }

    pub fn display_name(&self) -> &str {
        self.meta.display_name()
    }

    pub fn description(&self) -> Option<&str> {
        self.meta.description()
    }

    pub fn is_enabled(&self) -> bool {
        self.meta.enabled()
    }

    pub fn platform_value(&self, platform: Platform) -> &PlatformValue {
        &self.values[platform.index()]
    }

    pub fn value(&self, platform: Platform) -> &TokenValue {
        self.platform_value(platform).value()
    }

    pub fn default_value(&self, platform: Platform) -> &TokenValue {
        self.platform_value(platform).default_value()
    }

    /// Raw JSON of the current value on `platform`
    pub fn value_json(&self, platform: Platform) -> Result<Value, TokenError> {
        self.value(platform).to_json()
    }

    /// Update one platform through its policy (replace or shallow merge).
    pub fn set_value(&mut self, platform: Platform, raw: Value) -> Result<(), TokenError> {
        self.values[platform.index()].set_value(raw)
    }

    /// Overwrite one platform value regardless of policy.
    pub fn replace_value(&mut self, platform: Platform, raw: Value) -> Result<(), TokenError> {
        self.values[platform.index()].replace(raw)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.meta.set_enabled(enabled);
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.meta.set_description(description);
    }

    /// True when any platform value differs from its construction baseline.
    pub fn is_modified(&self) -> bool {
        self.values.iter().any(PlatformValue::is_modified)
    }

    pub fn reset(&mut self) {
        for value in &mut self.values {
            value.reset();
        }
    }
}
