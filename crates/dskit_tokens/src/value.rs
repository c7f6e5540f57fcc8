//! Per-platform value holders
//!
//! A [`PlatformValue`] keeps the current value of one token on one platform
//! together with the value it was constructed with. Updates go through the
//! [`ValueStrategy`] registered for the (kind, platform) pair, which decides
//! whether an incoming payload replaces the stored value or is shallow-merged
//! onto it.

use serde_json::Value;

use crate::platform::{Platform, VariationKind};
use crate::values::TokenValue;
use crate::TokenError;

/// How `set_value` combines an incoming payload with the stored one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// The payload becomes the new value.
    Replace,
    /// Top-level payload keys overwrite stored keys; other keys are kept.
    Merge,
}

/// Decoding and update rules for one (kind, platform) pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueStrategy {
    pub kind: VariationKind,
    pub platform: Platform,
    pub policy: UpdatePolicy,
}

const fn strategy(kind: VariationKind, platform: Platform, policy: UpdatePolicy) -> ValueStrategy {
    ValueStrategy {
        kind,
        platform,
        policy,
    }
}

/// Strategy table, indexed by kind then platform (web, ios, android).
static STRATEGIES: [[ValueStrategy; 3]; 7] = {
    use Platform::*;
    use UpdatePolicy::*;
    use VariationKind::*;
    [
        [
            strategy(Color, Web, Replace),
            strategy(Color, Ios, Replace),
            strategy(Color, Android, Replace),
        ],
        [
            strategy(Gradient, Web, Replace),
            strategy(Gradient, Ios, Replace),
            strategy(Gradient, Android, Replace),
        ],
        [
            strategy(Shadow, Web, Replace),
            strategy(Shadow, Ios, Replace),
            strategy(Shadow, Android, Replace),
        ],
        [
            strategy(Shape, Web, Replace),
            strategy(Shape, Ios, Merge),
            strategy(Shape, Android, Merge),
        ],
        [
            strategy(Spacing, Web, Replace),
            strategy(Spacing, Ios, Merge),
            strategy(Spacing, Android, Merge),
        ],
        [
            strategy(Typography, Web, Replace),
            strategy(Typography, Ios, Merge),
            strategy(Typography, Android, Merge),
        ],
        [
            strategy(FontFamily, Web, Replace),
            strategy(FontFamily, Ios, Replace),
            strategy(FontFamily, Android, Replace),
        ],
    ]
};

impl ValueStrategy {
    /// Look up the strategy registered for a pair
    pub fn for_pair(kind: VariationKind, platform: Platform) -> &'static ValueStrategy {
        let row = match kind {
            VariationKind::Color => 0,
            VariationKind::Gradient => 1,
            VariationKind::Shadow => 2,
            VariationKind::Shape => 3,
            VariationKind::Spacing => 4,
            VariationKind::Typography => 5,
            VariationKind::FontFamily => 6,
        };
        &STRATEGIES[row][platform.index()]
    }

    pub fn decode(&self, raw: Value) -> Result<TokenValue, TokenError> {
        TokenValue::decode(self.kind, self.platform, raw)
    }

    /// Combine `incoming` with `current` according to the policy.
    pub fn apply(&self, current: &TokenValue, incoming: Value) -> Result<TokenValue, TokenError> {
        match self.policy {
            UpdatePolicy::Replace => self.decode(incoming),
            UpdatePolicy::Merge => {
                let merged = match (current.to_json()?, incoming) {
                    (Value::Object(mut stored), Value::Object(patch)) => {
                        for (key, value) in patch {
                            stored.insert(key, value);
                        }
                        Value::Object(stored)
                    }
                    (_, other) => other,
                };
                self.decode(merged)
            }
        }
    }
}

/// Value of one token on one platform
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformValue {
    strategy: &'static ValueStrategy,
    value: TokenValue,
    default: TokenValue,
}

impl PlatformValue {
    /// Decode `raw` for the pair; the decoded value also becomes the baseline.
    pub fn new(kind: VariationKind, platform: Platform, raw: Value) -> Result<Self, TokenError> {
        let strategy = ValueStrategy::for_pair(kind, platform);
        let value = strategy.decode(raw)?;
        Ok(Self {
            strategy,
            default: value.clone(),
            value,
        })
    }

    /// Wrap an already decoded value.
    pub fn from_value(
        kind: VariationKind,
        platform: Platform,
        value: TokenValue,
    ) -> Result<Self, TokenError> {
        if !value.fits(kind, platform) {
            return Err(TokenError::ValueMismatch { kind, platform });
        }
        Ok(Self {
            strategy: ValueStrategy::for_pair(kind, platform),
            default: value.clone(),
            value,
        })
    }

    pub fn kind(&self) -> VariationKind {
        self.strategy.kind
    }

    pub fn platform(&self) -> Platform {
        self.strategy.platform
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.strategy.policy
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// The value captured at construction. Never changes.
    pub fn default_value(&self) -> &TokenValue {
        &self.default
    }

    /// Update through the pair's policy. On error the stored value is untouched.
    pub fn set_value(&mut self, raw: Value) -> Result<(), TokenError> {
        self.value = self.strategy.apply(&self.value, raw)?;
        Ok(())
    }

    /// Overwrite regardless of policy.
    pub fn replace(&mut self, raw: Value) -> Result<(), TokenError> {
        self.value = self.strategy.decode(raw)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    pub fn is_modified(&self) -> bool {
        self.value != self.default
    }
}
