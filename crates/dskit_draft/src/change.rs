//! Draft records

use dskit_tokens::{Platform, Token, TokenError, VariationKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full per-platform values of a drafted token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftValues {
    pub web: Value,
    pub ios: Value,
    pub android: Value,
}

impl DraftValues {
    pub fn get(&self, platform: Platform) -> &Value {
        match platform {
            Platform::Web => &self.web,
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }
}

/// Pending edit of one token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftChange {
    #[serde(rename = "type")]
    pub kind: VariationKind,
    pub values: DraftValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
}

impl DraftChange {
    /// Snapshot the current state of `token`.
    pub fn from_token(token: &Token) -> Result<Self, TokenError> {
        Ok(Self {
            kind: token.kind(),
            values: DraftValues {
                web: token.value_json(Platform::Web)?,
                ios: token.value_json(Platform::Ios)?,
                android: token.value_json(Platform::Android)?,
            },
            description: token.description().map(str::to_string),
            enabled: token.is_enabled(),
        })
    }
}

/// Draft records keyed by token name
pub type DraftChanges = IndexMap<String, DraftChange>;

/// What to do with a token's draft record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftAction {
    /// Record the token's edited values
    Save,
    /// Record the token after its enabled flag was flipped
    Toggle,
    /// Drop the token's record
    Remove,
}

/// Storage key of the drafts of one design-system version
pub fn draft_key(name: &str, version: &str) -> String {
    format!("ds_draft:{name}:{version}")
}
