//! Configurable props exposed by a component

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value type of a component prop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropType {
    Color,
    Gradient,
    Shadow,
    Shape,
    Typography,
    Dimension,
    Float,
    Value,
}

impl PropType {
    pub fn id(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Gradient => "gradient",
            Self::Shadow => "shadow",
            Self::Shape => "shape",
            Self::Typography => "typography",
            Self::Dimension => "dimension",
            Self::Float => "float",
            Self::Value => "value",
        }
    }

    /// Whether values of this type are token names rather than literals
    pub fn is_token_ref(self) -> bool {
        matches!(
            self,
            Self::Color | Self::Gradient | Self::Shadow | Self::Shape | Self::Typography
        )
    }
}

impl Display for PropType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One native styling hook a prop maps onto
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMapping {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<String>,
}

impl PlatformMapping {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjustment: None,
        }
    }

    pub fn adjusted(name: impl Into<String>, adjustment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjustment: Some(adjustment.into()),
        }
    }
}

/// Per-platform mappings; Android has both XML views and Compose
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformMappings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<Vec<PlatformMapping>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compose: Option<Vec<PlatformMapping>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<Vec<PlatformMapping>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<Vec<PlatformMapping>>,
}

/// A configurable prop of a UI component
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentApi {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: PropType,
    #[serde(default)]
    pub platform_mappings: PlatformMappings,
}

impl ComponentApi {
    pub fn new(name: impl Into<String>, prop_type: PropType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            prop_type,
            platform_mappings: PlatformMappings::default(),
        }
    }

    pub fn with_mappings(mut self, mappings: PlatformMappings) -> Self {
        self.platform_mappings = mappings;
        self
    }
}
