//! Target platforms and token variation kinds

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TokenError;

/// Code generation target. Every token carries one value per platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Ios,
    Android,
}

impl Platform {
    /// Stable id used in archive member names and JSON keys.
    pub fn id(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    pub fn all() -> &'static [Platform] {
        const PLATFORMS: [Platform; 3] = [Platform::Web, Platform::Ios, Platform::Android];
        &PLATFORMS
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Web => 0,
            Self::Ios => 1,
            Self::Android => 2,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::all()
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| TokenError::UnknownPlatform(s.to_string()))
    }
}

/// Token category. Each kind has its own payload shape per platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariationKind {
    Color,
    Gradient,
    Shadow,
    Shape,
    Spacing,
    Typography,
    FontFamily,
}

impl VariationKind {
    /// Stable id used in archive member names and JSON keys.
    pub fn id(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Gradient => "gradient",
            Self::Shadow => "shadow",
            Self::Shape => "shape",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::FontFamily => "fontFamily",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Gradient => "Gradient",
            Self::Shadow => "Shadow",
            Self::Shape => "Shape",
            Self::Spacing => "Spacing",
            Self::Typography => "Typography",
            Self::FontFamily => "Font family",
        }
    }

    pub fn all() -> &'static [VariationKind] {
        const KINDS: [VariationKind; 7] = [
            VariationKind::Color,
            VariationKind::Gradient,
            VariationKind::Shadow,
            VariationKind::Shape,
            VariationKind::Spacing,
            VariationKind::Typography,
            VariationKind::FontFamily,
        ];
        &KINDS
    }
}

impl Display for VariationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for VariationKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VariationKind::all()
            .iter()
            .copied()
            .find(|k| k.id() == s)
            .ok_or_else(|| TokenError::UnknownVariation(s.to_string()))
    }
}
