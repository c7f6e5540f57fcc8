//! Typography and font family payloads

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

impl FontWeight {
    /// Numeric CSS weight
    pub fn css(self) -> &'static str {
        match self {
            Self::Thin => "100",
            Self::Light => "300",
            Self::Regular => "400",
            Self::Medium => "500",
            Self::Semibold => "600",
            Self::Bold => "700",
            Self::Heavy => "900",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    pub fn css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Web typography: CSS property strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebTypography {
    pub font_family_ref: String,
    pub font_weight: String,
    pub font_style: String,
    pub font_size: String,
    pub line_height: String,
    pub letter_spacing: String,
}

/// iOS / Android typography in points (dp on Android)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTypography {
    pub font_family_ref: String,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub size: f64,
    pub line_height: f64,
    pub kerning: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebFontFace {
    pub src: Vec<String>,
    pub font_weight: String,
    pub font_style: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebFontFamily {
    pub name: String,
    pub fonts: Vec<WebFontFace>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeFontFace {
    pub name: String,
    pub weight: FontWeight,
    pub style: FontStyle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeFontFamily {
    pub name: String,
    pub fonts: Vec<NativeFontFace>,
}
