//! Color payloads

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::TokenError;

/// iOS color: unit-range RGBA components
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IosColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl From<Color> for IosColor {
    fn from(color: Color) -> Self {
        let [red, green, blue, alpha] = color.to_unit_array();
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl From<IosColor> for Color {
    fn from(color: IosColor) -> Self {
        Color::rgba(
            color.red as f32,
            color.green as f32,
            color.blue as f32,
            color.alpha as f32,
        )
    }
}

/// Web color string, `#RRGGBB` or `#RRGGBBAA`
///
/// Only used to validate payloads while decoding.
#[derive(Deserialize)]
#[serde(try_from = "String")]
pub(super) struct CssHexColor(pub String);

impl TryFrom<String> for CssHexColor {
    type Error = TokenError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Color::parse(&hex)?;
        Ok(Self(hex))
    }
}

/// Android color in `#AARRGGBB` notation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AndroidColorRepr")]
pub struct AndroidColor {
    pub hex: String,
}

#[derive(Deserialize)]
struct AndroidColorRepr {
    hex: String,
}

impl TryFrom<AndroidColorRepr> for AndroidColor {
    type Error = TokenError;

    fn try_from(repr: AndroidColorRepr) -> Result<Self, Self::Error> {
        Color::parse_argb(&repr.hex)?;
        Ok(Self { hex: repr.hex })
    }
}

impl AndroidColor {
    pub fn to_color(&self) -> Result<Color, TokenError> {
        Color::parse_argb(&self.hex)
    }
}

impl From<Color> for AndroidColor {
    fn from(color: Color) -> Self {
        Self {
            hex: color.to_argb_string(),
        }
    }
}
