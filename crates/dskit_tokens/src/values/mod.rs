//! Typed token payloads
//!
//! Every (variation kind, platform) pair has its own payload shape:
//! - Colors: CSS string / RGBA components / `#AARRGGBB`
//! - Gradients and shadows: CSS layer strings / structured layers
//! - Shape and spacing: CSS length / numeric struct
//! - Typography and font families: CSS properties / native descriptors

mod color;
mod gradient;
mod shadow;
mod shape;
mod spacing;
mod typography;

pub use color::*;
pub use gradient::*;
pub use shadow::*;
pub use shape::*;
pub use spacing::*;
pub use typography::*;

use serde::Serialize;
use serde_json::Value;

use crate::platform::{Platform, VariationKind};
use crate::TokenError;

/// A decoded token value for one platform
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    WebColor(String),
    IosColor(IosColor),
    AndroidColor(AndroidColor),
    WebGradient(Vec<String>),
    NativeGradient(Vec<GradientLayer>),
    WebShadow(Vec<String>),
    NativeShadow(Vec<ShadowLayer>),
    WebShape(String),
    NativeShape(NativeShape),
    WebSpacing(String),
    NativeSpacing(NativeSpacing),
    WebTypography(WebTypography),
    NativeTypography(NativeTypography),
    WebFontFamily(WebFontFamily),
    NativeFontFamily(NativeFontFamily),
}

impl TokenValue {
    /// Decode a raw JSON payload into the shape expected for `kind` on `platform`.
    pub fn decode(kind: VariationKind, platform: Platform, raw: Value) -> Result<Self, TokenError> {
        use Platform::*;
        use VariationKind::*;

        let invalid = |source| TokenError::InvalidValue {
            kind,
            platform,
            source,
        };

        let value = match (kind, platform) {
            (Color, Web) => {
                let css: color::CssHexColor = serde_json::from_value(raw).map_err(invalid)?;
                Self::WebColor(css.0)
            }
            (Color, Ios) => Self::IosColor(serde_json::from_value(raw).map_err(invalid)?),
            (Color, Android) => Self::AndroidColor(serde_json::from_value(raw).map_err(invalid)?),
            (Gradient, Web) => Self::WebGradient(serde_json::from_value(raw).map_err(invalid)?),
            (Gradient, _) => Self::NativeGradient(serde_json::from_value(raw).map_err(invalid)?),
            (Shadow, Web) => Self::WebShadow(serde_json::from_value(raw).map_err(invalid)?),
            (Shadow, _) => Self::NativeShadow(serde_json::from_value(raw).map_err(invalid)?),
            (Shape, Web) => Self::WebShape(serde_json::from_value(raw).map_err(invalid)?),
            (Shape, _) => Self::NativeShape(serde_json::from_value(raw).map_err(invalid)?),
            (Spacing, Web) => Self::WebSpacing(serde_json::from_value(raw).map_err(invalid)?),
            (Spacing, _) => Self::NativeSpacing(serde_json::from_value(raw).map_err(invalid)?),
            (Typography, Web) => {
                Self::WebTypography(serde_json::from_value(raw).map_err(invalid)?)
            }
            (Typography, _) => {
                Self::NativeTypography(serde_json::from_value(raw).map_err(invalid)?)
            }
            (FontFamily, Web) => {
                Self::WebFontFamily(serde_json::from_value(raw).map_err(invalid)?)
            }
            (FontFamily, _) => {
                Self::NativeFontFamily(serde_json::from_value(raw).map_err(invalid)?)
            }
        };
        Ok(value)
    }

    /// Whether this value has the shape expected for `kind` on `platform`.
    ///
    /// Color strings must also parse.
    pub fn fits(&self, kind: VariationKind, platform: Platform) -> bool {
        use Platform::*;
        use VariationKind::*;

        match (self, kind, platform) {
            (Self::WebColor(css), Color, Web) => crate::color::Color::parse(css).is_ok(),
            (Self::AndroidColor(color), Color, Android) => color.to_color().is_ok(),
            _ => self.fits_shape(kind, platform),
        }
    }

    fn fits_shape(&self, kind: VariationKind, platform: Platform) -> bool {
        use Platform::*;
        use VariationKind::*;

        matches!(
            (self, kind, platform),
            (Self::IosColor(_), Color, Ios)
                | (Self::WebGradient(_), Gradient, Web)
                | (Self::NativeGradient(_), Gradient, Ios | Android)
                | (Self::WebShadow(_), Shadow, Web)
                | (Self::NativeShadow(_), Shadow, Ios | Android)
                | (Self::WebShape(_), Shape, Web)
                | (Self::NativeShape(_), Shape, Ios | Android)
                | (Self::WebSpacing(_), Spacing, Web)
                | (Self::NativeSpacing(_), Spacing, Ios | Android)
                | (Self::WebTypography(_), Typography, Web)
                | (Self::NativeTypography(_), Typography, Ios | Android)
                | (Self::WebFontFamily(_), FontFamily, Web)
                | (Self::NativeFontFamily(_), FontFamily, Ios | Android)
        )
    }

    /// Raw JSON form, as stored in archives and drafts.
    pub fn to_json(&self) -> Result<Value, TokenError> {
        Ok(serde_json::to_value(self)?)
    }
}
