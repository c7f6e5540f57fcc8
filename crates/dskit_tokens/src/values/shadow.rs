//! Shadow payloads

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A box shadow layer for native platforms
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowLayer {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

impl ShadowLayer {
    pub fn new(offset_x: f64, offset_y: f64, blur: f64, spread: f64, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color: color.to_hex_string(),
        }
    }

    /// CSS `box-shadow` layer used for the web value
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_rendering() {
        let layer = ShadowLayer::new(0.0, 4.0, 14.0, -4.0, Color::BLACK.with_alpha(0.08));
        assert_eq!(layer.to_css(), "0px 4px 14px -4px #00000014");
    }
}
