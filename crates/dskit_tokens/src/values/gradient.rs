//! Gradient payloads

use serde::{Deserialize, Serialize};

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

/// One gradient layer for native platforms. Colors are hex strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientLayer {
    pub kind: GradientKind,
    pub angle: f64,
    pub locations: Vec<f64>,
    pub colors: Vec<String>,
}

impl GradientLayer {
    pub fn linear(angle: f64, stops: &[(f64, Color)]) -> Self {
        Self {
            kind: GradientKind::Linear,
            angle,
            locations: stops.iter().map(|(at, _)| *at).collect(),
            colors: stops.iter().map(|(_, c)| c.to_hex_string()).collect(),
        }
    }

    /// CSS rendering used for the web value
    pub fn to_css(&self) -> String {
        let stops = self
            .colors
            .iter()
            .zip(&self.locations)
            .map(|(color, at)| format!("{color} {}%", (at * 100.0).round()))
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            GradientKind::Linear => format!("linear-gradient({}deg, {stops})", self.angle),
            GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
        }
    }
}
