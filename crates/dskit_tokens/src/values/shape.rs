//! Shape payloads

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rounded,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeShape {
    pub kind: ShapeKind,
    pub corner_radius: f64,
}

impl NativeShape {
    pub fn rounded(corner_radius: f64) -> Self {
        Self {
            kind: ShapeKind::Rounded,
            corner_radius,
        }
    }
}
