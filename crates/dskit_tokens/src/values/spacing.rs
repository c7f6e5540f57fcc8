//! Spacing payloads

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingUnit {
    Pt,
    Dp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NativeSpacing {
    pub value: f64,
    pub unit: SpacingUnit,
}
