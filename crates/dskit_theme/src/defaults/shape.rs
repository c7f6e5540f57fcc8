use dskit_tokens::values::NativeShape;
use dskit_tokens::{Platform, TokenPath, TokenValue, VariationKind};

use super::{DefaultCatalog, DefaultEntry};

const RADII: [(&str, f64); 8] = [
    ("xxs", 2.0),
    ("xs", 4.0),
    ("s", 8.0),
    ("m", 12.0),
    ("l", 16.0),
    ("xl", 24.0),
    ("xxl", 32.0),
    ("circle", 9999.0),
];

pub(super) struct ShapeDefaults;

impl DefaultCatalog for ShapeDefaults {
    const KIND: VariationKind = VariationKind::Shape;

    fn entries(&self) -> Vec<DefaultEntry> {
        RADII
            .iter()
            .map(|(leaf, _)| DefaultEntry::new(TokenPath::flat("round", *leaf)))
            .collect()
    }

    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue> {
        if path.mode() != "round" {
            return None;
        }
        let radius = RADII
            .iter()
            .find(|(leaf, _)| *leaf == path.leaf())
            .map(|(_, radius)| *radius)?;

        Some(match platform {
            Platform::Web => TokenValue::WebShape(format!("{radius}px")),
            Platform::Ios | Platform::Android => TokenValue::NativeShape(NativeShape::rounded(radius)),
        })
    }
}
