use dskit_tokens::values::ShadowLayer;
use dskit_tokens::{Color, Platform, TokenPath, TokenValue, VariationKind};

use super::{DefaultCatalog, DefaultEntry};

const MODES: [&str; 2] = ["up", "down"];
const STRENGTHS: [&str; 2] = ["soft", "hard"];
const SIZES: [&str; 3] = ["s", "m", "l"];

/// `(y, blur, spread, alpha)` of the key and ambient layers per size
fn size_layers(size: &str) -> Option<[(f64, f64, f64, f32); 2]> {
    Some(match size {
        "s" => [(2.0, 6.0, -2.0, 0.08), (0.0, 1.0, 0.0, 0.04)],
        "m" => [(4.0, 14.0, -4.0, 0.08), (1.0, 3.0, 0.0, 0.04)],
        "l" => [(12.0, 32.0, -8.0, 0.12), (2.0, 6.0, 0.0, 0.06)],
        _ => return None,
    })
}

pub(super) struct ShadowDefaults;

impl ShadowDefaults {
    fn layers(path: &TokenPath) -> Option<Vec<ShadowLayer>> {
        let direction = match path.mode() {
            "down" => 1.0,
            "up" => -1.0,
            _ => return None,
        };
        let strength = match path.category()? {
            "soft" => 1.0,
            "hard" => 2.5,
            _ => return None,
        };

        let layers = size_layers(path.leaf())?
            .into_iter()
            .map(|(y, blur, spread, alpha)| {
                let color = Color::BLACK.with_alpha((alpha * strength).min(1.0));
                ShadowLayer::new(0.0, y * direction, blur, spread, color)
            })
            .collect();
        Some(layers)
    }
}

impl DefaultCatalog for ShadowDefaults {
    const KIND: VariationKind = VariationKind::Shadow;

    fn entries(&self) -> Vec<DefaultEntry> {
        MODES
            .iter()
            .flat_map(|mode| {
                STRENGTHS.iter().flat_map(move |strength| {
                    SIZES
                        .iter()
                        .map(move |size| DefaultEntry::new(TokenPath::nested(*mode, *strength, *size)))
                })
            })
            .collect()
    }

    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue> {
        let layers = Self::layers(path)?;
        Some(match platform {
            Platform::Web => TokenValue::WebShadow(layers.iter().map(ShadowLayer::to_css).collect()),
            Platform::Ios | Platform::Android => TokenValue::NativeShadow(layers),
        })
    }
}
