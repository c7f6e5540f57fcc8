use dskit_tokens::values::GradientLayer;
use dskit_tokens::{Platform, TokenPath, TokenValue, VariationKind};

use super::{ink, scheme_for, DefaultCatalog, DefaultEntry};
use crate::palette::{ColorMode, ResolvedPalette};

const SUBCATEGORIES: [&str; 4] = ["default", "on-dark", "on-light", "inverse"];

const LEAVES: [(&str, &str); 3] = [
    ("accent-gradient", "Accent fill fading along its length"),
    ("transparent-accent-gradient", "Accent glow fading to clear"),
    ("skeleton-gradient", "Loading placeholder shimmer"),
];

pub(super) struct GradientDefaults<'a> {
    palette: &'a ResolvedPalette,
}

impl<'a> GradientDefaults<'a> {
    pub fn new(palette: &'a ResolvedPalette) -> Self {
        Self { palette }
    }

    fn layer(&self, path: &TokenPath) -> Option<GradientLayer> {
        if path.category()? != "surface" {
            return None;
        }
        let scheme = scheme_for(path.mode(), path.subcategory()?)?;
        let accent = self.palette.accent(scheme);

        let stops = match path.leaf() {
            "accent-gradient" => [(0.0, accent), (1.0, accent.shift_lightness(0.24))],
            "transparent-accent-gradient" => {
                [(0.0, accent.with_alpha(0.32)), (1.0, accent.with_alpha(0.0))]
            }
            "skeleton-gradient" => {
                let ink = ink(scheme);
                let base = match scheme {
                    ColorMode::Dark => 0.06,
                    ColorMode::Light => 0.04,
                };
                [(0.0, ink.with_alpha(base)), (1.0, ink.with_alpha(base * 2.0))]
            }
            _ => return None,
        };
        Some(GradientLayer::linear(90.0, &stops))
    }
}

impl DefaultCatalog for GradientDefaults<'_> {
    const KIND: VariationKind = VariationKind::Gradient;

    fn entries(&self) -> Vec<DefaultEntry> {
        let mut entries = Vec::new();
        for mode in ColorMode::all() {
            for subcategory in SUBCATEGORIES {
                for (leaf, description) in LEAVES {
                    entries.push(DefaultEntry::described(
                        TokenPath::full(mode.id(), "surface", subcategory, leaf),
                        description,
                    ));
                }
            }
        }
        entries
    }

    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue> {
        let layer = self.layer(path)?;
        Some(match platform {
            Platform::Web => TokenValue::WebGradient(vec![layer.to_css()]),
            Platform::Ios | Platform::Android => TokenValue::NativeGradient(vec![layer]),
        })
    }
}
