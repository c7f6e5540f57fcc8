use dskit_tokens::values::{NativeSpacing, SpacingUnit};
use dskit_tokens::{Platform, TokenPath, TokenValue, VariationKind};

use super::{DefaultCatalog, DefaultEntry};

const STEPS: [u32; 15] = [0, 1, 2, 4, 6, 8, 10, 12, 16, 20, 24, 32, 40, 48, 64];

pub(super) struct SpacingDefaults;

impl SpacingDefaults {
    fn step(path: &TokenPath) -> Option<f64> {
        if path.mode() != "spacing" {
            return None;
        }
        let step: u32 = path.leaf().strip_suffix('x')?.parse().ok()?;
        STEPS.contains(&step).then(|| f64::from(step))
    }
}

impl DefaultCatalog for SpacingDefaults {
    const KIND: VariationKind = VariationKind::Spacing;

    fn entries(&self) -> Vec<DefaultEntry> {
        STEPS
            .iter()
            .map(|step| DefaultEntry::new(TokenPath::flat("spacing", format!("{step}x"))))
            .collect()
    }

    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue> {
        let value = Self::step(path)?;
        Some(match platform {
            Platform::Web => TokenValue::WebSpacing(format!("{value}px")),
            Platform::Ios => TokenValue::NativeSpacing(NativeSpacing {
                value,
                unit: SpacingUnit::Pt,
            }),
            Platform::Android => TokenValue::NativeSpacing(NativeSpacing {
                value,
                unit: SpacingUnit::Dp,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_its_own_length() {
        let path = TokenPath::flat("spacing", "4x");
        assert_eq!(
            SpacingDefaults.value(&path, Platform::Web),
            Some(TokenValue::WebSpacing("4px".to_string()))
        );
        assert!(SpacingDefaults.value(&TokenPath::flat("spacing", "3x"), Platform::Web).is_none());
    }
}
