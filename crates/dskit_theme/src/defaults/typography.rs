//! Default typography scale and font families
//!
//! Typography names are `screen-{l,m,s}.<category>.<size>[-bold]`. Display and
//! header sizes shrink on smaller screens; body and text sizes stay fixed.

use dskit_tokens::values::{
    FontStyle, FontWeight, NativeFontFace, NativeFontFamily, NativeTypography, WebFontFace,
    WebFontFamily, WebTypography,
};
use dskit_tokens::{Platform, TokenPath, TokenValue, VariationKind};

use super::{DefaultCatalog, DefaultEntry};

const SCREENS: [(&str, f64); 3] = [("screen-l", 1.0), ("screen-m", 0.875), ("screen-s", 0.75)];

const SIZES: [&str; 3] = ["l", "m", "s"];

const BOLD_SUFFIX: &str = "-bold";

struct Scale {
    category: &'static str,
    responsive: bool,
    weight: FontWeight,
    kerning: f64,
    /// `(size, font size, line height)` in px at full screen size
    steps: [(&'static str, f64, f64); 3],
}

static SCALES: [Scale; 4] = [
    Scale {
        category: "display",
        responsive: true,
        weight: FontWeight::Semibold,
        kerning: -0.5,
        steps: [("l", 64.0, 72.0), ("m", 48.0, 56.0), ("s", 40.0, 48.0)],
    },
    Scale {
        category: "header",
        responsive: true,
        weight: FontWeight::Semibold,
        kerning: -0.25,
        steps: [("l", 32.0, 40.0), ("m", 24.0, 32.0), ("s", 20.0, 28.0)],
    },
    Scale {
        category: "body",
        responsive: false,
        weight: FontWeight::Regular,
        kerning: 0.0,
        steps: [("l", 18.0, 28.0), ("m", 16.0, 24.0), ("s", 14.0, 20.0)],
    },
    Scale {
        category: "text",
        responsive: false,
        weight: FontWeight::Medium,
        kerning: 0.1,
        steps: [("l", 14.0, 20.0), ("m", 12.0, 16.0), ("s", 10.0, 14.0)],
    },
];

fn scale(category: &str) -> Option<&'static Scale> {
    SCALES.iter().find(|scale| scale.category == category)
}

fn font_family_ref(category: &str) -> String {
    format!("fontFamily.{category}")
}

pub(super) struct TypographyDefaults;

impl TypographyDefaults {
    fn resolve(path: &TokenPath) -> Option<NativeTypography> {
        let factor = SCREENS
            .iter()
            .find(|(screen, _)| *screen == path.mode())
            .map(|(_, factor)| *factor)?;
        let scale = scale(path.category()?)?;

        let (size, bold) = match path.leaf().strip_suffix(BOLD_SUFFIX) {
            Some(size) => (size, true),
            None => (path.leaf(), false),
        };
        let (_, font_size, line_height) = scale.steps.iter().find(|(s, ..)| *s == size)?;
        let factor = if scale.responsive { factor } else { 1.0 };

        Some(NativeTypography {
            font_family_ref: font_family_ref(scale.category),
            weight: if bold { FontWeight::Bold } else { scale.weight },
            style: FontStyle::Normal,
            size: (font_size * factor).round(),
            line_height: (line_height * factor).round(),
            kerning: scale.kerning,
        })
    }
}

impl DefaultCatalog for TypographyDefaults {
    const KIND: VariationKind = VariationKind::Typography;

    fn entries(&self) -> Vec<DefaultEntry> {
        let mut entries = Vec::new();
        for (screen, _) in SCREENS {
            for scale in &SCALES {
                for size in SIZES {
                    for leaf in [size.to_string(), format!("{size}{BOLD_SUFFIX}")] {
                        entries.push(DefaultEntry::new(TokenPath::nested(
                            screen,
                            scale.category,
                            leaf,
                        )));
                    }
                }
            }
        }
        entries
    }

    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue> {
        let native = Self::resolve(path)?;
        Some(match platform {
            Platform::Web => TokenValue::WebTypography(WebTypography {
                font_family_ref: native.font_family_ref,
                font_weight: native.weight.css().to_string(),
                font_style: native.style.css().to_string(),
                font_size: format!("{}rem", native.size / 16.0),
                line_height: format!("{}px", native.line_height),
                letter_spacing: format!("{}px", native.kerning),
            }),
            Platform::Ios | Platform::Android => TokenValue::NativeTypography(native),
        })
    }
}

const FAMILIES: [(&str, &str, &str); 4] = [
    ("display", "Inter Display", "InterDisplay"),
    ("header", "Inter Display", "InterDisplay"),
    ("body", "Inter", "Inter"),
    ("text", "Inter", "Inter"),
];

const FACES: [(FontWeight, &str); 4] = [
    (FontWeight::Regular, "Regular"),
    (FontWeight::Medium, "Medium"),
    (FontWeight::Semibold, "SemiBold"),
    (FontWeight::Bold, "Bold"),
];

pub(super) struct FontFamilyDefaults;

impl DefaultCatalog for FontFamilyDefaults {
    const KIND: VariationKind = VariationKind::FontFamily;

    fn entries(&self) -> Vec<DefaultEntry> {
        FAMILIES
            .iter()
            .map(|(role, ..)| DefaultEntry::new(TokenPath::flat("fontFamily", *role)))
            .collect()
    }

    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue> {
        if path.mode() != "fontFamily" {
            return None;
        }
        let (_, family, file_stem) = FAMILIES.iter().find(|(role, ..)| *role == path.leaf())?;

        Some(match platform {
            Platform::Web => TokenValue::WebFontFamily(WebFontFamily {
                name: family.to_string(),
                fonts: FACES
                    .iter()
                    .map(|(weight, face)| WebFontFace {
                        src: vec![format!("fonts/{file_stem}-{face}.woff2")],
                        font_weight: weight.css().to_string(),
                        font_style: FontStyle::Normal.css().to_string(),
                    })
                    .collect(),
            }),
            Platform::Ios | Platform::Android => TokenValue::NativeFontFamily(NativeFontFamily {
                name: family.to_string(),
                fonts: FACES
                    .iter()
                    .map(|(weight, face)| NativeFontFace {
                        name: format!("{file_stem}-{face}"),
                        weight: *weight,
                        style: FontStyle::Normal,
                    })
                    .collect(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shrinks_on_small_screens() {
        let large = TypographyDefaults::resolve(&TokenPath::nested("screen-l", "display", "l"));
        let small = TypographyDefaults::resolve(&TokenPath::nested("screen-s", "display", "l"));
        assert_eq!(large.unwrap().size, 64.0);
        assert_eq!(small.unwrap().size, 48.0);
    }

    #[test]
    fn body_is_fixed_across_screens() {
        let large = TypographyDefaults::resolve(&TokenPath::nested("screen-l", "body", "m-bold"));
        let small = TypographyDefaults::resolve(&TokenPath::nested("screen-s", "body", "m-bold"));
        assert_eq!(large, small);
        assert_eq!(large.unwrap().weight, FontWeight::Bold);
    }

    #[test]
    fn web_sizes_are_rem() {
        let path = TokenPath::nested("screen-m", "body", "m");
        let Some(TokenValue::WebTypography(web)) = TypographyDefaults.value(&path, Platform::Web)
        else {
            panic!("expected web typography");
        };
        assert_eq!(web.font_size, "1rem");
        assert_eq!(web.font_family_ref, "fontFamily.body");
    }

    #[test]
    fn every_typography_references_a_font_family() {
        for entry in TypographyDefaults.entries() {
            let native = TypographyDefaults::resolve(&entry.path).unwrap();
            let family = TokenPath::parse(&native.font_family_ref).unwrap();
            assert!(FontFamilyDefaults.value(&family, Platform::Ios).is_some());
        }
    }
}
