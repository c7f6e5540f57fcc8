//! Default color tokens
//!
//! Names follow `mode.category.subcategory.leaf`. The subcategory selects the
//! scheme a token is drawn for: `default` follows the mode, `inverse` flips
//! it, `on-dark`/`on-light` pin it.

use dskit_tokens::values::{AndroidColor, IosColor};
use dskit_tokens::{Color, Platform, TokenPath, TokenValue, VariationKind};

use super::{DefaultCatalog, DefaultEntry};
use crate::palette::{ColorMode, ResolvedPalette, Shade};

const ALL_SUBCATEGORIES: &[&str] = &["default", "on-dark", "on-light", "inverse"];
const GROUND_SUBCATEGORIES: &[&str] = &["default", "inverse"];

struct CategorySpec {
    name: &'static str,
    subcategories: &'static [&'static str],
    leaves: &'static [(&'static str, &'static str)],
}

const CATALOG: [CategorySpec; 5] = [
    CategorySpec {
        name: "text",
        subcategories: ALL_SUBCATEGORIES,
        leaves: &[
            ("primary", "Main text color"),
            ("secondary", "Secondary text color"),
            ("tertiary", "Tertiary text color"),
            ("paragraph", "Long-form text color"),
            ("accent", "Accent text color"),
            ("positive", "Success text color"),
            ("warning", "Warning text color"),
            ("negative", "Error text color"),
            ("info", "Informational text color"),
        ],
    },
    CategorySpec {
        name: "surface",
        subcategories: ALL_SUBCATEGORIES,
        leaves: &[
            ("solid-primary", "Main solid surface"),
            ("solid-secondary", "Secondary solid surface"),
            ("solid-tertiary", "Tertiary solid surface"),
            ("solid-card", "Card surface"),
            ("solid-default", "High-contrast solid surface"),
            ("transparent-primary", "Main translucent surface"),
            ("transparent-secondary", "Secondary translucent surface"),
            ("transparent-tertiary", "Tertiary translucent surface"),
            ("transparent-card", "Translucent card surface"),
            ("accent", "Accent surface"),
            ("positive", "Success surface"),
            ("warning", "Warning surface"),
            ("negative", "Error surface"),
            ("info", "Informational surface"),
            ("clear", "Fully transparent surface"),
        ],
    },
    CategorySpec {
        name: "background",
        subcategories: GROUND_SUBCATEGORIES,
        leaves: &[
            ("primary", "Main background"),
            ("secondary", "Secondary background"),
            ("tertiary", "Tertiary background"),
        ],
    },
    CategorySpec {
        name: "overlay",
        subcategories: GROUND_SUBCATEGORIES,
        leaves: &[
            ("soft", "Soft overlay"),
            ("hard", "Hard overlay"),
            ("blur", "Overlay behind blurred content"),
        ],
    },
    CategorySpec {
        name: "outline",
        subcategories: ALL_SUBCATEGORIES,
        leaves: &[
            ("solid-primary", "Main solid outline"),
            ("solid-secondary", "Secondary solid outline"),
            ("solid-tertiary", "Tertiary solid outline"),
            ("transparent-primary", "Main translucent outline"),
            ("transparent-secondary", "Secondary translucent outline"),
            ("transparent-tertiary", "Tertiary translucent outline"),
            ("accent", "Accent outline"),
            ("positive", "Success outline"),
            ("warning", "Warning outline"),
            ("negative", "Error outline"),
            ("info", "Informational outline"),
            ("clear", "Invisible outline"),
        ],
    },
];

/// Scheme a token is drawn for, from its mode and subcategory
pub(crate) fn scheme_for(mode: &str, subcategory: &str) -> Option<ColorMode> {
    let mode = match mode {
        "dark" => ColorMode::Dark,
        "light" => ColorMode::Light,
        _ => return None,
    };
    match subcategory {
        "default" => Some(mode),
        "inverse" => Some(mode.inverse()),
        "on-dark" => Some(ColorMode::Dark),
        "on-light" => Some(ColorMode::Light),
        _ => None,
    }
}

/// Foreground base color of a scheme
pub(crate) fn ink(scheme: ColorMode) -> Color {
    match scheme {
        ColorMode::Dark => Color::WHITE,
        ColorMode::Light => Color::from_hex(0x080808),
    }
}

fn status(scheme: ColorMode, leaf: &str) -> Option<Color> {
    let (dark, light) = match leaf {
        "positive" => (0x24B23E, 0x1A9E32),
        "warning" => (0xFF9E2F, 0xFA5F05),
        "negative" => (0xFF4D5F, 0xFF293E),
        "info" => (0x3F81FD, 0x2A72F8),
        _ => return None,
    };
    Some(Color::from_hex(pick(scheme, dark, light)))
}

fn pick<T>(scheme: ColorMode, dark: T, light: T) -> T {
    match scheme {
        ColorMode::Dark => dark,
        ColorMode::Light => light,
    }
}

pub(super) struct ColorDefaults<'a> {
    palette: &'a ResolvedPalette,
}

impl<'a> ColorDefaults<'a> {
    pub fn new(palette: &'a ResolvedPalette) -> Self {
        Self { palette }
    }

    fn resolve(&self, path: &TokenPath) -> Option<Color> {
        let scheme = scheme_for(path.mode(), path.subcategory()?)?;
        let ink = ink(scheme);
        let gray = |dark, light| self.palette.gray(scheme, pick(scheme, dark, light));

        let color = match (path.category()?, path.leaf()) {
            (_, "accent") => self.palette.accent(scheme),
            (_, "clear") => Color::TRANSPARENT,
            (_, leaf @ ("positive" | "warning" | "negative" | "info")) => status(scheme, leaf)?,

            ("text", "primary") => ink.with_alpha(0.96),
            ("text", "secondary") => ink.with_alpha(0.56),
            ("text", "tertiary") => ink.with_alpha(0.28),
            ("text", "paragraph") => ink.with_alpha(0.8),

            ("surface", "solid-primary") => gray(Shade::S800, Shade::S100),
            ("surface", "solid-secondary") => gray(Shade::S900, Shade::S200),
            ("surface", "solid-tertiary") => gray(Shade::S700, Shade::S300),
            ("surface", "solid-card") => pick(scheme, gray(Shade::S900, Shade::S50), Color::WHITE),
            ("surface", "solid-default") => ink,
            ("surface", "transparent-primary") => ink.with_alpha(0.06),
            ("surface", "transparent-secondary") => ink.with_alpha(0.03),
            ("surface", "transparent-tertiary") => ink.with_alpha(0.12),
            ("surface", "transparent-card") => ink.with_alpha(0.04),

            ("background", "primary") => pick(scheme, Color::BLACK, Color::WHITE),
            ("background", "secondary") => gray(Shade::S950, Shade::S50),
            ("background", "tertiary") => gray(Shade::S900, Shade::S100),

            ("overlay", "soft") => Color::BLACK.with_alpha(pick(scheme, 0.56, 0.32)),
            ("overlay", "hard") => Color::BLACK.with_alpha(pick(scheme, 0.96, 0.8)),
            ("overlay", "blur") => Color::BLACK.with_alpha(pick(scheme, 0.4, 0.2)),

            ("outline", "solid-primary") => gray(Shade::S600, Shade::S300),
            ("outline", "solid-secondary") => gray(Shade::S700, Shade::S200),
            ("outline", "solid-tertiary") => gray(Shade::S500, Shade::S400),
            ("outline", "transparent-primary") => ink.with_alpha(0.12),
            ("outline", "transparent-secondary") => ink.with_alpha(0.06),
            ("outline", "transparent-tertiary") => ink.with_alpha(0.28),

            _ => return None,
        };
        Some(color)
    }
}

impl DefaultCatalog for ColorDefaults<'_> {
    const KIND: VariationKind = VariationKind::Color;

    fn entries(&self) -> Vec<DefaultEntry> {
        let mut entries = Vec::new();
        for mode in ColorMode::all() {
            for category in &CATALOG {
                for subcategory in category.subcategories {
                    for (leaf, description) in category.leaves {
                        entries.push(DefaultEntry::described(
                            TokenPath::full(mode.id(), category.name, *subcategory, *leaf),
                            description,
                        ));
                    }
                }
            }
        }
        entries
    }

    fn value(&self, path: &TokenPath, platform: Platform) -> Option<TokenValue> {
        let color = self.resolve(path)?;
        Some(match platform {
            Platform::Web => TokenValue::WebColor(color.to_hex_string()),
            Platform::Ios => TokenValue::IosColor(IosColor::from(color)),
            Platform::Android => TokenValue::AndroidColor(AndroidColor::from(color)),
        })
    }
}
