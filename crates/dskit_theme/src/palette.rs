//! Palette configuration for default theme generation

use std::fmt::{Display, Formatter};

use dskit_tokens::Color;
use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// Light or dark color mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Dark,
    Light,
}

impl ColorMode {
    /// Stable id, also the first segment of color token names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn all() -> &'static [ColorMode] {
        const MODES: [ColorMode; 2] = [ColorMode::Dark, ColorMode::Light];
        &MODES
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One setting per color mode
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePair<T> {
    pub dark: T,
    pub light: T,
}

impl<T> ModePair<T> {
    pub fn new(dark: T, light: T) -> Self {
        Self { dark, light }
    }

    pub fn get(&self, mode: ColorMode) -> &T {
        match mode {
            ColorMode::Dark => &self.dark,
            ColorMode::Light => &self.light,
        }
    }
}

/// Shade steps of a grayscale ramp, lightest first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

/// Built-in grayscale catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grayscale {
    /// Pure neutral gray.
    Gray,
    /// Blue-tinted gray.
    CoolGray,
    /// Brown-tinted gray.
    WarmGray,
}

impl Grayscale {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::CoolGray => "coolGray",
            Self::WarmGray => "warmGray",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Gray => "Gray",
            Self::CoolGray => "Cool gray",
            Self::WarmGray => "Warm gray",
        }
    }

    /// Full catalog.
    pub fn all() -> &'static [Grayscale] {
        const GRAYSCALES: [Grayscale; 3] =
            [Grayscale::Gray, Grayscale::CoolGray, Grayscale::WarmGray];
        &GRAYSCALES
    }

    pub fn shade(self, shade: Shade) -> Color {
        let ramp = match self {
            Self::Gray => &GRAY,
            Self::CoolGray => &COOL_GRAY,
            Self::WarmGray => &WARM_GRAY,
        };
        Color::from_hex(ramp[shade as usize])
    }
}

impl Display for Grayscale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

const GRAY: [u32; 11] = [
    0xFAFAFA, 0xF5F5F5, 0xE5E5E5, 0xD4D4D4, 0xA3A3A3, 0x737373, 0x525252, 0x404040, 0x262626,
    0x171717, 0x0A0A0A,
];

const COOL_GRAY: [u32; 11] = [
    0xF8FAFC, 0xF1F5F9, 0xE2E8F0, 0xCBD5E1, 0x94A3B8, 0x64748B, 0x475569, 0x334155, 0x1E293B,
    0x0F172A, 0x020617,
];

const WARM_GRAY: [u32; 11] = [
    0xFAFAF9, 0xF5F5F4, 0xE7E5E4, 0xD6D3D1, 0xA8A29E, 0x78716C, 0x57534E, 0x44403C, 0x292524,
    0x1C1917, 0x0C0A09,
];

/// Input of default theme generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultThemeConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Accent color per mode, `#RRGGBB`
    pub accent: ModePair<String>,
    pub grayscale: ModePair<Grayscale>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

impl DefaultThemeConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn resolve(&self) -> Result<ResolvedPalette, ThemeError> {
        let parse = |mode: ColorMode| {
            Color::parse(self.accent.get(mode)).map_err(|_| {
                ThemeError::InvalidConfig(format!(
                    "{mode} accent `{}` is not a hex color",
                    self.accent.get(mode)
                ))
            })
        };
        Ok(ResolvedPalette {
            accent: ModePair::new(parse(ColorMode::Dark)?, parse(ColorMode::Light)?),
            grayscale: self.grayscale.clone(),
        })
    }
}

impl Default for DefaultThemeConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            version: default_version(),
            accent: ModePair::new("#2A72F8".to_string(), "#1A6EFF".to_string()),
            grayscale: ModePair::new(Grayscale::Gray, Grayscale::Gray),
        }
    }
}

/// Parsed palette shared by the default value tables
#[derive(Clone, Debug)]
pub(crate) struct ResolvedPalette {
    pub accent: ModePair<Color>,
    pub grayscale: ModePair<Grayscale>,
}

impl ResolvedPalette {
    pub fn gray(&self, mode: ColorMode, shade: Shade) -> Color {
        self.grayscale.get(mode).shade(shade)
    }

    pub fn accent(&self, mode: ColorMode) -> Color {
        *self.accent.get(mode)
    }
}
