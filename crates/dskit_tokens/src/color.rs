//! RGBA color math shared by token generation and state derivation

use crate::TokenError;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn parse(s: &str) -> Result<Self, TokenError> {
        let invalid = || TokenError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let mut channels = [0.0f32; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16).ok_or_else(invalid)? as f32;
                    channels[i] = (v * 17.0) / 255.0;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::rgb(
                byte(0)? as f32 / 255.0,
                byte(2)? as f32 / 255.0,
                byte(4)? as f32 / 255.0,
            )),
            8 => Ok(Self::rgba(
                byte(0)? as f32 / 255.0,
                byte(2)? as f32 / 255.0,
                byte(4)? as f32 / 255.0,
                byte(6)? as f32 / 255.0,
            )),
            _ => Err(invalid()),
        }
    }

    /// Parse Android's `#AARRGGBB` notation.
    pub fn parse_argb(s: &str) -> Result<Self, TokenError> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .filter(|h| h.len() == 8 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| TokenError::InvalidColor(s.to_string()))?;
        let rgba = format!("#{}{}", &hex[2..], &hex[..2]);
        Self::parse(&rgba).map_err(|_| TokenError::InvalidColor(s.to_string()))
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Shift toward white (`amount > 0`) or black (`amount < 0`), keeping alpha.
    pub fn shift_lightness(self, amount: f32) -> Self {
        let target = if amount >= 0.0 { Color::WHITE } else { Color::BLACK };
        let mixed = Color::lerp(&self, &target, amount.abs().min(1.0));
        mixed.with_alpha(self.a)
    }

    /// `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_bytes();
        if a == 0xFF {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Android's `#AARRGGBB` notation.
    pub fn to_argb_string(&self) -> String {
        let [r, g, b, a] = self.to_bytes();
        format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        ]
    }

    /// Channels rounded to three decimals, as written for iOS.
    pub fn to_unit_array(&self) -> [f64; 4] {
        [
            round3(self.r),
            round3(self.g),
            round3(self.b),
            round3(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round3(v: f32) -> f64 {
    (f64::from(v).clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}
