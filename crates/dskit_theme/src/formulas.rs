//! Interaction state formulas
//!
//! Color and gradient tokens in a category with a formula get synthetic
//! `-hover`, `-active` and (for some categories) `-brightness` companions when
//! the theme is flattened for storage. The companions carry the derived
//! marker on their metadata and are never edited, so reconstruction drops
//! them again.

use std::sync::OnceLock;

use dskit_tokens::values::{AndroidColor, GradientLayer, IosColor};
use dskit_tokens::{
    Color, Platform, Token, TokenError, TokenMeta, TokenPath, TokenValue, VariationKind,
};
use regex::{Captures, Regex};
use tracing::debug;

use crate::theme::Theme;

/// Derived interaction state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenState {
    Hover,
    Active,
    Brightness,
}

impl TokenState {
    pub fn all() -> &'static [TokenState] {
        const STATES: [TokenState; 3] = [TokenState::Hover, TokenState::Active, TokenState::Brightness];
        &STATES
    }

    /// Leaf suffix of the derived token
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Hover => "-hover",
            Self::Active => "-active",
            Self::Brightness => "-brightness",
        }
    }

    /// Split a leaf into its base leaf and derived state, if it has a state suffix.
    pub fn split(leaf: &str) -> Option<(&str, TokenState)> {
        Self::all().iter().find_map(|state| {
            leaf.strip_suffix(state.suffix())
                .filter(|base| !base.is_empty())
                .map(|base| (base, *state))
        })
    }
}

/// Lightness shifts per state; positive toward white, negative toward black
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateFormula {
    pub hover: f32,
    pub active: f32,
    pub brightness: Option<f32>,
}

impl StateFormula {
    pub fn amount(&self, state: TokenState) -> Option<f32> {
        match state {
            TokenState::Hover => Some(self.hover),
            TokenState::Active => Some(self.active),
            TokenState::Brightness => self.brightness,
        }
    }
}

/// Formula of a color category, if it has one
pub fn formula_for(category: &str) -> Option<StateFormula> {
    let formula = match category {
        "text" => StateFormula {
            hover: 0.12,
            active: -0.08,
            brightness: None,
        },
        "surface" => StateFormula {
            hover: 0.08,
            active: -0.06,
            brightness: Some(0.2),
        },
        "outline" => StateFormula {
            hover: 0.12,
            active: -0.08,
            brightness: None,
        },
        "data" => StateFormula {
            hover: 0.1,
            active: -0.1,
            brightness: Some(0.25),
        },
        _ => return None,
    };
    Some(formula)
}

fn has_states(kind: VariationKind) -> bool {
    matches!(kind, VariationKind::Color | VariationKind::Gradient)
}

/// Derived companions of every eligible token in `theme`, in token order
///
/// Names already taken in the theme are left alone; tokens whose values cannot
/// be shifted are skipped.
pub(crate) fn derived_tokens(theme: &Theme) -> Vec<Token> {
    let mut derived = Vec::new();
    for kind in VariationKind::all().iter().copied().filter(|k| has_states(*k)) {
        for token in theme.tokens(kind) {
            let path = token.path();
            if TokenState::split(path.leaf()).is_some() {
                continue;
            }
            let Some(formula) = path.category().and_then(formula_for) else {
                continue;
            };

            for state in TokenState::all() {
                let Some(amount) = formula.amount(*state) else {
                    continue;
                };
                let derived_path = path.with_leaf(format!("{}{}", path.leaf(), state.suffix()));
                if theme.token(&derived_path.name(), kind).is_some() {
                    continue;
                }
                match derive(token, derived_path, amount) {
                    Ok(companion) => derived.push(companion),
                    Err(err) => debug!(
                        "Skipping {:?} state of `{}`: {}",
                        state,
                        token.name(),
                        err
                    ),
                }
            }
        }
    }
    derived
}

fn derive(token: &Token, path: TokenPath, amount: f32) -> Result<Token, TokenError> {
    let display_name = path.leaf().to_string();
    let mut meta = TokenMeta::new(token.kind(), path, display_name)?.mark_derived();
    meta.set_enabled(token.is_enabled());

    let kind = token.kind();
    let shift = |platform| shift_value(kind, platform, token.value(platform), amount);
    Token::from_values(
        meta,
        shift(Platform::Web)?,
        shift(Platform::Ios)?,
        shift(Platform::Android)?,
    )
}

fn hex_colors() -> &'static Regex {
    static HEX_COLORS: OnceLock<Regex> = OnceLock::new();
    HEX_COLORS.get_or_init(|| {
        Regex::new(r"#(?:[0-9A-Fa-f]{8}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b")
            .unwrap_or_else(|e| panic!("BUG: invalid hex color pattern: {e}"))
    })
}

fn shift_hex(hex: &str, amount: f32) -> Result<String, TokenError> {
    Ok(Color::parse(hex)?.shift_lightness(amount).to_hex_string())
}

/// Shift every hex color inside a CSS string
fn shift_css(css: &str, amount: f32) -> String {
    hex_colors()
        .replace_all(css, |caps: &Captures| {
            shift_hex(&caps[0], amount).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn shift_value(
    kind: VariationKind,
    platform: Platform,
    value: &TokenValue,
    amount: f32,
) -> Result<TokenValue, TokenError> {
    let shifted = match value {
        TokenValue::WebColor(css) => TokenValue::WebColor(shift_hex(css, amount)?),
        TokenValue::IosColor(color) => {
            TokenValue::IosColor(IosColor::from(Color::from(*color).shift_lightness(amount)))
        }
        TokenValue::AndroidColor(color) => {
            TokenValue::AndroidColor(AndroidColor::from(color.to_color()?.shift_lightness(amount)))
        }
        TokenValue::WebGradient(layers) => {
            TokenValue::WebGradient(layers.iter().map(|css| shift_css(css, amount)).collect())
        }
        TokenValue::NativeGradient(layers) => TokenValue::NativeGradient(
            layers
                .iter()
                .map(|layer| -> Result<GradientLayer, TokenError> {
                    Ok(GradientLayer {
                        colors: layer
                            .colors
                            .iter()
                            .map(|hex| shift_hex(hex, amount))
                            .collect::<Result<_, TokenError>>()?,
                        ..layer.clone()
                    })
                })
                .collect::<Result<_, _>>()?,
        ),
        _ => return Err(TokenError::ValueMismatch { kind, platform }),
    };
    Ok(shifted)
}
