//! Navigation projection: Tab -> Group -> Subgroup -> Token
//!
//! Grouping is pure and stable. Tokens that fit no known group are left out
//! rather than reported.

use dskit_tokens::{Token, VariationKind};

use crate::theme::Theme;

/// Canonical subgroup order for color and gradient tokens
pub const COLOR_CATEGORIES: [&str; 5] = ["text", "surface", "background", "overlay", "outline"];

/// Outer group of a color or gradient token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    Default,
    OnDark,
    OnLight,
    Inverse,
}

impl ColorGroup {
    pub fn all() -> &'static [ColorGroup] {
        const GROUPS: [ColorGroup; 4] = [
            ColorGroup::Default,
            ColorGroup::OnDark,
            ColorGroup::OnLight,
            ColorGroup::Inverse,
        ];
        &GROUPS
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::OnDark => "onDark",
            Self::OnLight => "onLight",
            Self::Inverse => "inverse",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::OnDark => "On dark",
            Self::OnLight => "On light",
            Self::Inverse => "Inverse",
        }
    }

    /// Subcategory spellings belonging to this group
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Default => &["default"],
            Self::OnDark => &["on-dark", "dark"],
            Self::OnLight => &["on-light", "light"],
            Self::Inverse => &["inverse"],
        }
    }

    pub fn matches(self, subcategory: &str) -> bool {
        self.aliases().contains(&subcategory)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenSubgroup<'a> {
    pub id: String,
    pub tokens: Vec<&'a Token>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenGroup<'a> {
    pub id: String,
    pub title: String,
    pub subgroups: Vec<TokenSubgroup<'a>>,
}

impl<'a> TokenGroup<'a> {
    /// All tokens of the group, subgroup order preserved
    pub fn tokens(&self) -> impl Iterator<Item = &'a Token> + '_ {
        self.subgroups.iter().flat_map(|s| s.tokens.iter().copied())
    }

    pub fn subgroup(&self, id: &str) -> Option<&TokenSubgroup<'a>> {
        self.subgroups.iter().find(|s| s.id == id)
    }
}

/// Group color or gradient tokens of `mode` by outer group, then category.
pub fn group_color_tokens<'a>(tokens: &[&'a Token], mode: &str) -> Vec<TokenGroup<'a>> {
    ColorGroup::all()
        .iter()
        .filter_map(|group| {
            let subgroups: Vec<TokenSubgroup<'a>> = COLOR_CATEGORIES
                .iter()
                .filter_map(|category| {
                    let members: Vec<&'a Token> = tokens
                        .iter()
                        .copied()
                        .filter(|token| {
                            let path = token.path();
                            path.mode() == mode
                                && path.category() == Some(*category)
                                && path.subcategory().is_some_and(|sub| group.matches(sub))
                        })
                        .collect();
                    (!members.is_empty()).then(|| TokenSubgroup {
                        id: category.to_string(),
                        tokens: members,
                    })
                })
                .collect();

            (!subgroups.is_empty()).then(|| TokenGroup {
                id: group.id().to_string(),
                title: group.title().to_string(),
                subgroups,
            })
        })
        .collect()
}

/// Shape tokens as one flat group
pub fn group_shape_tokens<'a>(tokens: &[&'a Token]) -> Vec<TokenGroup<'a>> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let kind = VariationKind::Shape;
    vec![TokenGroup {
        id: kind.id().to_string(),
        title: kind.display_name().to_string(),
        subgroups: vec![TokenSubgroup {
            id: kind.id().to_string(),
            tokens: tokens.to_vec(),
        }],
    }]
}

/// Tokens of `mode`, one subgroup per category in first-appearance order.
///
/// Used for shadow, spacing, typography and font family tokens. Tokens
/// without a category land in a subgroup named after the mode.
pub fn group_tokens_by_mode<'a>(tokens: &[&'a Token], mode: &str) -> Vec<TokenGroup<'a>> {
    let mut subgroups: Vec<TokenSubgroup<'a>> = Vec::new();
    for token in tokens.iter().copied().filter(|t| t.path().mode() == mode) {
        let id = token.path().category().unwrap_or(mode);
        match subgroups.iter_mut().find(|s| s.id == id) {
            Some(subgroup) => subgroup.tokens.push(token),
            None => subgroups.push(TokenSubgroup {
                id: id.to_string(),
                tokens: vec![token],
            }),
        }
    }

    if subgroups.is_empty() {
        return Vec::new();
    }
    vec![TokenGroup {
        id: mode.to_string(),
        title: mode.to_string(),
        subgroups,
    }]
}

/// Group the tokens of one kind the way that kind is navigated.
///
/// `mode` is ignored for shapes.
pub fn group_tokens<'a>(theme: &'a Theme, kind: VariationKind, mode: &str) -> Vec<TokenGroup<'a>> {
    let tokens = theme.tokens(kind);
    match kind {
        VariationKind::Color | VariationKind::Gradient => group_color_tokens(&tokens, mode),
        VariationKind::Shape => group_shape_tokens(&tokens),
        VariationKind::Shadow
        | VariationKind::Spacing
        | VariationKind::Typography
        | VariationKind::FontFamily => group_tokens_by_mode(&tokens, mode),
    }
}

/// One navigation tab per non-empty variation kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenTab {
    pub kind: VariationKind,
    /// Distinct modes in first-appearance order
    pub modes: Vec<String>,
    pub count: usize,
}

pub fn token_tabs(theme: &Theme) -> Vec<TokenTab> {
    theme
        .kinds()
        .into_iter()
        .map(|kind| {
            let tokens = theme.tokens(kind);
            let mut modes: Vec<String> = Vec::new();
            for token in &tokens {
                let mode = token.path().mode();
                if !modes.iter().any(|m| m == mode) {
                    modes.push(mode.to_string());
                }
            }
            TokenTab {
                kind,
                modes,
                count: tokens.len(),
            }
        })
        .collect()
}
