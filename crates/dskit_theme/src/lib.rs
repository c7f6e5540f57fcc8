//! dskit theme assembly
//!
//! A [`Theme`] holds every token of a design system, indexed by variation
//! kind and name. This crate builds themes and projects them back out.
//!
//! # Overview
//!
//! - **Default generation**: [`build_default_theme`] expands a small
//!   [`DefaultThemeConfig`] (accent per mode, grayscale per mode) into the full
//!   default catalog for every kind and platform
//! - **Reconstruction**: [`build_theme`] rebuilds a theme from its stored
//!   [`ThemeMeta`] and [`PlatformsVariations`]
//! - **Storage projection**: [`create_meta_tokens`] / [`create_variation_tokens`]
//!   flatten a theme, adding derived `-hover` / `-active` / `-brightness`
//!   companions for categories with a [`StateFormula`]
//! - **Grouping**: [`group_tokens`] and [`token_tabs`] project tokens into the
//!   navigation hierarchy
//!
//! # Quick Start
//!
//! ```rust
//! use dskit_theme::{build_default_theme, group_tokens, DefaultThemeConfig};
//! use dskit_tokens::VariationKind;
//!
//! let theme = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();
//! let groups = group_tokens(&theme, VariationKind::Color, "dark");
//! assert_eq!(groups[0].id, "default");
//! assert_eq!(groups[0].subgroups[0].id, "text");
//! ```

mod defaults;
mod error;
pub mod factory;
pub mod formulas;
pub mod grouping;
pub mod palette;
pub mod storage;
pub mod theme;

pub use defaults::build_default_theme;
pub use error::ThemeError;
pub use factory::{build_theme, create_meta_tokens, create_variation_tokens};
pub use formulas::{formula_for, StateFormula, TokenState};
pub use grouping::{
    group_color_tokens, group_shape_tokens, group_tokens, group_tokens_by_mode, token_tabs,
    ColorGroup, TokenGroup, TokenSubgroup, TokenTab, COLOR_CATEGORIES,
};
pub use palette::{ColorMode, DefaultThemeConfig, Grayscale, ModePair, Shade};
pub use storage::{PlatformTokens, PlatformsVariations, ThemeData, ThemeMeta};
pub use theme::Theme;
