//! dskit token model
//!
//! Design tokens carry one value per target platform:
//!
//! - [`Platform`]: web, iOS, Android
//! - [`VariationKind`]: color, gradient, shadow, shape, spacing, typography, font family
//! - [`TokenValue`]: the typed payload for one (kind, platform) pair
//! - [`PlatformValue`]: current value + construction baseline, updated through a
//!   per-pair [`ValueStrategy`]
//! - [`TokenMeta`] / [`TokenPath`]: dot-path naming and metadata
//! - [`Token`]: metadata plus exactly three platform values
//!
//! # Update policies
//!
//! Most pairs replace the stored value on `set_value`. Native shape, spacing
//! and typography values are shallow-merged instead, so a partial payload
//! only touches the keys it names:
//!
//! ```rust
//! use dskit_tokens::{Platform, PlatformValue, VariationKind};
//! use serde_json::json;
//!
//! let mut spacing = PlatformValue::new(
//!     VariationKind::Spacing,
//!     Platform::Ios,
//!     json!({ "value": 0, "unit": "pt" }),
//! )
//! .unwrap();
//! spacing.set_value(json!({ "value": 4 })).unwrap();
//! assert_eq!(spacing.value().to_json().unwrap(), json!({ "value": 4.0, "unit": "pt" }));
//! ```

pub mod color;
mod error;
pub mod meta;
pub mod platform;
pub mod token;
pub mod value;
pub mod values;

pub use color::Color;
pub use error::TokenError;
pub use meta::{TokenMeta, TokenPath};
pub use platform::{Platform, VariationKind};
pub use token::Token;
pub use value::{PlatformValue, UpdatePolicy, ValueStrategy};
pub use values::TokenValue;
