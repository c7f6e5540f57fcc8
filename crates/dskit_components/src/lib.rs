//! dskit component configuration
//!
//! Binds the configurable props of UI components to token references:
//!
//! - [`ComponentApi`]: a prop and how it maps onto each platform's styling hooks
//! - [`Variation`] / [`Style`]: named axes of prop bindings (`size` → `s`, `m`, `l`),
//!   optionally gated by intersections with sibling variations
//! - [`PropConfig`]: one binding, with per-state overrides
//! - [`Config`]: the aggregate, with validated default selections
//!
//! Resolving which style is active is a lookup over a caller-supplied
//! [`Selection`]; nothing here searches combinations.

pub mod api;
pub mod config;
mod error;
pub mod props;
pub mod style;

pub use api::{ComponentApi, PlatformMapping, PlatformMappings, PropType};
pub use config::{ComponentMeta, Config, DefaultVariation};
pub use error::ConfigError;
pub use props::{has_exact_state, PropConfig, PropState, PropStateValue};
pub use style::{Selection, Style, Variation};
