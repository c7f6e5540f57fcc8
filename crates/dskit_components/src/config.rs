//! Component configuration aggregate

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::ComponentApi;
use crate::props::{has_exact_state, PropConfig, PropStateValue};
use crate::style::{Selection, Style, Variation};
use crate::ConfigError;

/// Style selected by default for one variation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultVariation {
    #[serde(rename = "variationID")]
    pub variation_id: Uuid,
    #[serde(rename = "styleID")]
    pub style_id: Uuid,
}

/// Props, variations and defaults of one component
///
/// Every default entry references an existing variation and one of its
/// styles. The check runs on construction and on deserialization, and the
/// mutators keep it true.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigRepr", into = "ConfigRepr")]
pub struct Config {
    api: Vec<ComponentApi>,
    variations: Vec<Variation>,
    default_variations: Vec<DefaultVariation>,
    invariant_props: Vec<PropConfig>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigRepr {
    #[serde(default)]
    api: Vec<ComponentApi>,
    #[serde(default)]
    variations: Vec<Variation>,
    #[serde(default)]
    default_variations: Vec<DefaultVariation>,
    #[serde(default)]
    invariant_props: Vec<PropConfig>,
}

impl TryFrom<ConfigRepr> for Config {
    type Error = ConfigError;

    fn try_from(repr: ConfigRepr) -> Result<Self, Self::Error> {
        Config::new(
            repr.api,
            repr.variations,
            repr.default_variations,
            repr.invariant_props,
        )
    }
}

impl From<Config> for ConfigRepr {
    fn from(config: Config) -> Self {
        Self {
            api: config.api,
            variations: config.variations,
            default_variations: config.default_variations,
            invariant_props: config.invariant_props,
        }
    }
}

impl Config {
    pub fn new(
        api: Vec<ComponentApi>,
        variations: Vec<Variation>,
        default_variations: Vec<DefaultVariation>,
        invariant_props: Vec<PropConfig>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            api,
            variations,
            default_variations,
            invariant_props,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, default) in self.default_variations.iter().enumerate() {
            self.check_style(default.variation_id, default.style_id)?;
            if self.default_variations[..index]
                .iter()
                .any(|d| d.variation_id == default.variation_id)
            {
                return Err(ConfigError::DuplicateDefault(default.variation_id));
            }
        }
        Ok(())
    }

    fn check_style(&self, variation_id: Uuid, style_id: Uuid) -> Result<(), ConfigError> {
        let variation = self
            .variation(variation_id)
            .ok_or(ConfigError::UnknownVariation(variation_id))?;
        variation
            .style(Some(style_id))
            .map(|_| ())
            .ok_or(ConfigError::UnknownStyle {
                variation: variation_id,
                style: style_id,
            })
    }

    pub fn api(&self) -> &[ComponentApi] {
        &self.api
    }

    pub fn api_by_id(&self, id: Uuid) -> Option<&ComponentApi> {
        self.api.iter().find(|api| api.id == id)
    }

    pub fn api_by_name(&self, name: &str) -> Option<&ComponentApi> {
        self.api.iter().find(|api| api.name == name)
    }

    /// Register a prop; returns its id.
    pub fn add_api(&mut self, api: ComponentApi) -> Uuid {
        let id = api.id;
        self.api.push(api);
        id
    }

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    pub fn variation(&self, id: Uuid) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == id)
    }

    pub fn variation_by_name(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.name == name)
    }

    /// Styles and prop bindings of a variation are free to edit; removing a
    /// style goes through [`Config::remove_style`] so defaults stay valid.
    pub fn style_mut(&mut self, variation_id: Uuid, style_id: Option<Uuid>) -> Option<&mut Style> {
        self.variations
            .iter_mut()
            .find(|v| v.id == variation_id)?
            .style_mut(style_id)
    }

    pub fn add_variation(&mut self, variation: Variation) -> Uuid {
        let id = variation.id;
        self.variations.push(variation);
        id
    }

    pub fn add_style(&mut self, variation_id: Uuid, name: impl Into<String>) -> Result<Uuid, ConfigError> {
        let variation = self
            .variations
            .iter_mut()
            .find(|v| v.id == variation_id)
            .ok_or(ConfigError::UnknownVariation(variation_id))?;
        Ok(variation.add_style(name))
    }

    /// Remove a style, dropping a default that pointed at it.
    pub fn remove_style(&mut self, variation_id: Uuid, style_id: Uuid) -> Result<bool, ConfigError> {
        let variation = self
            .variations
            .iter_mut()
            .find(|v| v.id == variation_id)
            .ok_or(ConfigError::UnknownVariation(variation_id))?;
        if !variation.remove_style(style_id) {
            return Ok(false);
        }

        let before = self.default_variations.len();
        self.default_variations
            .retain(|d| !(d.variation_id == variation_id && d.style_id == style_id));
        if self.default_variations.len() != before {
            warn!("Removed style {style_id} was the default of variation {variation_id}");
        }
        Ok(true)
    }

    /// Default style selection, one entry per variation at most
    pub fn defaults(&self) -> &[DefaultVariation] {
        &self.default_variations
    }

    /// Make `style_id` the default of `variation_id`.
    pub fn set_default(&mut self, variation_id: Uuid, style_id: Uuid) -> Result<(), ConfigError> {
        self.check_style(variation_id, style_id)?;
        match self
            .default_variations
            .iter_mut()
            .find(|d| d.variation_id == variation_id)
        {
            Some(default) => default.style_id = style_id,
            None => self.default_variations.push(DefaultVariation {
                variation_id,
                style_id,
            }),
        }
        Ok(())
    }

    /// Default selection by name, for [`Style::matches_selection`]
    pub fn default_selection(&self) -> Selection {
        self.default_variations
            .iter()
            .filter_map(|default| {
                let variation = self.variation(default.variation_id)?;
                let style = variation.style(Some(default.style_id))?;
                Some((variation.name.clone(), style.name.clone()))
            })
            .collect()
    }

    pub fn invariant_props(&self) -> &[PropConfig] {
        &self.invariant_props
    }

    pub fn invariant_prop_mut(&mut self, api_id: Uuid) -> Option<&mut PropConfig> {
        self.invariant_props.iter_mut().find(|p| p.id == api_id)
    }

    /// Bind a prop outside every variation, replacing an existing binding.
    pub fn set_invariant_prop(&mut self, prop: PropConfig) {
        match self.invariant_prop_mut(prop.id) {
            Some(existing) => *existing = prop,
            None => self.invariant_props.push(prop),
        }
    }

    /// Add a state override to the prop bound to `token_id`.
    ///
    /// With both `variation_id` and `style_id` the prop is looked up in that
    /// style; otherwise among the invariant props. Returns `Ok(false)` when
    /// `has_state` reports the entry as already present.
    pub fn add_token_state_with<F>(
        &mut self,
        token_id: Uuid,
        entry: PropStateValue,
        variation_id: Option<Uuid>,
        style_id: Option<Uuid>,
        has_state: F,
    ) -> Result<bool, ConfigError>
    where
        F: Fn(&PropConfig, &PropStateValue) -> bool,
    {
        let prop = match (variation_id, style_id) {
            (Some(variation_id), Some(style_id)) => {
                self.check_style(variation_id, style_id)?;
                self.style_mut(variation_id, Some(style_id))
                    .and_then(|style| style.prop_mut(token_id))
            }
            _ => self.invariant_prop_mut(token_id),
        }
        .ok_or(ConfigError::UnknownProp(token_id))?;

        let added = prop.add_state(entry, has_state);
        if !added {
            debug!("Prop {token_id} already has this state, skipping");
        }
        Ok(added)
    }

    /// [`Config::add_token_state_with`] using the exact state-set check.
    pub fn add_token_state(
        &mut self,
        token_id: Uuid,
        entry: PropStateValue,
        variation_id: Option<Uuid>,
        style_id: Option<Uuid>,
    ) -> Result<bool, ConfigError> {
        self.add_token_state_with(token_id, entry, variation_id, style_id, has_exact_state)
    }
}

/// A component as stored with its design system
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub config: Config,
}

impl ComponentMeta {
    pub fn new(name: impl Into<String>, config: Config) -> Self {
        Self {
            name: name.into(),
            description: None,
            config,
        }
    }
}
