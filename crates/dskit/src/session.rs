//! A loaded design system

use dskit_archive::ThemeArchiveCodec;
use dskit_components::ComponentMeta;
use dskit_draft::{ApplyReport, DraftAction, DraftOverlay, DraftStore};
use dskit_theme::{build_default_theme, DefaultThemeConfig, Theme, ThemeData};
use dskit_tokens::VariationKind;
use tracing::{info, warn};

use crate::data::{design_system_key, DesignSystemData};
use crate::error::{DesignSystemError, Result};
use crate::source::DesignSystemSource;

/// Where a [`DesignSystem`] came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Rebuilt from a stored record
    Stored,
    /// Generated from the default catalog because nothing was stored
    Generated,
}

/// Theme and component configs of one design system version
#[derive(Clone, Debug)]
pub struct DesignSystem {
    theme: Theme,
    components: Vec<ComponentMeta>,
    origin: Origin,
}

impl DesignSystem {
    /// Rebuild from stored data.
    pub fn from_data(data: &DesignSystemData) -> Result<Self> {
        Ok(Self {
            theme: data.theme_data.build()?,
            components: data.components_data.clone(),
            origin: Origin::Stored,
        })
    }

    /// Fresh design system with the default token catalog and no components.
    pub fn generate(config: &DefaultThemeConfig) -> Result<Self> {
        Ok(Self {
            theme: build_default_theme(config)?,
            components: Vec::new(),
            origin: Origin::Generated,
        })
    }

    /// Load `config.name`@`config.version` from `source`, falling back to
    /// defaults generated from `config`, then replay pending drafts. A stored
    /// record whose theme names another name or version is rejected.
    pub fn load<S, D>(
        source: &S,
        drafts: &DraftOverlay<D>,
        config: &DefaultThemeConfig,
    ) -> Result<(Self, ApplyReport)>
    where
        S: DesignSystemSource,
        D: DraftStore,
    {
        let mut system = match source.load(&config.name, &config.version)? {
            Some(data) => {
                let meta = &data.theme_data.meta;
                if meta.name != config.name || meta.version != config.version {
                    return Err(DesignSystemError::IdentityMismatch {
                        requested: design_system_key(&config.name, &config.version),
                        stored: design_system_key(&meta.name, &meta.version),
                    });
                }
                Self::from_data(&data)?
            }
            None => {
                info!(
                    "No stored design system {}@{}, generating defaults",
                    config.name, config.version
                );
                Self::generate(config)?
            }
        };

        let report = drafts.apply_draft_changes(&mut system.theme, &config.name, &config.version)?;
        Ok((system, report))
    }

    pub fn name(&self) -> &str {
        self.theme.name()
    }

    pub fn version(&self) -> &str {
        self.theme.version()
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    pub fn components(&self) -> &[ComponentMeta] {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&ComponentMeta> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn component_mut(&mut self, name: &str) -> Option<&mut ComponentMeta> {
        self.components.iter_mut().find(|c| c.name == name)
    }

    /// Add a component; a taken name keeps the existing one.
    pub fn add_component(&mut self, component: ComponentMeta) -> bool {
        if self.component(&component.name).is_some() {
            warn!(
                "Component `{}` already exists in {}, keeping the original",
                component.name,
                self.name()
            );
            return false;
        }
        self.components.push(component);
        true
    }

    /// Record the current state of a token as a draft.
    ///
    /// Returns `false` when the theme has no such token.
    pub fn draft_token<D: DraftStore>(
        &self,
        drafts: &mut DraftOverlay<D>,
        name: &str,
        kind: VariationKind,
        action: DraftAction,
    ) -> Result<bool> {
        let Some(token) = self.theme.token(name, kind) else {
            return Ok(false);
        };
        drafts.update_token_change(self.name(), self.version(), token, action)?;
        Ok(true)
    }

    /// Shape handed to the save boundary
    pub fn to_data(&self) -> Result<DesignSystemData> {
        Ok(DesignSystemData {
            theme_data: ThemeData::from_theme(&self.theme)?,
            components_data: self.components.clone(),
        })
    }

    pub fn save<S: DesignSystemSource>(&self, source: &mut S) -> Result<()> {
        source.save(self.name(), self.version(), &self.to_data()?)?;
        info!("Saved design system {}@{}", self.name(), self.version());
        Ok(())
    }

    pub fn to_archive<C: ThemeArchiveCodec>(&self, codec: &C) -> Result<Vec<u8>> {
        Ok(codec.encode(&self.theme)?)
    }
}
