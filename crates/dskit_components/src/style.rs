//! Styles and variations

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::props::PropConfig;

/// Selected style name per variation name, e.g. `{"size": "m", "view": "accent"}`
pub type Selection = IndexMap<String, String>;

/// One concrete prop-binding option within a [`Variation`]
///
/// `intersections` gate the style on sibling variations: the style applies
/// only when every listed variation is at one of the listed style names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub intersections: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub props: Vec<PropConfig>,
}

impl Style {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            intersections: IndexMap::new(),
            props: Vec::new(),
        }
    }

    pub fn props(&self) -> &[PropConfig] {
        &self.props
    }

    pub fn intersections(&self) -> &IndexMap<String, Vec<String>> {
        &self.intersections
    }

    pub fn prop(&self, api_id: Uuid) -> Option<&PropConfig> {
        self.props.iter().find(|p| p.id == api_id)
    }

    pub fn prop_mut(&mut self, api_id: Uuid) -> Option<&mut PropConfig> {
        self.props.iter_mut().find(|p| p.id == api_id)
    }

    /// Bind a prop, replacing an existing binding for the same API id.
    pub fn set_prop(&mut self, prop: PropConfig) {
        match self.prop_mut(prop.id) {
            Some(existing) => *existing = prop,
            None => self.props.push(prop),
        }
    }

    /// Restrict the style to `variation` being at one of `styles`.
    pub fn set_intersection(
        &mut self,
        variation: impl Into<String>,
        styles: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.intersections
            .insert(variation.into(), styles.into_iter().map(Into::into).collect());
    }

    /// Whether the style applies under `selection`.
    ///
    /// A style without intersections always applies. A gated variation
    /// missing from the selection does not match.
    pub fn matches_selection(&self, selection: &Selection) -> bool {
        self.intersections.iter().all(|(variation, allowed)| {
            selection
                .get(variation)
                .is_some_and(|selected| allowed.iter().any(|s| s == selected))
        })
    }
}

/// A named axis of styles, e.g. `size` with `s`, `m`, `l`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub styles: Vec<Style>,
}

impl Variation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            styles: Vec::new(),
        }
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// The style with `style_id`, or the first style when no id is given.
    pub fn style(&self, style_id: Option<Uuid>) -> Option<&Style> {
        match style_id {
            Some(id) => self.styles.iter().find(|s| s.id == id),
            None => self.styles.first(),
        }
    }

    pub fn style_mut(&mut self, style_id: Option<Uuid>) -> Option<&mut Style> {
        match style_id {
            Some(id) => self.styles.iter_mut().find(|s| s.id == id),
            None => self.styles.first_mut(),
        }
    }

    pub fn style_by_name(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// Append an empty style and return its fresh id.
    pub fn add_style(&mut self, name: impl Into<String>) -> Uuid {
        let style = Style::new(name);
        let id = style.id;
        self.styles.push(style);
        id
    }

    /// Returns whether a style was removed.
    pub fn remove_style(&mut self, style_id: Uuid) -> bool {
        let before = self.styles.len();
        self.styles.retain(|s| s.id != style_id);
        self.styles.len() != before
    }
}
