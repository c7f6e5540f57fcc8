//! Stored shape of a design system

use dskit_components::ComponentMeta;
use dskit_theme::ThemeData;
use serde::{Deserialize, Serialize};

/// What the load/save boundary exchanges: theme data plus component configs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemData {
    pub theme_data: ThemeData,
    #[serde(default)]
    pub components_data: Vec<ComponentMeta>,
}

/// `name@version`, the key stored design systems are addressed by
pub fn design_system_key(name: &str, version: &str) -> String {
    format!("{name}@{version}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dskit_theme::ThemeMeta;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn wire_names() {
        let data = DesignSystemData {
            theme_data: ThemeData {
                meta: ThemeMeta {
                    name: "acme".to_string(),
                    version: "1.0.0".to_string(),
                    tokens: Vec::new(),
                },
                variations: Default::default(),
            },
            components_data: Vec::new(),
        };

        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "themeData": {
                    "meta": { "name": "acme", "version": "1.0.0", "tokens": [] },
                    "variations": {}
                },
                "componentsData": []
            })
        );
    }

    #[test]
    fn components_may_be_absent() {
        let data: DesignSystemData = serde_json::from_value(json!({
            "themeData": { "meta": { "name": "acme", "version": "1.0.0" } }
        }))
        .unwrap();
        assert!(data.components_data.is_empty());
        assert_eq!(design_system_key("acme", "1.0.0"), "acme@1.0.0");
    }
}
