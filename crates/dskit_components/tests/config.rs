use dskit_components::{
    ComponentApi, ComponentMeta, Config, ConfigError, DefaultVariation, PropConfig, PropState,
    PropStateValue, PropType, Variation,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

struct Fixture {
    config: Config,
    background: Uuid,
    size: Uuid,
    m: Uuid,
}

fn fixture() -> Fixture {
    let background = ComponentApi::new("background", PropType::Color);
    let background_id = background.id;

    let mut size = Variation::new("size");
    size.add_style("s");
    let m = size.add_style("m");
    size.style_mut(Some(m))
        .unwrap()
        .set_prop(PropConfig::new(background_id, json!("dark.surface.default.accent")));
    let size_id = size.id;

    let config = Config::new(
        vec![background],
        vec![size],
        vec![DefaultVariation {
            variation_id: size_id,
            style_id: m,
        }],
        vec![PropConfig::new(background_id, json!("dark.surface.default.solid-primary"))],
    )
    .unwrap();

    Fixture {
        config,
        background: background_id,
        size: size_id,
        m,
    }
}

#[test]
fn default_resolves_to_style_and_first_style_is_unconditional() {
    let Fixture { config, size, m, .. } = fixture();

    let default = config.defaults()[0];
    assert_eq!(default.variation_id, size);
    assert_eq!(default.style_id, m);

    let variation = config.variation(default.variation_id).unwrap();
    assert_eq!(variation.style(Some(default.style_id)).unwrap().name, "m");
    assert_eq!(variation.style(None).unwrap().name, "s");
}

#[test]
fn wire_format_uses_id_suffixes() {
    let Fixture { config, size, m, .. } = fixture();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(
        value["defaultVariations"],
        json!([{ "variationID": size, "styleID": m }])
    );
    assert!(value["invariantProps"].is_array());

    let back: Config = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);
}

#[test]
fn dangling_default_fails_to_deserialize() {
    let Fixture { config, size, .. } = fixture();
    let mut value = serde_json::to_value(&config).unwrap();
    value["defaultVariations"] = json!([{ "variationID": size, "styleID": Uuid::nil() }]);

    let err = serde_json::from_value::<Config>(value).unwrap_err();
    assert!(err.to_string().contains("has no style"), "{err}");

    let unknown = Config::new(
        Vec::new(),
        Vec::new(),
        vec![DefaultVariation {
            variation_id: Uuid::nil(),
            style_id: Uuid::nil(),
        }],
        Vec::new(),
    );
    assert!(matches!(unknown, Err(ConfigError::UnknownVariation(_))));
}

#[test]
fn exact_state_sets_are_not_duplicated() {
    let Fixture {
        mut config,
        background,
        size,
        m,
    } = fixture();

    let hovered = || PropStateValue::new([PropState::Hovered], json!("dark.surface.default.accent-hover"));
    assert!(config.add_token_state(background, hovered(), Some(size), Some(m)).unwrap());
    assert!(!config.add_token_state(background, hovered(), Some(size), Some(m)).unwrap());

    let combined = PropStateValue::new(
        [PropState::Selected, PropState::Hovered],
        json!("dark.surface.default.accent-active"),
    );
    assert!(config.add_token_state(background, combined, Some(size), Some(m)).unwrap());

    let style = config.variation(size).unwrap().style(Some(m)).unwrap();
    assert_eq!(style.prop(background).unwrap().states.len(), 2);
}

#[test]
fn token_state_without_style_targets_invariant_props() {
    let Fixture {
        mut config,
        background,
        ..
    } = fixture();

    let pressed = PropStateValue::new([PropState::Pressed], json!("dark.surface.default.solid-primary-active"));
    assert!(config.add_token_state(background, pressed, None, None).unwrap());
    assert_eq!(config.invariant_props()[0].states.len(), 1);

    let missing = config.add_token_state(
        Uuid::nil(),
        PropStateValue::new([PropState::Focused], json!(null)),
        None,
        None,
    );
    assert!(matches!(missing, Err(ConfigError::UnknownProp(_))));
}

#[test]
fn custom_state_predicate_is_honored() {
    let Fixture {
        mut config,
        background,
        ..
    } = fixture();

    let never_again = |prop: &PropConfig, _: &PropStateValue| !prop.states.is_empty();
    let first = PropStateValue::new([PropState::Hovered], json!(1));
    let second = PropStateValue::new([PropState::Pressed], json!(2));
    assert!(config
        .add_token_state_with(background, first, None, None, never_again)
        .unwrap());
    assert!(!config
        .add_token_state_with(background, second, None, None, never_again)
        .unwrap());
}

#[test]
fn removing_default_style_drops_the_default() {
    let Fixture {
        mut config, size, m, ..
    } = fixture();

    assert!(config.remove_style(size, m).unwrap());
    assert!(config.defaults().is_empty());
    assert!(config.set_default(size, m).is_err());

    let s = config.variation(size).unwrap().style(None).unwrap().id;
    config.set_default(size, s).unwrap();
    assert_eq!(config.default_selection().get("size").map(String::as_str), Some("s"));
}

#[test]
fn component_meta_round_trips() {
    let Fixture { config, .. } = fixture();
    let meta = ComponentMeta::new("button", config);
    let json = serde_json::to_string(&meta).unwrap();
    let back: ComponentMeta = serde_json::from_str(&json).unwrap();
    assert_eq!(back, meta);
    assert!(!json.contains("description"));
}
