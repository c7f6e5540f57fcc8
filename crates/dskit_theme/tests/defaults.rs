use dskit_theme::{
    build_default_theme, build_theme, create_meta_tokens, create_variation_tokens, ColorMode,
    DefaultThemeConfig, Grayscale, ThemeData, ThemeError,
};
use dskit_tokens::{Color, Platform, Token, TokenMeta, TokenPath, TokenValue, VariationKind};
use pretty_assertions::assert_eq;

fn default_theme() -> dskit_theme::Theme {
    build_default_theme(&DefaultThemeConfig::new("acme")).unwrap()
}

#[test]
fn catalog_sizes_per_kind() {
    let theme = default_theme();
    let counts: Vec<(VariationKind, usize)> = VariationKind::all()
        .iter()
        .map(|kind| (*kind, theme.tokens(*kind).len()))
        .collect();

    assert_eq!(
        counts,
        vec![
            (VariationKind::Color, 312),
            (VariationKind::Gradient, 24),
            (VariationKind::Shadow, 12),
            (VariationKind::Shape, 8),
            (VariationKind::Spacing, 15),
            (VariationKind::Typography, 72),
            (VariationKind::FontFamily, 4),
        ]
    );
    assert_eq!(theme.len(), 447);
}

#[test]
fn every_token_fits_each_platform() {
    let theme = default_theme();
    for token in theme.iter() {
        for platform in Platform::all() {
            assert!(
                token.value(*platform).fits(token.kind(), *platform),
                "{} on {platform}",
                token.name()
            );
        }
        assert!(!token.is_modified());
    }
}

#[test]
fn generation_is_deterministic() {
    let config = DefaultThemeConfig::new("acme");
    let first = ThemeData::from_theme(&build_default_theme(&config).unwrap()).unwrap();
    let second = ThemeData::from_theme(&build_default_theme(&config).unwrap()).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn accent_follows_config() {
    let mut config = DefaultThemeConfig::new("acme");
    config.accent.dark = "#FF0000".to_string();
    config.grayscale.light = Grayscale::WarmGray;
    let theme = build_default_theme(&config).unwrap();

    let accent = theme
        .token("dark.text.default.accent", VariationKind::Color)
        .unwrap();
    assert_eq!(
        accent.value(Platform::Web),
        &TokenValue::WebColor("#FF0000".to_string())
    );

    // inverse of light is drawn on the dark scheme
    let inverse = theme
        .token("light.surface.inverse.accent", VariationKind::Color)
        .unwrap();
    assert_eq!(inverse.value(Platform::Web), accent.value(Platform::Web));
    assert_eq!(ColorMode::Light.inverse(), ColorMode::Dark);
}

#[test]
fn invalid_accent_aborts_generation() {
    let mut config = DefaultThemeConfig::new("acme");
    config.accent.light = "not-a-color".to_string();
    assert!(matches!(
        build_default_theme(&config),
        Err(ThemeError::InvalidConfig(_))
    ));
}

#[test]
fn storage_projection_adds_state_tokens() {
    let theme = default_theme();
    let meta = create_meta_tokens(&theme);

    // text and outline get hover/active, surface also brightness
    assert_eq!(meta.tokens.len(), 447 + 768);
    assert!(meta
        .tokens
        .iter()
        .any(|t| t.name() == "dark.surface.default.solid-primary-brightness"));
    assert!(!meta
        .tokens
        .iter()
        .any(|t| t.name() == "dark.background.default.primary-hover"));
}

#[test]
fn rebuild_drops_state_tokens_and_keeps_values() {
    let theme = default_theme();
    let meta = create_meta_tokens(&theme);
    let variations = create_variation_tokens(&theme).unwrap();
    let rebuilt = build_theme(&meta, &variations).unwrap();

    assert_eq!(rebuilt.len(), theme.len());
    for token in theme.iter() {
        let other = rebuilt.token(token.name(), token.kind()).unwrap();
        for platform in Platform::all() {
            assert_eq!(other.value(*platform), token.value(*platform));
        }
        assert_eq!(other.meta(), token.meta());
    }
}

fn user_color(name: &str, hex: &str) -> Token {
    let path = TokenPath::parse(name).unwrap();
    let leaf = path.leaf().to_string();
    let parsed = Color::parse(hex).unwrap();
    Token::from_values(
        TokenMeta::new(VariationKind::Color, path, leaf).unwrap(),
        TokenValue::WebColor(hex.to_string()),
        TokenValue::IosColor(parsed.into()),
        TokenValue::AndroidColor(parsed.into()),
    )
    .unwrap()
}

#[test]
fn user_token_with_state_suffix_survives_rebuild() {
    let mut theme = default_theme();
    theme.add_token(
        VariationKind::Color,
        user_color("dark.text.default.primary-hover", "#FF0000"),
    );
    assert_eq!(theme.len(), 448);

    let meta = create_meta_tokens(&theme);
    let variations = create_variation_tokens(&theme).unwrap();
    // the user token takes the place of the generated companion
    assert_eq!(meta.tokens.len(), 448 + 767);

    let rebuilt = build_theme(&meta, &variations).unwrap();
    assert_eq!(rebuilt.len(), 448);
    let hover = rebuilt
        .token("dark.text.default.primary-hover", VariationKind::Color)
        .unwrap();
    assert!(!hover.meta().is_derived());
    assert_eq!(
        hover.value(Platform::Web),
        &TokenValue::WebColor("#FF0000".to_string())
    );
}
