use dskit_tokens::values::{NativeSpacing, NativeTypography, SpacingUnit};
use dskit_tokens::{
    Platform, Token, TokenError, TokenMeta, TokenPath, TokenValue, UpdatePolicy, VariationKind,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn typography_token() -> Token {
    let meta = TokenMeta::new(
        VariationKind::Typography,
        TokenPath::nested("screen-s", "body", "m"),
        "body m",
    )
    .unwrap();

    let native = json!({
        "fontFamilyRef": "fontFamily.body",
        "weight": "regular",
        "style": "normal",
        "size": 16,
        "lineHeight": 20,
        "kerning": 0
    });

    Token::new(
        meta,
        [
            (
                Platform::Web,
                json!({
                    "fontFamilyRef": "fontFamily.body",
                    "fontWeight": "400",
                    "fontStyle": "normal",
                    "fontSize": "1rem",
                    "lineHeight": "1.25rem",
                    "letterSpacing": "normal"
                }),
            ),
            (Platform::Ios, native.clone()),
            (Platform::Android, native),
        ],
    )
    .unwrap()
}

#[test]
fn native_typography_merges_partial_updates() {
    let mut token = typography_token();
    token.set_value(Platform::Ios, json!({ "size": 18 })).unwrap();

    let TokenValue::NativeTypography(NativeTypography {
        size,
        line_height,
        font_family_ref,
        ..
    }) = token.value(Platform::Ios)
    else {
        panic!("expected native typography");
    };
    assert_eq!(*size, 18.0);
    assert_eq!(*line_height, 20.0);
    assert_eq!(font_family_ref, "fontFamily.body");

    // Android was not touched.
    assert!(!token.platform_value(Platform::Android).is_modified());
}

#[test]
fn web_typography_rejects_partial_updates() {
    let mut token = typography_token();
    assert_eq!(
        token.platform_value(Platform::Web).policy(),
        UpdatePolicy::Replace
    );
    assert!(token.set_value(Platform::Web, json!({ "fontSize": "2rem" })).is_err());
    assert!(!token.is_modified());
}

#[test]
fn replace_value_ignores_merge_policy() {
    let meta =
        TokenMeta::new(VariationKind::Spacing, TokenPath::flat("spacing", "2x"), "2x").unwrap();
    let mut token = Token::new(
        meta,
        [
            (Platform::Web, json!("2px")),
            (Platform::Ios, json!({ "value": 2, "unit": "pt" })),
            (Platform::Android, json!({ "value": 2, "unit": "dp" })),
        ],
    )
    .unwrap();

    assert!(token.replace_value(Platform::Ios, json!({ "value": 6 })).is_err());
    token
        .replace_value(Platform::Ios, json!({ "value": 6, "unit": "pt" }))
        .unwrap();
    assert_eq!(
        token.value(Platform::Ios),
        &TokenValue::NativeSpacing(NativeSpacing {
            value: 6.0,
            unit: SpacingUnit::Pt
        })
    );
}

#[test]
fn toggling_and_description_do_not_touch_values() {
    let mut token = typography_token();
    token.set_enabled(false);
    token.set_description(Some("Body copy".to_string()));
    assert!(!token.is_enabled());
    assert_eq!(token.description(), Some("Body copy"));
    assert!(!token.is_modified());
}

fn color_token() -> Token {
    let meta = TokenMeta::new(
        VariationKind::Color,
        TokenPath::full("dark", "text", "default", "primary"),
        "primary",
    )
    .unwrap();
    Token::new(
        meta,
        [
            (Platform::Web, json!("#FFFFFF")),
            (
                Platform::Ios,
                json!({ "red": 1.0, "green": 1.0, "blue": 1.0, "alpha": 1.0 }),
            ),
            (Platform::Android, json!({ "hex": "#FFFFFFFF" })),
        ],
    )
    .unwrap()
}

#[test]
fn malformed_colors_are_rejected_and_keep_the_value() {
    let mut token = color_token();

    for (platform, raw) in [
        (Platform::Web, json!("blue")),
        (Platform::Android, json!({ "hex": "nope" })),
        (Platform::Android, json!({ "hex": "#1é23456" })),
    ] {
        let err = token.set_value(platform, raw).unwrap_err();
        assert!(
            matches!(err, TokenError::InvalidValue { kind: VariationKind::Color, .. }),
            "{err}"
        );
    }

    assert!(!token.is_modified());
    assert_eq!(token.value_json(Platform::Android).unwrap(), json!({ "hex": "#FFFFFFFF" }));
}
