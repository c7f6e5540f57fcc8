use std::io::{Cursor, Write};

use dskit_archive::{member_name, ArchiveError, ThemeArchiveCodec, ZipThemeCodec, META_MEMBER};
use dskit_theme::{build_default_theme, DefaultThemeConfig, Theme, ThemeMeta};
use dskit_tokens::{Color, Platform, Token, TokenMeta, TokenPath, TokenValue, VariationKind};
use pretty_assertions::assert_eq;
use serde_json::json;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn assert_same_tokens(left: &Theme, right: &Theme) {
    assert_eq!(left.len(), right.len());
    for token in left.iter() {
        let other = right
            .token(token.name(), token.kind())
            .unwrap_or_else(|| panic!("`{}` missing after round trip", token.name()));
        for platform in Platform::all() {
            assert_eq!(
                other.value_json(*platform).unwrap(),
                token.value_json(*platform).unwrap(),
                "{} on {platform}",
                token.name()
            );
        }
    }
}

fn zip_of(members: &[(&str, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in members {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn meta_json(name: &str) -> String {
    serde_json::to_string(&ThemeMeta {
        name: name.to_string(),
        version: "1.0.0".to_string(),
        tokens: Vec::new(),
    })
    .unwrap()
}

#[test]
fn default_theme_survives_round_trip() {
    let theme = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();
    let codec = ZipThemeCodec::new();

    let decoded = codec.decode(&codec.encode(&theme).unwrap()).unwrap();
    assert_eq!(decoded.name(), "acme");
    assert_eq!(decoded.version(), theme.version());
    assert_same_tokens(&theme, &decoded);
}

#[test]
fn edited_values_survive_round_trip() {
    let mut theme = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();
    theme
        .token_mut("screen-m.body.m", VariationKind::Typography)
        .unwrap()
        .set_value(Platform::Android, json!({ "size": 15 }))
        .unwrap();
    theme
        .token_mut("dark.surface.default.accent", VariationKind::Color)
        .unwrap()
        .set_enabled(false);

    let codec = ZipThemeCodec::stored();
    let decoded = codec.decode(&codec.encode(&theme).unwrap()).unwrap();
    assert_same_tokens(&theme, &decoded);
    assert!(!decoded
        .token("dark.surface.default.accent", VariationKind::Color)
        .unwrap()
        .is_enabled());
}

#[test]
fn user_token_with_state_suffix_survives_round_trip() {
    let mut theme = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();
    let red = Color::parse("#FF0000").unwrap();
    let hover = Token::from_values(
        TokenMeta::new(
            VariationKind::Color,
            TokenPath::parse("dark.text.default.primary-hover").unwrap(),
            "primary-hover",
        )
        .unwrap(),
        TokenValue::WebColor("#FF0000".to_string()),
        TokenValue::IosColor(red.into()),
        TokenValue::AndroidColor(red.into()),
    )
    .unwrap();
    theme.add_token(VariationKind::Color, hover);

    let codec = ZipThemeCodec::new();
    let decoded = codec.decode(&codec.encode(&theme).unwrap()).unwrap();
    assert_eq!(decoded.len(), 448);
    assert_same_tokens(&theme, &decoded);
}

#[test]
fn archive_has_one_member_per_platform_and_kind() {
    let theme = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();
    let bytes = ZipThemeCodec::new().encode(&theme).unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    let mut expected: Vec<String> = VariationKind::all()
        .iter()
        .flat_map(|kind| Platform::all().iter().map(move |p| member_name(*p, *kind)))
        .collect();
    expected.push(META_MEMBER.to_string());
    expected.sort_unstable();

    assert_eq!(names, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn last_meta_candidate_wins() {
    let bytes = zip_of(&[
        ("first.json", meta_json("first")),
        ("web_color.json", "{}".to_string()),
        ("theme.json", meta_json("second")),
    ]);

    let data = ZipThemeCodec::new().decode_data(&bytes).unwrap();
    assert_eq!(data.meta.name, "second");
    assert!(data.variations[&VariationKind::Color][&Platform::Web].is_empty());
}

#[test]
fn split_value_members_are_merged() {
    let bytes = zip_of(&[
        (META_MEMBER, meta_json("acme")),
        ("a/web_spacing.json", r#"{"spacing.1x": "1px"}"#.to_string()),
        ("b/web_spacing.json", r#"{"spacing.2x": "2px"}"#.to_string()),
    ]);

    let data = ZipThemeCodec::new().decode_data(&bytes).unwrap();
    assert_eq!(data.variations[&VariationKind::Spacing][&Platform::Web].len(), 2);
}

#[test]
fn archive_without_meta_is_rejected() {
    let bytes = zip_of(&[("ios_shape.json", "{}".to_string())]);
    assert!(matches!(
        ZipThemeCodec::new().decode(&bytes),
        Err(ArchiveError::MissingMeta)
    ));
}

#[test]
fn declared_token_without_values_is_an_error() {
    let meta = json!({
        "name": "acme",
        "version": "1.0.0",
        "tokens": [{
            "type": "shape",
            "name": "round.m",
            "tags": ["round", "m"],
            "displayName": "m"
        }]
    });
    let bytes = zip_of(&[
        (META_MEMBER, meta.to_string()),
        ("web_shape.json", r#"{"round.m": "12px"}"#.to_string()),
        ("ios_shape.json", r#"{"round.m": {"kind": "rounded", "cornerRadius": 12}}"#.to_string()),
    ]);

    let err = ZipThemeCodec::new().decode(&bytes).unwrap_err();
    assert!(err.to_string().contains("token not found"), "{err}");
}

#[test]
fn files_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acme.zip");
    let theme = build_default_theme(&DefaultThemeConfig::new("acme")).unwrap();

    let codec = ZipThemeCodec::new();
    codec.write_file(&theme, &path).unwrap();
    assert_same_tokens(&theme, &codec.read_file(&path).unwrap());

    let missing = codec.read_file(&dir.path().join("missing.zip"));
    assert!(matches!(missing, Err(ArchiveError::File { .. })));
}
