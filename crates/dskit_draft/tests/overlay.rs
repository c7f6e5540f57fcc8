use dskit_draft::{
    draft_key, DraftAction, DraftChange, DraftOverlay, DraftStore, DraftValues, FileDraftStore,
    MemoryDraftStore,
};
use dskit_theme::{build_default_theme, DefaultThemeConfig, Theme};
use dskit_tokens::{Platform, VariationKind};
use pretty_assertions::assert_eq;
use serde_json::json;

const NAME: &str = "acme";
const VERSION: &str = "1.2.0";

fn theme() -> Theme {
    build_default_theme(&DefaultThemeConfig::new(NAME)).unwrap()
}

#[test]
fn saved_values_are_reapplied_after_reload() {
    let mut edited = theme();
    let mut overlay = DraftOverlay::new(MemoryDraftStore::new());

    let token = edited
        .token_mut("spacing.4x", VariationKind::Spacing)
        .unwrap();
    token.set_value(Platform::Ios, json!({ "value": 5 })).unwrap();
    token.set_description(Some("Tweaked".to_string()));
    overlay
        .update_token_change(NAME, VERSION, token, DraftAction::Save)
        .unwrap();

    let mut reloaded = theme();
    let report = overlay
        .apply_draft_changes(&mut reloaded, NAME, VERSION)
        .unwrap();
    assert_eq!(report.applied, 1);
    assert!(report.skipped.is_empty());

    let original = edited.token("spacing.4x", VariationKind::Spacing).unwrap();
    let applied = reloaded.token("spacing.4x", VariationKind::Spacing).unwrap();
    for platform in Platform::all() {
        assert_eq!(applied.value(*platform), original.value(*platform));
    }
    assert_eq!(applied.description(), Some("Tweaked"));
}

#[test]
fn toggled_token_keeps_enabled_flag() {
    let mut edited = theme();
    let mut overlay = DraftOverlay::new(MemoryDraftStore::new());

    let token = edited.token_mut("round.xl", VariationKind::Shape).unwrap();
    token.set_enabled(false);
    overlay
        .update_token_change(NAME, VERSION, token, DraftAction::Toggle)
        .unwrap();

    let mut reloaded = theme();
    overlay
        .apply_draft_changes(&mut reloaded, NAME, VERSION)
        .unwrap();
    let token = reloaded.token("round.xl", VariationKind::Shape).unwrap();
    assert!(!token.is_enabled());
    assert_eq!(token.description(), None);
}

#[test]
fn drafts_for_unknown_tokens_are_skipped() {
    let mut store = MemoryDraftStore::new();
    let mut changes = dskit_draft::DraftChanges::new();
    changes.insert(
        "round.huge".to_string(),
        DraftChange {
            kind: VariationKind::Shape,
            values: DraftValues {
                web: json!("48px"),
                ios: json!({ "kind": "rounded", "cornerRadius": 48 }),
                android: json!({ "kind": "rounded", "cornerRadius": 48 }),
            },
            description: None,
            enabled: true,
        },
    );
    store.save(&draft_key(NAME, VERSION), &changes).unwrap();

    let overlay = DraftOverlay::new(store);
    let mut reloaded = theme();
    let before = reloaded.len();
    let report = overlay
        .apply_draft_changes(&mut reloaded, NAME, VERSION)
        .unwrap();

    assert_eq!(report.applied, 0);
    assert_eq!(report.skipped, vec!["round.huge".to_string()]);
    assert_eq!(reloaded.len(), before);
    assert!(reloaded.token("round.huge", VariationKind::Shape).is_none());
}

#[test]
fn removing_last_change_deletes_the_key() {
    let mut edited = theme();
    let mut overlay = DraftOverlay::new(MemoryDraftStore::new());
    let key = draft_key(NAME, VERSION);
    assert_eq!(key, "ds_draft:acme:1.2.0");

    let token = edited.token_mut("round.s", VariationKind::Shape).unwrap();
    overlay
        .update_token_change(NAME, VERSION, token, DraftAction::Save)
        .unwrap();
    assert!(overlay.store().contains(&key));

    overlay
        .update_token_change(NAME, VERSION, token, DraftAction::Remove)
        .unwrap();
    assert!(!overlay.store().contains(&key));
    assert!(overlay.changes(NAME, VERSION).unwrap().is_empty());
}

#[test]
fn versions_do_not_share_drafts() {
    let mut edited = theme();
    let mut overlay = DraftOverlay::new(MemoryDraftStore::new());
    let token = edited.token_mut("round.s", VariationKind::Shape).unwrap();
    overlay
        .update_token_change(NAME, VERSION, token, DraftAction::Save)
        .unwrap();

    assert_eq!(overlay.changes(NAME, VERSION).unwrap().len(), 1);
    assert!(overlay.changes(NAME, "2.0.0").unwrap().is_empty());

    overlay.discard(NAME, VERSION).unwrap();
    assert!(overlay.changes(NAME, VERSION).unwrap().is_empty());
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let mut edited = theme();

    let token = edited
        .token_mut("dark.text.default.primary", VariationKind::Color)
        .unwrap();
    token.set_value(Platform::Web, json!("#EEEEEE")).unwrap();

    let mut overlay = DraftOverlay::new(FileDraftStore::new(dir.path().join("drafts")));
    overlay
        .update_token_change(NAME, VERSION, token, DraftAction::Save)
        .unwrap();

    let path = overlay.store().path_for(&draft_key(NAME, VERSION));
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "ds_draft_acme_1.2.0.json"
    );
    assert!(path.exists());

    let reopened = DraftOverlay::new(FileDraftStore::new(dir.path().join("drafts")));
    let mut reloaded = theme();
    reopened
        .apply_draft_changes(&mut reloaded, NAME, VERSION)
        .unwrap();
    let token = reloaded
        .token("dark.text.default.primary", VariationKind::Color)
        .unwrap();
    assert_eq!(token.value_json(Platform::Web).unwrap(), json!("#EEEEEE"));

    let mut reopened = reopened;
    reopened.discard(NAME, VERSION).unwrap();
    assert!(!path.exists());
}
