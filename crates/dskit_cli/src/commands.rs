//! Command handlers

use anyhow::{Context, Result};
use dskit::archive::{ThemeArchiveCodec, ZipThemeCodec};
use dskit::draft::{DraftAction, DraftOverlay, FileDraftStore};
use dskit::theme::{build_default_theme, group_tokens, token_tabs, Theme};
use dskit::tokens::{Platform, VariationKind};
use dskit::{DesignSystem, FsDesignSystemSource, Origin};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::DskitConfig;

/// A project directory and its parsed dskit.toml
pub struct Workspace {
    root: PathBuf,
    config: DskitConfig,
}

impl Workspace {
    pub fn open(root: &Path) -> Result<Self> {
        Ok(Self {
            root: root.to_path_buf(),
            config: DskitConfig::load_from_dir(root)?,
        })
    }

    fn name(&self) -> &str {
        &self.config.project.name
    }

    fn version(&self) -> &str {
        &self.config.project.version
    }

    fn source(&self) -> FsDesignSystemSource {
        FsDesignSystemSource::new(self.root.join(&self.config.paths.store))
    }

    fn drafts(&self) -> DraftOverlay<FileDraftStore> {
        DraftOverlay::new(FileDraftStore::new(self.root.join(&self.config.paths.drafts)))
    }

    /// `output` if given, else `{name}@{version}.zip` in the output directory
    fn archive_path(&self, output: Option<PathBuf>) -> PathBuf {
        output.unwrap_or_else(|| {
            self.root
                .join(&self.config.paths.output)
                .join(format!("{}@{}.zip", self.name(), self.version()))
        })
    }

    fn load(&self) -> Result<DesignSystem> {
        let (system, report) = DesignSystem::load(
            &self.source(),
            &self.drafts(),
            &self.config.theme_config(),
        )
        .with_context(|| format!("Failed to load {}@{}", self.name(), self.version()))?;
        if !report.skipped.is_empty() {
            info!("Drafts without a token: {}", report.skipped.join(", "));
        }
        Ok(system)
    }
}

fn write_archive(theme: &Theme, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    ZipThemeCodec::new()
        .write_file(theme, path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write the default theme of the project palette
pub fn generate(workspace: &Workspace, output: Option<PathBuf>) -> Result<PathBuf> {
    let theme = build_default_theme(&workspace.config.theme_config())
        .context("Failed to generate the default theme")?;
    let path = workspace.archive_path(output);
    write_archive(&theme, &path)?;
    println!("Generated {} tokens into {}", theme.len(), path.display());
    Ok(path)
}

/// Load the design system with drafts applied and write its archive.
///
/// With `save`, the result is also stored and the drafts are dropped.
pub fn export(workspace: &Workspace, output: Option<PathBuf>, save: bool) -> Result<PathBuf> {
    let system = workspace.load()?;
    if system.origin() == Origin::Generated {
        println!("No stored design system, exporting defaults");
    }

    let path = workspace.archive_path(output);
    write_archive(system.theme(), &path)?;
    println!("Exported {} tokens into {}", system.theme().len(), path.display());

    if save {
        let mut source = workspace.source();
        system.save(&mut source)?;
        workspace
            .drafts()
            .discard(workspace.name(), workspace.version())?;
        println!("Stored {}@{}", system.name(), system.version());
    }
    Ok(path)
}

/// Grouped listing of an archive: tabs, or the groups of one kind and mode
pub fn inspect(
    archive: &Path,
    kind: Option<VariationKind>,
    mode: Option<String>,
) -> Result<String> {
    let theme = ZipThemeCodec::new()
        .read_file(archive)
        .with_context(|| format!("Failed to read {}", archive.display()))?;
    let tabs = token_tabs(&theme);

    let Some(kind) = kind else {
        let mut out = format!("{}@{}\n", theme.name(), theme.version());
        for tab in &tabs {
            out.push_str(&format!(
                "  {:<12} {:>4} tokens  modes: {}\n",
                tab.kind.id(),
                tab.count,
                tab.modes.join(", ")
            ));
        }
        return Ok(out);
    };

    let mode = match mode {
        Some(mode) => mode,
        None => tabs
            .iter()
            .find(|tab| tab.kind == kind)
            .and_then(|tab| tab.modes.first().cloned())
            .with_context(|| format!("Archive has no {kind} tokens"))?,
    };

    let mut out = String::new();
    for group in group_tokens(&theme, kind, &mode) {
        out.push_str(&format!("{} ({})\n", group.title, group.id));
        for subgroup in &group.subgroups {
            out.push_str(&format!("  {}\n", subgroup.id));
            for token in &subgroup.tokens {
                let web = token.value_json(Platform::Web)?;
                let flag = if token.is_enabled() { "" } else { " [disabled]" };
                out.push_str(&format!("    {:<40} {web}{flag}\n", token.name()));
            }
        }
    }
    Ok(out)
}

fn resolve_kind(system: &DesignSystem, name: &str, kind: Option<VariationKind>) -> Result<VariationKind> {
    if let Some(kind) = kind {
        return Ok(kind);
    }
    VariationKind::all()
        .iter()
        .copied()
        .find(|kind| system.theme().token(name, *kind).is_some())
        .with_context(|| format!("No token named `{name}`"))
}

/// Edit one platform value and record the token as a draft
pub fn draft_set(
    workspace: &Workspace,
    name: &str,
    kind: Option<VariationKind>,
    platform: Platform,
    value: &str,
) -> Result<()> {
    let mut system = workspace.load()?;
    let kind = resolve_kind(&system, name, kind)?;
    // Bare words are taken as JSON strings so `14px` needs no quoting.
    let raw: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let token = system
        .theme_mut()
        .token_mut(name, kind)
        .with_context(|| format!("No {kind} token named `{name}`"))?;
    token
        .set_value(platform, raw)
        .with_context(|| format!("Rejected {platform} value for `{name}`"))?;

    system.draft_token(&mut workspace.drafts(), name, kind, DraftAction::Save)?;
    println!("Drafted {platform} value of {name}");
    Ok(())
}

/// Flip a token's enabled flag and record it as a draft
pub fn draft_toggle(workspace: &Workspace, name: &str, kind: Option<VariationKind>) -> Result<()> {
    let mut system = workspace.load()?;
    let kind = resolve_kind(&system, name, kind)?;
    let token = system
        .theme_mut()
        .token_mut(name, kind)
        .with_context(|| format!("No {kind} token named `{name}`"))?;
    let enabled = !token.is_enabled();
    token.set_enabled(enabled);

    system.draft_token(&mut workspace.drafts(), name, kind, DraftAction::Toggle)?;
    println!("{name} is now {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

/// Drop the draft of one token
pub fn draft_remove(workspace: &Workspace, name: &str, kind: Option<VariationKind>) -> Result<()> {
    let system = workspace.load()?;
    let kind = resolve_kind(&system, name, kind)?;
    if !system.draft_token(&mut workspace.drafts(), name, kind, DraftAction::Remove)? {
        anyhow::bail!("No {kind} token named `{name}`");
    }
    println!("Removed draft of {name}");
    Ok(())
}

pub fn draft_list(workspace: &Workspace) -> Result<String> {
    let changes = workspace
        .drafts()
        .changes(workspace.name(), workspace.version())?;
    if changes.is_empty() {
        return Ok(format!("No drafts for {}@{}\n", workspace.name(), workspace.version()));
    }

    let mut out = String::new();
    for (name, change) in &changes {
        let flag = if change.enabled { "" } else { " [disabled]" };
        out.push_str(&format!("{:<12} {name}{flag}\n", change.kind.id()));
        for platform in Platform::all() {
            out.push_str(&format!("  {:<8} {}\n", platform.id(), change.values.get(*platform)));
        }
    }
    Ok(out)
}

pub fn draft_discard(workspace: &Workspace) -> Result<()> {
    workspace
        .drafts()
        .discard(workspace.name(), workspace.version())?;
    println!("Discarded drafts of {}@{}", workspace.name(), workspace.version());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::create_project;
    use pretty_assertions::assert_eq;

    fn workspace() -> (tempfile::TempDir, Workspace) {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "acme").unwrap();
        let workspace = Workspace::open(dir.path()).unwrap();
        (dir, workspace)
    }

    #[test]
    fn generate_then_inspect() {
        let (dir, workspace) = workspace();
        let path = generate(&workspace, None).unwrap();
        assert_eq!(path, dir.path().join("dist/acme@0.1.0.zip"));

        let tabs = inspect(&path, None, None).unwrap();
        assert!(tabs.starts_with("acme@0.1.0\n"));
        assert!(tabs.contains("color"));

        let shapes = inspect(&path, Some(VariationKind::Shape), None).unwrap();
        assert!(shapes.contains("round.m"));
        assert!(shapes.contains("\"12px\""));
    }

    #[test]
    fn drafts_flow_into_export() {
        let (dir, workspace) = workspace();
        draft_set(&workspace, "round.m", None, Platform::Web, "14px").unwrap();
        draft_toggle(&workspace, "round.s", Some(VariationKind::Shape)).unwrap();
        assert!(draft_list(&workspace).unwrap().contains("round.s [disabled]"));

        let path = export(&workspace, None, false).unwrap();
        let shapes = inspect(&path, Some(VariationKind::Shape), None).unwrap();
        assert!(shapes.contains("\"14px\""));
        assert!(shapes.contains("[disabled]"));

        draft_remove(&workspace, "round.s", None).unwrap();
        draft_remove(&workspace, "round.m", None).unwrap();
        assert!(draft_list(&workspace).unwrap().starts_with("No drafts"));
        assert!(!dir.path().join(".dskit/drafts").read_dir().unwrap().any(|_| true));
    }

    #[test]
    fn saving_export_bakes_drafts() {
        let (dir, workspace) = workspace();
        draft_set(&workspace, "spacing.2x", None, Platform::Android, r#"{"value": 3}"#).unwrap();
        export(&workspace, None, true).unwrap();

        assert!(dir.path().join("store/acme@0.1.0.json").exists());
        assert!(draft_list(&workspace).unwrap().starts_with("No drafts"));

        let system = workspace.load().unwrap();
        assert_eq!(system.origin(), Origin::Stored);
        assert_eq!(
            system
                .theme()
                .token("spacing.2x", VariationKind::Spacing)
                .unwrap()
                .value_json(Platform::Android)
                .unwrap(),
            serde_json::json!({ "value": 3.0, "unit": "dp" })
        );
    }

    #[test]
    fn unknown_tokens_are_reported() {
        let (_dir, workspace) = workspace();
        assert!(draft_toggle(&workspace, "round.huge", None).is_err());
        assert!(draft_set(&workspace, "round.m", None, Platform::Web, "{\"bad\": 1}").is_err());
    }
}
