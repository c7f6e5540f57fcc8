//! dskit configuration file handling

use anyhow::{Context, Result};
use dskit::theme::{DefaultThemeConfig, Grayscale, ModePair};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "dskit.toml";

/// Top-level dskit configuration (dskit.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct DskitConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Design system identity
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Palette used when no stored design system exists
#[derive(Debug, Deserialize, Serialize)]
pub struct PaletteConfig {
    /// Accent color per mode, `#RRGGBB`
    #[serde(default = "default_accent")]
    pub accent: ModePair<String>,
    #[serde(default = "default_grayscale")]
    pub grayscale: ModePair<Grayscale>,
}

fn default_accent() -> ModePair<String> {
    DefaultThemeConfig::default().accent
}

fn default_grayscale() -> ModePair<Grayscale> {
    DefaultThemeConfig::default().grayscale
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            grayscale: default_grayscale(),
        }
    }
}

/// Locations, relative to the directory holding dskit.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Stored design systems (`name@version.json`)
    #[serde(default = "default_store")]
    pub store: PathBuf,
    /// Pending draft changes
    #[serde(default = "default_drafts")]
    pub drafts: PathBuf,
    /// Generated theme archives
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_store() -> PathBuf {
    PathBuf::from("store")
}

fn default_drafts() -> PathBuf {
    PathBuf::from(".dskit/drafts")
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            store: default_store(),
            drafts: default_drafts(),
            output: default_output(),
        }
    }
}

impl DskitConfig {
    /// Load configuration from a directory (looks for dskit.toml)
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {CONFIG_FILE} found in {}. Run `dskit init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: DskitConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Create a new configuration with the given design system name
    pub fn new(name: &str) -> Self {
        Self {
            project: ProjectConfig {
                name: name.to_string(),
                version: default_version(),
                description: None,
            },
            palette: PaletteConfig::default(),
            paths: PathsConfig::default(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Input for default theme generation
    pub fn theme_config(&self) -> DefaultThemeConfig {
        DefaultThemeConfig {
            name: self.project.name.clone(),
            version: self.project.version.clone(),
            accent: self.palette.accent.clone(),
            grayscale: self.palette.grayscale.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_file_gets_defaults() {
        let config: DskitConfig = toml::from_str("[project]\nname = \"acme\"\n").unwrap();
        assert_eq!(config.project.version, "0.1.0");
        assert_eq!(config.paths.store, PathBuf::from("store"));
        assert_eq!(config.theme_config(), {
            let mut expected = DefaultThemeConfig::new("acme");
            expected.version = "0.1.0".to_string();
            expected
        });
    }

    #[test]
    fn palette_section_is_read() {
        let config: DskitConfig = toml::from_str(
            r##"
[project]
name = "acme"
version = "2.0.0"

[palette.accent]
dark = "#FF0000"
light = "#00FF00"

[palette.grayscale]
dark = "coolGray"
light = "warmGray"
"##,
        )
        .unwrap();

        let theme = config.theme_config();
        assert_eq!(theme.version, "2.0.0");
        assert_eq!(theme.accent.dark, "#FF0000");
        assert_eq!(theme.grayscale.light, Grayscale::WarmGray);
    }

    #[test]
    fn written_config_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), DskitConfig::new("acme").to_toml().unwrap())
            .unwrap();
        let config = DskitConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.project.name, "acme");
        assert_eq!(config.paths.drafts, PathBuf::from(".dskit/drafts"));
    }

    #[test]
    fn missing_config_points_at_init() {
        let dir = tempfile::tempdir().unwrap();
        let err = DskitConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("dskit init"));
    }
}
