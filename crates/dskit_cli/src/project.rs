//! Project scaffolding

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{DskitConfig, CONFIG_FILE};

/// Create dskit.toml and the working directories it names
pub fn create_project(path: &Path, name: &str) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let config = DskitConfig::new(name);
    fs::create_dir_all(path.join(&config.paths.store))
        .with_context(|| format!("Failed to create store in {}", path.display()))?;
    fs::write(&config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    fs::write(
        path.join(".gitignore"),
        format!(
            "# dskit drafts and generated archives\n/{}/\n/{}/\n",
            config.paths.drafts.display(),
            config.paths.output.display()
        ),
    )?;

    Ok(())
}
