//! Where design systems are loaded from and saved to

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::data::{design_system_key, DesignSystemData};
use crate::error::{DesignSystemError, Result};

/// Load/save boundary for stored design systems
///
/// A missing record is `Ok(None)`: callers generate defaults instead of
/// failing.
pub trait DesignSystemSource {
    fn load(&self, name: &str, version: &str) -> Result<Option<DesignSystemData>>;

    fn save(&mut self, name: &str, version: &str, data: &DesignSystemData) -> Result<()>;
}

/// Design systems held in memory, keyed by `name@version`
#[derive(Debug, Default)]
pub struct MemoryDesignSystemSource {
    records: FxHashMap<String, DesignSystemData>,
}

impl MemoryDesignSystemSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl DesignSystemSource for MemoryDesignSystemSource {
    fn load(&self, name: &str, version: &str) -> Result<Option<DesignSystemData>> {
        Ok(self.records.get(&design_system_key(name, version)).cloned())
    }

    fn save(&mut self, name: &str, version: &str, data: &DesignSystemData) -> Result<()> {
        self.records
            .insert(design_system_key(name, version), data.clone());
        Ok(())
    }
}

/// One `name@version.json` file per design system inside a directory
#[derive(Debug, Clone)]
pub struct FsDesignSystemSource {
    dir: PathBuf,
}

impl FsDesignSystemSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File of `name`@`version`.
    ///
    /// Keys that would leave the directory are rejected.
    pub fn path_for(&self, name: &str, version: &str) -> Result<PathBuf> {
        let key = design_system_key(name, version);
        if name.is_empty()
            || version.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
        {
            return Err(DesignSystemError::InvalidKey(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl DesignSystemSource for FsDesignSystemSource {
    fn load(&self, name: &str, version: &str) -> Result<Option<DesignSystemData>> {
        let path = self.path_for(name, version)?;
        if !path.exists() {
            debug!("No stored design system at {}", path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|source| DesignSystemError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, name: &str, version: &str, data: &DesignSystemData) -> Result<()> {
        let path = self.path_for(name, version)?;
        fs::create_dir_all(&self.dir).map_err(|source| DesignSystemError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&path, content).map_err(|source| DesignSystemError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Saved design system to {}", path.display());
        Ok(())
    }
}
