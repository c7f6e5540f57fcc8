//! Draft persistence

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::change::DraftChanges;
use crate::DraftError;

/// Key-value storage for draft change maps
pub trait DraftStore {
    /// `None` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<DraftChanges>, DraftError>;

    fn save(&mut self, key: &str, changes: &DraftChanges) -> Result<(), DraftError>;

    fn clear(&mut self, key: &str) -> Result<(), DraftError>;
}

/// In-memory store holding serialized JSON, like a browser's local storage
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    entries: FxHashMap<String, String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self, key: &str) -> Result<Option<DraftChanges>, DraftError> {
        self.entries
            .get(key)
            .map(|raw| serde_json::from_str(raw))
            .transpose()
            .map_err(DraftError::from)
    }

    fn save(&mut self, key: &str, changes: &DraftChanges) -> Result<(), DraftError> {
        self.entries
            .insert(key.to_string(), serde_json::to_string(changes)?);
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), DraftError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`; characters unsafe in file names become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '@' => c,
                _ => '_',
            })
            .collect();
        self.dir.join(format!("{stem}.json"))
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self, key: &str) -> Result<Option<DraftChanges>, DraftError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|source| DraftError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&mut self, key: &str, changes: &DraftChanges) -> Result<(), DraftError> {
        fs::create_dir_all(&self.dir).map_err(|source| DraftError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(changes)?;
        fs::write(&path, content).map_err(|source| DraftError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Saved {} draft changes to {}", changes.len(), path.display());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), DraftError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|source| DraftError::Io { path, source })?;
        }
        Ok(())
    }
}
