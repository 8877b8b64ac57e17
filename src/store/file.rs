use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{CompletionStore, StoreError};

const STORE_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CompletionFile {
    version: String,
    entries: BTreeMap<String, CompletionEntry>,
}

impl Default for CompletionFile {
    fn default() -> Self {
        Self {
            version: STORE_VERSION.to_string(),
            entries: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CompletionEntry {
    completed: bool,
    updated_at: DateTime<Utc>,
}

/// Completion set stored as a JSON file
///
/// The file is re-read on every access, so clones pointing at the same path
/// always agree. A missing file is an empty set.
#[derive(Debug, Clone)]
pub struct JsonFileCompletionStore {
    path: PathBuf,
}

impl JsonFileCompletionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All keys currently recorded as completed
    pub fn completed_keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .read()?
            .entries
            .into_iter()
            .filter(|(_, entry)| entry.completed)
            .map(|(key, _)| key)
            .collect())
    }

    fn read(&self) -> Result<CompletionFile, StoreError> {
        if !self.path.exists() {
            return Ok(CompletionFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let file: CompletionFile = serde_json::from_str(&content)?;
        if file.version != STORE_VERSION {
            return Err(StoreError::VersionMismatch {
                expected: STORE_VERSION.to_string(),
                found: file.version,
            });
        }
        Ok(file)
    }

    fn write(&self, file: &CompletionFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let serialized = serde_json::to_string_pretty(file)?;

        // Write to temporary file first, then rename
        let temp_file = format!("{}.tmp", self.path.display());
        fs::write(&temp_file, serialized)?;
        fs::rename(&temp_file, &self.path)?;
        Ok(())
    }
}

impl CompletionStore for JsonFileCompletionStore {
    fn get(&self, key: &str) -> Result<bool, StoreError> {
        let completed = self
            .read()?
            .entries
            .get(key)
            .map(|entry| entry.completed)
            .unwrap_or(false);
        debug!(key = %key, completed = completed, file = ?self.path, "Read completion flag");
        Ok(completed)
    }

    fn set(&mut self, key: &str, completed: bool) -> Result<(), StoreError> {
        let mut file = self.read()?;
        file.entries.insert(
            key.to_string(),
            CompletionEntry {
                completed,
                updated_at: Utc::now(),
            },
        );
        self.write(&file)?;
        info!(key = %key, completed = completed, file = ?self.path, "Completion flag saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut file = self.read()?;
        if file.entries.remove(key).is_some() {
            self.write(&file)?;
            info!(key = %key, file = ?self.path, "Completion flag removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_set() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileCompletionStore::new(dir.path().join("completions.json"));
        assert!(!store.get("intro").unwrap());
        assert!(store.completed_keys().unwrap().is_empty());
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/state/completions.json");
        let mut store = JsonFileCompletionStore::new(&path);

        store.set("intro", true).unwrap();

        assert!(path.exists());
        let reopened = JsonFileCompletionStore::new(&path);
        assert!(reopened.get("intro").unwrap());
        assert_eq!(reopened.completed_keys().unwrap(), vec!["intro".to_string()]);
    }

    #[test]
    fn test_remove_forgets_key() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileCompletionStore::new(dir.path().join("completions.json"));
        store.set("intro", true).unwrap();
        store.set("tour", true).unwrap();

        store.remove("intro").unwrap();

        assert!(!store.get("intro").unwrap());
        assert!(store.get("tour").unwrap());
    }

    #[test]
    fn test_version_mismatch_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("completions.json");
        fs::write(&path, r#"{"version":"99","entries":{}}"#).unwrap();

        let store = JsonFileCompletionStore::new(&path);
        assert!(matches!(
            store.get("intro"),
            Err(StoreError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("completions.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileCompletionStore::new(&path);
        assert!(matches!(
            store.get("intro"),
            Err(StoreError::SerializationError(_))
        ));
    }
}
