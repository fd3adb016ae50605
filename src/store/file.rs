//! JSON-file backed store with locked atomic writes

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::KeyValueStore;

/// Key-value store persisted as a JSON object in a single file
///
/// Every mutation rewrites the file with an exclusive lock and an atomic
/// temp-file + rename, so concurrent processes cannot corrupt it and a crash
/// mid-write leaves the previous state intact.
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Default store location (`~/.axess/state.json`)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".axess")
            .join("state.json")
    }

    /// Open a store at the default location
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path())
    }

    /// Open a store file, loading existing entries if the file is present
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read store file: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse store file: {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// The file this store writes through to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .with_context(|| "Failed to serialize store")?;

        // Lock file is separate from the store to survive the rename
        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire store lock")?;

        // Atomic write: temp file + rename
        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write store content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync store file")?;

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename store file: {}", self.path.display()))?;

        // Lock released when lock_file is dropped
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            tracing::warn!(key, error = %e, "failed to persist store write");
        }
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            if let Err(e) = self.persist() {
                tracing::warn!(key, error = %e, "failed to persist store removal");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(&dir.path().join("state.json")).unwrap();
        assert_eq!(store.get("a11y:zoomLevel"), None);
    }

    #[test]
    fn set_then_reopen_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a11y:zoomLevel", "120");
        store.set("a11y:userAdjusted", "true");

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a11y:zoomLevel").as_deref(), Some("120"));
        assert_eq!(reopened.get("a11y:userAdjusted").as_deref(), Some("true"));
    }

    #[test]
    fn remove_deletes_durably() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("isLoggedIn", "true");
        store.remove("isLoggedIn");

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("isLoggedIn"), None);
    }
}
