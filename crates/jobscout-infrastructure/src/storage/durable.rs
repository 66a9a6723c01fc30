//! Durable key/value storage.
//!
//! Mirrors the shape of browser local storage: string keys, string values,
//! synchronous access, scoped to one profile directory.

use std::path::{Path, PathBuf};

use jobscout_core::JobScoutError;
use jobscout_core::error::Result;

use super::atomic_file::AtomicFile;

/// String key/value storage that survives restarts.
pub trait DurableStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Succeeds when `key` is absent.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one `<key>.json` file per key inside a directory.
///
/// Files are written atomically and readable by the owner only, since
/// values may carry bearer tokens.
#[derive(Debug, Clone)]
pub struct FileDurableStorage {
    dir: PathBuf,
}

impl FileDurableStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        validate_key(key)?;
        Ok(AtomicFile::new(self.dir.join(format!("{}.json", key))).private())
    }
}

impl DurableStorage for FileDurableStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.file_for(key)?.load()?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.file_for(key)?.save(value)?;
        tracing::debug!(key, dir = %self.dir.display(), "Stored item");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.file_for(key)?.remove()?;
        tracing::debug!(key, dir = %self.dir.display(), "Removed item");
        Ok(())
    }
}

/// Keys become file names, so only a conservative alphabet is accepted.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');

    if valid {
        Ok(())
    } else {
        Err(JobScoutError::storage(format!("Invalid storage key '{}'", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDurableStorage::new(temp_dir.path().join("storage"));

        assert!(storage.get_item("currentUser").unwrap().is_none());

        storage.set_item("currentUser", "{}").unwrap();
        assert_eq!(storage.get_item("currentUser").unwrap().as_deref(), Some("{}"));
        assert!(temp_dir.path().join("storage").join("currentUser.json").exists());

        storage.remove_item("currentUser").unwrap();
        assert!(storage.get_item("currentUser").unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_key_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDurableStorage::new(temp_dir.path());
        storage.remove_item("nothing-here").unwrap();
    }

    #[test]
    fn test_values_survive_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        FileDurableStorage::new(temp_dir.path())
            .set_item("k", "v")
            .unwrap();

        let reopened = FileDurableStorage::new(temp_dir.path());
        assert_eq!(reopened.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileDurableStorage::new(temp_dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(storage.set_item(key, "v").is_err(), "key {:?} accepted", key);
        }
    }
}
