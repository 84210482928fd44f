use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::KeyValueStore;

/// File-backed store: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open a store under the platform data directory for `app_name`.
    pub fn open_default(app_name: &str) -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Self::new(data_dir.join(app_name))
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read store entry: {}", key))?;
        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write store entry: {}", key))?;
        debug!(key, "store entry written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove store entry: {}", key))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();

        store.set("adminSession", "{\"x\":1}").unwrap();
        assert_eq!(
            store.get("adminSession").unwrap().as_deref(),
            Some("{\"x\":1}")
        );
        assert!(tmp.path().join("adminSession.json").exists());

        store.remove("adminSession").unwrap();
        assert_eq!(store.get("adminSession").unwrap(), None);
        assert!(!tmp.path().join("adminSession.json").exists());
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();
        store.remove("nope").unwrap();
    }

    #[test]
    fn test_new_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let store = FileStore::new(&nested).unwrap();
        assert!(store.dir().exists());
    }
}
