//! String key/value store persisted as TOML.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};

/// Key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Key holding the theme preference, `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

const FILE_NAME: &str = "storage.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    items: BTreeMap<String, String>,
}

/// Persistent string key/value store.
///
/// Every mutation is written through to disk immediately, so a crash never
/// loses a login or theme change that the UI already reflected.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl LocalStore {
    /// Default store location inside the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("edu", "AlumniAssociation", "AlumniPortal")
            .map(|dirs| dirs.data_dir().join(FILE_NAME))
            .ok_or(StorageError::NoDataDir)
    }

    /// Open the store at `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str::<StoreFile>(&content)
                    .map_err(|source| StorageError::Corrupted {
                        path: path.clone(),
                        source,
                    })?
                    .items
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(StorageError::Io {
                    operation: "read",
                    path,
                    source,
                });
            }
        };
        Ok(Self { path, items })
    }

    /// Open the store at `path`, starting empty if it cannot be read.
    pub fn load_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Starting with empty local storage: {}", e.user_message());
                Self {
                    path,
                    items: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.items.insert(key.to_string(), value.into());
        self.flush()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.flush()
        } else {
            Ok(())
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.flush()
    }

    // =========================================================================
    // TYPED ACCESSORS
    // =========================================================================

    /// Stored session token, if any. Empty strings count as absent.
    pub fn token(&self) -> Option<&str> {
        self.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&mut self, token: &str) -> Result<()> {
        self.set_item(TOKEN_KEY, token)
    }

    pub fn clear_token(&mut self) -> Result<()> {
        self.remove_item(TOKEN_KEY)
    }

    /// Stored theme preference. Only the exact string `"true"` means dark.
    pub fn dark_mode(&self) -> bool {
        self.get_item(DARK_MODE_KEY) == Some("true")
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<()> {
        self.set_item(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }

    /// Write the store to disk atomically (temp file + rename).
    fn flush(&self) -> Result<()> {
        let file = StoreFile {
            items: self.items.clone(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|source| StorageError::Serialization { source })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.path.with_extension("toml.tmp");

        let mut out = File::create(&temp_path).map_err(|e| StorageError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        out.write_all(content.as_bytes())
            .map_err(|e| StorageError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        out.sync_all().map_err(|e| StorageError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| StorageError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!("Saved local storage to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = LocalStore::load(dir.path().join("storage.toml")).unwrap();
        assert_eq!(store.token(), None);
        assert!(!store.dark_mode());
    }

    #[test]
    fn test_items_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.toml");

        let mut store = LocalStore::load(&path).unwrap();
        store.set_token("abc123").unwrap();
        store.set_dark_mode(true).unwrap();

        let reloaded = LocalStore::load(&path).unwrap();
        assert_eq!(reloaded.token(), Some("abc123"));
        assert_eq!(reloaded.get_item(DARK_MODE_KEY), Some("true"));
        assert!(reloaded.dark_mode());
    }

    #[test]
    fn test_remove_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.toml");

        let mut store = LocalStore::load(&path).unwrap();
        store.set_token("abc123").unwrap();
        store.clear_token().unwrap();

        assert_eq!(LocalStore::load(&path).unwrap().token(), None);
    }

    #[test]
    fn test_dark_mode_false_string() {
        let dir = tempdir().unwrap();
        let mut store = LocalStore::load(dir.path().join("s.toml")).unwrap();
        store.set_dark_mode(false).unwrap();
        assert_eq!(store.get_item(DARK_MODE_KEY), Some("false"));
        assert!(!store.dark_mode());
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.toml");
        fs::write(&path, "items = [not toml").unwrap();

        assert!(matches!(
            LocalStore::load(&path),
            Err(StorageError::Corrupted { .. })
        ));

        let store = LocalStore::load_or_empty(&path);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.toml");
        let mut store = LocalStore::load(&path).unwrap();
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.clear().unwrap();
        assert_eq!(LocalStore::load(&path).unwrap().get_item("a"), None);
    }
}
