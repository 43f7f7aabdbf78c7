//! Persistent client-side preference storage.
//!
//! The browser build keeps preferences in `localStorage`; the desktop build
//! keeps them in a small JSON file under the platform config directory.
//! Every backend is allowed to be unavailable: callers treat a failed write
//! as "not persisted" and move on.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// Key-value store for visitor preferences.
pub trait PreferenceStore {
    /// Reads a value. Missing keys and unreadable storage both yield `None`.
    fn load(&self, key: &str) -> Option<String>;

    /// Writes a value.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared handle to the active store.
pub type SharedStore = Rc<dyn PreferenceStore>;

/// In-memory store. Nothing survives a reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store for platforms without persistent storage; every write fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::unavailable("no persistent storage on this platform"))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::PreferenceStore;
    use crate::error::StorageError;

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage() -> Result<web_sys::Storage, StorageError> {
            web_sys::window()
                .ok_or_else(|| StorageError::unavailable("no window"))?
                .local_storage()
                .map_err(|e| StorageError::unavailable(format!("{e:?}")))?
                .ok_or_else(|| StorageError::unavailable("localStorage disabled"))
        }
    }

    impl PreferenceStore for BrowserStore {
        fn load(&self, key: &str) -> Option<String> {
            Self::storage().ok()?.get_item(key).ok().flatten()
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::unavailable(format!("{e:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::{default_config_dir, FileStore};

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::HashMap;
    use std::fs;
    use std::path::{Path, PathBuf};

    use super::PreferenceStore;
    use crate::error::StorageError;

    const FILE_NAME: &str = "preferences.json";

    /// Directory holding the preference file.
    ///
    /// `FOLIO_CONFIG_DIR` wins; otherwise the platform config directory.
    pub fn default_config_dir() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("FOLIO_CONFIG_DIR") {
            return Some(PathBuf::from(dir));
        }
        dirs::config_dir().map(|dir| dir.join("folio-site"))
    }

    /// JSON object of string values in `<dir>/preferences.json`.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(dir: impl AsRef<Path>) -> Self {
            Self {
                path: dir.as_ref().join(FILE_NAME),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(text) => Ok(serde_json::from_str(&text)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn load(&self, key: &str) -> Option<String> {
            match self.read_all() {
                Ok(mut values) => values.remove(key),
                Err(e) => {
                    tracing::warn!("Could not read {}: {}", self.path.display(), e);
                    None
                }
            }
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            // A corrupt file is replaced rather than blocking the write.
            let mut values = self.read_all().unwrap_or_default();
            values.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
            Ok(())
        }
    }
}

/// Returns the store for the current platform.
pub fn platform_store() -> SharedStore {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match default_config_dir() {
            Some(dir) => Rc::new(FileStore::new(dir)),
            None => {
                tracing::warn!("No config directory; preferences will not persist");
                Rc::new(UnavailableStore)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load("theme"), None);
        store.save("theme", "light").unwrap();
        assert_eq!(store.load("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_unavailable_store_degrades() {
        let store = UnavailableStore;
        assert!(store.save("theme", "dark").is_err());
        assert_eq!(store.load("theme"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_persists_across_instances() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().join("folio-site");

        let store = FileStore::new(&dir);
        assert_eq!(store.load("theme"), None);
        store.save("theme", "light").unwrap();
        store.save("other", "x").unwrap();

        let reopened = FileStore::new(&dir);
        assert_eq!(reopened.load("theme").as_deref(), Some("light"));
        assert_eq!(reopened.load("other").as_deref(), Some("x"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_store_replaces_corrupt_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        std::fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.load("theme"), None);
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").as_deref(), Some("dark"));
    }
}
