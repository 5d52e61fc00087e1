//! Synchronous key-value persistence for user preferences, plus the theme
//! flag stored in it.
//!
//! The interface mirrors browser `localStorage`: string keys, string values,
//! no transactions. The browser backend lives in the app crate; this module
//! provides an in-memory store and a TOML file store for native builds.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::types::Theme;

/// Storage key holding the theme flag.
pub const THEME_KEY: &str = "theme";

/// File name used by [`FileStore::in_dir`].
pub const SETTINGS_FILE: &str = "settings.toml";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Theme preference
// ---------------------------------------------------------------------------

/// Read the persisted theme. A missing key means first run and yields dark;
/// an unreadable store or garbled value also yields dark, with a warning.
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    let raw = match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No saved theme, defaulting to dark");
            return Theme::default();
        }
        Err(e) => {
            warn!(error = %e, "Could not read saved theme");
            return Theme::default();
        }
    };

    match serde_json::from_str::<bool>(&raw) {
        Ok(dark) => Theme::from_dark_flag(dark),
        Err(e) => {
            warn!(value = raw.as_str(), error = %e, "Ignoring unrecognized saved theme");
            Theme::default()
        }
    }
}

/// Persist `theme` as a JSON boolean (`true` = dark).
pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<(), StoreError> {
    let flag = if theme.is_dark() { "true" } else { "false" };
    store.set(THEME_KEY, flag)
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Store backed by a shared map. Clones see each other's writes, which makes
/// a clone a stand-in for "the same storage after a reload".
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File store
// ---------------------------------------------------------------------------

/// Store backed by a flat TOML table on disk. Every `set` rewrites the whole
/// file via write-to-temp + rename.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.toml` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, StoreError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(content.parse::<toml::Table>()?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let table = self.read_table()?;
        Ok(table.get(key).and_then(|v| v.as_str()).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = self.read_table()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, toml::to_string(&table)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
