//! A small string key/value store persisted as JSON, playing the role of the
//! browser's `localStorage`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DeckError, Result};

/// Key/value store written through to disk on every mutation.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    path: Option<PathBuf>,
    items: BTreeMap<String, String>,
}

impl LocalStorage {
    /// Open (or lazily create) a storage file. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let items = if path.exists() {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| DeckError::Custom(format!("Read error: {}", e)))?;
            serde_json::from_str(&json)
                .map_err(|e| DeckError::Custom(format!("Parse error: {}", e)))?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            items,
        })
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.items)
            .map_err(|e| DeckError::Custom(format!("Serialization error: {}", e)))?;
        std::fs::write(path, json).map_err(|e| DeckError::Custom(format!("Write error: {}", e)))?;
        debug!(path = %path.display(), keys = self.items.len(), "storage flushed");
        Ok(())
    }
}
