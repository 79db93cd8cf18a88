//! Client configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DeckError, Result};

/// Default server address (the file manager server listens on 8080).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default location of the persisted session state.
pub const DEFAULT_STATE_FILE: &str = "filedeck-state.json";

/// Connection and persistence settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Server origin, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// File holding `authToken` / `username` between runs.
    pub state_file: PathBuf,
    /// Optional HTTP proxy (native targets only).
    pub proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            proxy: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a JSON file. Missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DeckError::Custom(format!(
                "Read error for {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Defaults overridden by `FILEDECK_BASE_URL`, `FILEDECK_STATE_FILE` and
    /// `FILEDECK_PROXY`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("FILEDECK_BASE_URL").filter(|v| !v.is_empty()) {
            self.base_url = url;
        }
        if let Some(file) = lookup("FILEDECK_STATE_FILE").filter(|v| !v.is_empty()) {
            self.state_file = PathBuf::from(file);
        }
        if let Some(proxy) = lookup("FILEDECK_PROXY").filter(|v| !v.is_empty()) {
            self.proxy = Some(proxy);
        }
        self
    }
}
