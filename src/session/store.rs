//! Session store: the auth token and username that gate the dashboard.

use std::path::Path;

use crate::error::Result;
use crate::session::storage::LocalStorage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the signed-in user.
pub const USERNAME_KEY: &str = "username";

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }
}

/// Reads and writes the [`Session`] in [`LocalStorage`].
///
/// There is no expiry or refresh handling: a stored token is trusted until the
/// user logs out.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    storage: LocalStorage,
}

impl SessionStore {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Open the store backed by a state file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(LocalStorage::open(path)?))
    }

    /// The current session; `None` unless both token and username are present.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let username = self
            .storage
            .get_item(USERNAME_KEY)
            .filter(|u| !u.is_empty())?;
        Some(Session::new(token, username))
    }

    pub fn persist(&mut self, session: &Session) -> Result<()> {
        self.storage.set_item(TOKEN_KEY, &session.token)?;
        self.storage.set_item(USERNAME_KEY, &session.username)
    }

    /// Forget the session (logout).
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove_item(TOKEN_KEY)?;
        self.storage.remove_item(USERNAME_KEY)
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }
}
