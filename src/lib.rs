//! # filedeck
//!
//! Client side of a multi-user cloud file manager: a REST gateway, a persisted
//! session, and the view-models behind the login, register and dashboard pages.
//!
//! ## Features
//!
//! - **Session**: token and username persisted in a small key/value store
//!   (`authToken`, `username`) that survives restarts.
//! - **API gateway**: every call carries `Authorization: Bearer <token>` and a JSON
//!   content type (multipart uploads excepted); non-2xx responses come back as data.
//! - **Forms**: client-side validation for login and registration, with the same
//!   messages the server uses, before a single request is made.
//! - **Dashboard**: single-level folder browsing, search, multi-select, rename,
//!   folder creation, upload, download and confirmed delete, with toasts for every
//!   outcome and a redirect to login on 401.
//! - **Context menu** bound to one item at a time.
//!
//! UI effects (confirm dialogs, prompts, page changes, new tabs) go through the
//! [`UiHost`] trait so any front end, or a test, can drive the controllers.
//!
//! ## Example
//!
//! ```no_run
//! use filedeck::{ClientConfig, Dashboard, HttpClient, SessionStore, UiHost, Page};
//! use std::time::Duration;
//!
//! struct Headless;
//!
//! impl UiHost for Headless {
//!     fn confirm(&mut self, _message: &str) -> bool { true }
//!     fn prompt(&mut self, _message: &str, _default: Option<&str>) -> Option<String> { None }
//!     fn navigate(&mut self, page: Page, _delay: Duration) { println!("-> {:?}", page); }
//!     fn open_tab(&mut self, url: &str) { println!("open {}", url); }
//! }
//!
//! # async fn example() -> filedeck::Result<()> {
//! let config = ClientConfig::from_env();
//! let store = SessionStore::open(&config.state_file)?;
//! let transport = HttpClient::from_config(&config)?;
//!
//! let mut dashboard = Dashboard::open(transport, store, Headless)?;
//! dashboard.load_files().await?;
//! for entry in dashboard.grid().entries() {
//!     println!("{} {}", entry.name, entry.meta);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod browser;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod fs;
pub mod http;
pub mod notify;
pub mod progress;
pub mod session;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use api::ApiClient;
pub use browser::{BrowserState, ContextMenu, Grid, GridEntry, MenuChoice};
pub use config::ClientConfig;
pub use dashboard::Dashboard;
pub use error::{DeckError, ErrorKind, Result};
pub use forms::{LoginForm, RegisterForm};
pub use fs::{BrowsePath, FileSystemItem, ItemType};
pub use http::{HttpClient, Transport, UploadFile};
pub use notify::{Notifier, Toast, ToastVariant};
pub use progress::{ProgressCallback, TransferProgress};
pub use session::{LocalStorage, Session, SessionStore};
pub use ui::{Page, UiHost};
