//! Persisted login state.

mod storage;
mod store;

pub use storage::LocalStorage;
pub use store::{Session, SessionStore, TOKEN_KEY, USERNAME_KEY};
