//! Server-side file system entities as seen by the client.

mod item;
mod path;

pub use item::{FileSystemItem, ItemType};
pub use path::BrowsePath;
