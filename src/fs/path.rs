//! The folder currently being browsed.

use std::fmt;

/// Location within a user's storage.
///
/// Folders live one level under the root; a folder name is used as-is as the
/// `path` parameter and never joined with another segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BrowsePath {
    #[default]
    Root,
    Folder(String),
}

impl BrowsePath {
    /// Sentinel the server and the UI use for the top level.
    pub const ROOT_SENTINEL: &'static str = "root";

    pub fn folder(name: impl Into<String>) -> Self {
        BrowsePath::Folder(name.into())
    }

    /// Parse a query value; empty string and `root` both mean the top level.
    pub fn from_param(param: &str) -> Self {
        if param.is_empty() || param == Self::ROOT_SENTINEL {
            BrowsePath::Root
        } else {
            BrowsePath::Folder(param.to_string())
        }
    }

    /// Value of the `path` request parameter (empty for root).
    pub fn as_param(&self) -> &str {
        match self {
            BrowsePath::Root => "",
            BrowsePath::Folder(name) => name,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, BrowsePath::Root)
    }

    pub fn folder_name(&self) -> Option<&str> {
        match self {
            BrowsePath::Root => None,
            BrowsePath::Folder(name) => Some(name),
        }
    }
}

impl fmt::Display for BrowsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowsePath::Root => f.write_str(Self::ROOT_SENTINEL),
            BrowsePath::Folder(name) => f.write_str(name),
        }
    }
}
