//! Listing entries returned by `GET /api/files`.

use serde::{Deserialize, Serialize};

/// Entry kind as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    File,
    Folder,
}

/// One entry of a folder listing. Read-only to the client and redrawn per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystemItem {
    /// Server-assigned identifier
    pub id: String,
    /// Name within its folder
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Human-readable size, files only (e.g. "1.2 KB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Modification date (e.g. "2024-05-01")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl FileSystemItem {
    pub fn file(id: impl Into<String>, name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type: ItemType::File,
            size: Some(size.into()),
            modified: None,
        }
    }

    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type: ItemType::Folder,
            size: None,
            modified: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.item_type == ItemType::File
    }

    pub fn is_folder(&self) -> bool {
        self.item_type == ItemType::Folder
    }

    /// Secondary line under the name: the size if known, else the modified date.
    pub fn meta(&self) -> &str {
        self.size
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.modified.as_deref())
            .unwrap_or("")
    }
}
