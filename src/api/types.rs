//! JSON payloads exchanged with the file manager server.

use serde::{Deserialize, Serialize};

use crate::fs::FileSystemItem;

/// Body of `/api/login` and `/api/register`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Reply to `/api/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to `GET /api/files`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub success: bool,
    /// `null` when the folder is empty.
    #[serde(default)]
    pub items: Option<Vec<FileSystemItem>>,
}

/// Reply to `POST /api/files/upload`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub uploaded: u64,
}

/// Error replies carry a single `error` field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
