//! Error types for the filedeck client.

use thiserror::Error;

/// Main error type for filedeck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    /// HTTP request failed with status code.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network request error.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Local file or state I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server rejected the bearer token (HTTP 401).
    #[error("Not authenticated")]
    Unauthorized,

    /// Server answered with a non-success status and an error message.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid or unexpected response from server.
    #[error("Invalid response from server")]
    InvalidResponse,

    /// A URL could not be built or parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Custom error message.
    #[error("{0}")]
    Custom(String),
}

/// Coarse classification of failures, used to decide how the UI reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught client-side before any network call.
    Validation,
    /// HTTP 401; the UI redirects to the login page.
    Authorization,
    /// The server answered with an error status.
    Application,
    /// Network, decoding or local I/O failure.
    Transport,
}

impl DeckError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::Validation(_) => ErrorKind::Validation,
            DeckError::Unauthorized => ErrorKind::Authorization,
            DeckError::HttpError(401) | DeckError::Api { status: 401, .. } => {
                ErrorKind::Authorization
            }
            DeckError::HttpError(_) | DeckError::Api { .. } => ErrorKind::Application,
            DeckError::RequestError(_)
            | DeckError::JsonError(_)
            | DeckError::Io(_)
            | DeckError::InvalidResponse
            | DeckError::InvalidUrl(_)
            | DeckError::Custom(_) => ErrorKind::Transport,
        }
    }
}

/// Result type alias for filedeck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
