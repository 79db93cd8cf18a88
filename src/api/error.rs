//! Interpretation of non-success API responses.

use crate::api::types::ErrorBody;
use crate::error::{DeckError, Result};
use crate::http::ApiResponse;

/// The server-provided `error` message, if the body carries one.
pub fn error_message(response: &ApiResponse) -> Option<String> {
    response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.error)
        .filter(|msg| !msg.is_empty())
}

/// Convert a response into an error according to its status.
///
/// 401 becomes [`DeckError::Unauthorized`]; an `error` field becomes
/// [`DeckError::Api`]; anything else is a bare [`DeckError::HttpError`].
pub fn response_error(response: &ApiResponse) -> DeckError {
    if response.is_unauthorized() {
        return DeckError::Unauthorized;
    }
    match error_message(response) {
        Some(message) => DeckError::Api {
            status: response.status,
            message,
        },
        None => DeckError::HttpError(response.status),
    }
}

/// Pass 2xx responses through, turn everything else into an error.
pub fn check_status(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(response_error(&response))
    }
}
