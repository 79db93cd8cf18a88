//! File manager REST API: gateway client, payloads and error interpretation.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, RequestOptions, endpoints};
pub use error::{check_status, error_message, response_error};
