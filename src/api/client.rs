//! API gateway: attaches the bearer token and JSON content type to requests.

use serde_json::{Value, json};
use tracing::debug;

use crate::api::types::Credentials;
use crate::error::{DeckError, Result};
use crate::fs::BrowsePath;
use crate::http::{ApiRequest, ApiResponse, HttpClient, Method, RequestBody, Transport, UploadFile};

/// Endpoint paths of the file manager server.
pub mod endpoints {
    pub const LOGIN: &str = "/api/login";
    pub const REGISTER: &str = "/api/register";
    pub const LOGOUT: &str = "/api/logout";
    pub const FILES: &str = "/api/files";
    pub const CREATE_FOLDER: &str = "/api/files/folder";
    pub const RENAME: &str = "/api/files/rename";
    pub const UPLOAD: &str = "/api/files/upload";
    pub const DOWNLOAD: &str = "/api/files/download";
}

const JSON_CONTENT_TYPE: &str = "application/json";

/// Per-request options merged with the gateway defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    /// Override the defaults on a name clash (case-insensitive).
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post(body: Value) -> Self {
        Self::new(Method::Post).json(body)
    }

    pub fn delete(body: Value) -> Self {
        Self::new(Method::Delete).json(body)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// Client for the file manager REST API.
///
/// Every method returns the raw [`ApiResponse`]; interpreting status codes and
/// bodies is left to the caller. Nothing is retried and no timeout is applied.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = HttpClient> {
    transport: T,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    /// Create an unauthenticated client.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    /// Create a client that sends `token` as its bearer credential.
    pub fn with_token(transport: T, token: impl Into<String>) -> Self {
        Self {
            transport,
            token: Some(token.into()),
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Authenticated request: `Authorization: Bearer <token>` and
    /// `Content-Type: application/json` are added unless `options` overrides them.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse> {
        let token = self.token.as_deref().ok_or(DeckError::Unauthorized)?;
        let defaults = [
            ("Authorization".to_string(), format!("Bearer {}", token)),
            ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
        ];
        self.send(endpoint, options, &defaults).await
    }

    /// Request without credentials (login and registration).
    pub async fn public_request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let defaults = [("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
        self.send(endpoint, options, &defaults).await
    }

    async fn send(
        &self,
        endpoint: &str,
        options: RequestOptions,
        defaults: &[(String, String)],
    ) -> Result<ApiResponse> {
        let request = ApiRequest {
            method: options.method,
            endpoint: endpoint.to_string(),
            query: options.query,
            headers: merge_headers(defaults, options.headers),
            body: options.body,
        };
        self.transport.send(request).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<ApiResponse> {
        let body = serde_json::to_value(Credentials { username, password })?;
        self.public_request(endpoints::LOGIN, RequestOptions::post(body))
            .await
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<ApiResponse> {
        let body = serde_json::to_value(Credentials { username, password })?;
        self.public_request(endpoints::REGISTER, RequestOptions::post(body))
            .await
    }

    pub async fn logout(&self) -> Result<ApiResponse> {
        self.request(endpoints::LOGOUT, RequestOptions::new(Method::Post))
            .await
    }

    /// `GET /api/files?path=` for the given folder.
    pub async fn list_files(&self, path: &BrowsePath) -> Result<ApiResponse> {
        self.request(
            endpoints::FILES,
            RequestOptions::get().query("path", path.as_param()),
        )
        .await
    }

    pub async fn create_folder(&self, path: &BrowsePath, folder_name: &str) -> Result<ApiResponse> {
        self.request(
            endpoints::CREATE_FOLDER,
            RequestOptions::post(json!({
                "path": path.as_param(),
                "folderName": folder_name,
            })),
        )
        .await
    }

    pub async fn rename(
        &self,
        path: &BrowsePath,
        old_name: &str,
        new_name: &str,
    ) -> Result<ApiResponse> {
        self.request(
            endpoints::RENAME,
            RequestOptions::post(json!({
                "path": path.as_param(),
                "oldName": old_name,
                "newName": new_name,
            })),
        )
        .await
    }

    pub async fn delete(&self, path: &BrowsePath, names: &[String]) -> Result<ApiResponse> {
        self.request(
            endpoints::FILES,
            RequestOptions::delete(json!({
                "path": path.as_param(),
                "names": names,
            })),
        )
        .await
    }

    /// Multipart upload. Only the Authorization header is set; the JSON content
    /// type must not be applied here.
    pub async fn upload(&self, path: &BrowsePath, files: Vec<UploadFile>) -> Result<ApiResponse> {
        let token = self.token.as_deref().ok_or(DeckError::Unauthorized)?;
        debug!(files = files.len(), path = %path, "upload");
        let request = ApiRequest {
            method: Method::Post,
            endpoint: endpoints::UPLOAD.to_string(),
            query: vec![("path".to_string(), path.as_param().to_string())],
            headers: vec![("Authorization".to_string(), format!("Bearer {}", token))],
            body: RequestBody::Multipart(files),
        };
        self.transport.send(request).await
    }

    /// Absolute download URL for one item.
    ///
    /// The server only accepts the token as a query parameter here, so the
    /// returned URL carries the credential. Do not log it.
    pub fn download_url(&self, path: &BrowsePath, name: &str) -> Result<String> {
        let token = self.token.as_deref().ok_or(DeckError::Unauthorized)?;
        let mut url = self
            .transport
            .base_url()
            .join(endpoints::DOWNLOAD)
            .map_err(|e| DeckError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("path", path.as_param())
            .append_pair("name", name)
            .append_pair("token", token);
        Ok(url.into())
    }
}

fn merge_headers(
    defaults: &[(String, String)],
    overrides: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = defaults
        .iter()
        .filter(|(name, _)| !overrides.iter().any(|(o, _)| o.eq_ignore_ascii_case(name)))
        .cloned()
        .collect();
    headers.extend(overrides);
    headers
}
