//! HTTP transport for filedeck API requests.

use std::future::Future;
use std::path::Path;

use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{DeckError, Result};
use crate::progress::{ProgressCallback, TransferProgress};

/// HTTP verbs used by the file manager API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A file queued for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name sent in the multipart part.
    pub name: String,
    /// File contents.
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Read a local file into memory, keeping only its base name.
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DeckError::Custom(format!("Invalid file name: {}", path.display())))?
            .to_string();
        let data = tokio::fs::read(path).await?;
        Ok(Self { name, data })
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// One `files` part per entry.
    Multipart(Vec<UploadFile>),
}

/// A request relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path such as `/api/files`.
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Look up a header value (case-insensitive name).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// JSON body, if any.
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// Raw response handed back to callers for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Convenience constructor for a JSON body.
    pub fn json_body(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the server rejected the token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as (lossy) UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Anything that can carry an [`ApiRequest`] to the server.
pub trait Transport: Send + Sync {
    /// Origin every endpoint is resolved against.
    fn base_url(&self) -> &Url;

    /// Perform the request. Non-2xx statuses are returned, not raised.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new HTTP client for the given server origin.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a new HTTP client with a proxy.
    ///
    /// This method is only available on native targets (not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_proxy(base_url: &str, proxy: &str) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| DeckError::Custom(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| DeckError::Custom(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Build a client from configuration, honoring the proxy setting.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        match &config.proxy {
            #[cfg(not(target_arch = "wasm32"))]
            Some(proxy) => Self::with_proxy(&config.base_url, proxy),
            _ => Self::new(&config.base_url),
        }
    }

    /// Stream a download URL into a local file.
    ///
    /// The callback may return `false` to abort the transfer. Returns the number of
    /// bytes written.
    pub async fn download_to_file<P: AsRef<Path>>(
        &self,
        url: &str,
        path: P,
        mut progress: Option<ProgressCallback>,
    ) -> Result<u64> {
        let path = path.as_ref();
        debug!(url = %redact_token(url), "download");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DeckError::HttpError(response.status().as_u16()));
        }

        let total = response.content_length().unwrap_or(0);
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut file = tokio::fs::File::create(path).await?;
        let mut stream = response.bytes_stream();
        let mut done = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            done += chunk.len() as u64;

            if let Some(callback) = progress.as_mut() {
                let report = TransferProgress::new(done, total.max(done), filename.clone());
                if !callback(&report) {
                    return Err(DeckError::Custom("Download cancelled".to_string()));
                }
            }
        }
        file.flush().await?;

        Ok(done)
    }
}

impl Transport for HttpClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self
            .base_url
            .join(&request.endpoint)
            .map_err(|e| DeckError::InvalidUrl(format!("{}: {}", request.endpoint, e)))?;
        debug!(method = ?request.method, endpoint = %request.endpoint, "api request");

        let mut builder = self.client.request(request.method.as_reqwest(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let multipart = matches!(request.body, RequestBody::Multipart(_));
        for (name, value) in &request.headers {
            // reqwest sets the multipart boundary itself
            if multipart && name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Multipart(files) => {
                let form = files.into_iter().fold(Form::new(), |form, file| {
                    form.part("files", Part::bytes(file.data).file_name(file.name))
                });
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "api response");

        Ok(ApiResponse { status, body })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    Url::parse(base_url).map_err(|e| DeckError::InvalidUrl(format!("{}: {}", base_url, e)))
}

/// Mask the `token` query parameter before a URL reaches the logs.
pub(crate) fn redact_token(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) => {
            let pairs: Vec<(String, String)> = parsed
                .query_pairs()
                .map(|(k, v)| {
                    let v = if k == "token" { "***".to_string() } else { v.into_owned() };
                    (k.into_owned(), v)
                })
                .collect();
            if !pairs.is_empty() {
                parsed.query_pairs_mut().clear().extend_pairs(pairs);
            }
            parsed.to_string()
        }
        Err(_) => url.to_string(),
    }
}
