//! # Backend transport
//!
//! [`Backend`] is the seam between the gateway and the network: three async
//! methods that each perform exactly one HTTP request and return the decoded
//! JSON body or a [`TransportError`]. [`HttpBackend`] implements it with
//! `reqwest`, which compiles to `fetch` on wasm and to hyper natively.
//!
//! Error bodies from the backend look like `{"detail": "..."}`; the detail is
//! lifted into [`TransportError::Status`] so logs show the server's reason
//! instead of raw JSON.

use std::future::Future;

use serde_json::Value;

use crate::config::BackendConfig;
use crate::error::TransportError;

/// A document picked by the user for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    /// MIME type reported by the browser, if any.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// One request, one response.
pub trait Backend {
    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value, TransportError>>;

    fn post_json(
        &self,
        path: &str,
        body: Value,
    ) -> impl Future<Output = Result<Value, TransportError>>;

    /// Multipart upload with the document in form field `field`.
    fn post_file(
        &self,
        path: &str,
        field: &str,
        upload: Upload,
    ) -> impl Future<Output = Result<Value, TransportError>>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: build_client(config),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &BackendConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("eagletask/", env!("CARGO_PKG_VERSION")))
        .timeout(config.request_timeout())
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default HTTP client");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &BackendConfig) -> reqwest::Client {
    reqwest::Client::new()
}

impl Backend for HttpBackend {
    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        read_json(resp).await
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        let resp = self
            .http
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        read_json(resp).await
    }

    async fn post_file(
        &self,
        path: &str,
        field: &str,
        upload: Upload,
    ) -> Result<Value, TransportError> {
        use reqwest::multipart::{Form, Part};

        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| TransportError::Request(e.to_string()))?;
        }
        let form = Form::new().part(field.to_string(), part);

        let resp = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;
        read_json(resp).await
    }
}

/// Turn a response into JSON, mapping non-success statuses to
/// [`TransportError::Status`].
pub(crate) async fn read_json(resp: reqwest::Response) -> Result<Value, TransportError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(TransportError::Status {
            status: status.as_u16(),
            message: error_detail(&body),
        });
    }
    resp.json::<Value>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}

/// `detail` of a FastAPI-style error body, or the trimmed body itself.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.trim().to_string())
}
