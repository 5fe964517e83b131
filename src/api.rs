// API client module: a small blocking HTTP client for the file storage
// service. One call, one request: no retries and no request timeout.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

use crate::upload::UploadRequest;

/// Storage service the CLI talks to.
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:5000";

/// Upload route, relative to the base URL.
pub const FILES_PATH: &str = "/files";

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "X-Token";

/// Simple API client that holds a reqwest blocking client, the base URL
/// of the storage service and an optional session token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url`. The blocking client's default
    /// 30s timeout is disabled; the call waits until the peer answers or
    /// the transport fails.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Client for the compiled-in `DEFAULT_BASE_URL`.
    pub fn default_endpoint() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Attach a token, sent verbatim in `X-Token`.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn files_url(&self) -> String {
        format!("{}{}", self.base_url, FILES_PATH)
    }

    /// POST the upload as JSON and decode the response body.
    ///
    /// The body is returned whatever the status code: the service reports
    /// rejections (`{"error": "Unauthorized"}` and the like) as JSON, and
    /// those are the caller's output too. A non-success status is only
    /// logged. Failing to send or to decode JSON is an error.
    pub fn upload_file(&self, req: &UploadRequest) -> Result<Value> {
        let url = self.files_url();
        log::debug!(
            "POST {} name={} parentId={} data={} chars",
            url,
            req.name,
            req.parent_id,
            req.data.len()
        );

        let mut builder = self.client.post(&url).json(req);
        if let Some(t) = &self.token {
            builder = builder.header(TOKEN_HEADER, t);
        }

        let res = builder.send().context("Failed to send upload request")?;
        let status = res.status();
        if !status.is_success() {
            log::warn!("Upload returned {}", status);
        }
        let body: Value = res.json().context("Parsing upload response json")?;
        Ok(body)
    }
}
