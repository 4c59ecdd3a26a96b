//! Graph API HTTP transport.
//!
//! Wraps exactly one HTTP round trip per call. There are no retries and no
//! timeout override beyond the transport default. Non-2xx responses carry
//! the upstream status and message body verbatim; interpreting them is the
//! caller's problem.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// An upstream call failure.
///
/// `status` is `None` when the request never produced an HTTP response
/// (connect failure, body read failure).
#[derive(Debug, Clone)]
pub struct UpstreamError {
    pub status: Option<u16>,
    pub body: String,
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "upstream returned status {}: {}", status, self.body),
            None => write!(f, "upstream transport error: {}", self.body),
        }
    }
}

impl std::error::Error for UpstreamError {}

/// Capability seam over the Graph API.
///
/// Handlers and services only see this trait; production wires in
/// [`GraphHttpClient`], endpoint tests wire in a scripted double.
#[async_trait]
pub trait GraphTransport: Send + Sync {
    /// GET `url` with `query` appended, returning the parsed JSON body.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamError>;

    /// POST to `url` with `query` carried as query-string parameters.
    async fn post(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamError>;
}

/// reqwest-backed production transport. One shared client per process.
pub struct GraphHttpClient {
    http: Client,
}

impl GraphHttpClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    async fn decode(resp: reqwest::Response) -> Result<Value, UpstreamError> {
        let status = resp.status();
        let body = resp.text().await.map_err(|e| UpstreamError {
            status: Some(status.as_u16()),
            body: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Graph API call failed");
            return Err(UpstreamError {
                status: Some(status.as_u16()),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError {
            status: Some(status.as_u16()),
            body: format!("invalid JSON in response body: {e}"),
        })
    }

    fn transport_error(e: reqwest::Error) -> UpstreamError {
        UpstreamError {
            status: e.status().map(|s| s.as_u16()),
            body: e.to_string(),
        }
    }
}

impl Default for GraphHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphTransport for GraphHttpClient {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::decode(resp).await
    }

    async fn post(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .post(url)
            .query(query)
            .send()
            .await
            .map_err(Self::transport_error)?;
        Self::decode(resp).await
    }
}
