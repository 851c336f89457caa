//! HTTP client for the external chat backend.
//!
//! DESIGN
//! ======
//! Thin forwarding wrapper: bodies go out and come back as raw bytes, and the
//! upstream status code is preserved. The host never interprets the JSON
//! envelope; the widget does.

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;

use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;

use crate::config::UpstreamTimeouts;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The backend could not be reached or the request timed out.
    #[error("chat backend request failed: {0}")]
    Request(String),

    /// The backend answered but the body could not be read.
    #[error("chat backend body unreadable: {0}")]
    Body(String),

    /// The upstream URL for a request could not be built.
    #[error("invalid chat backend URL: {0}")]
    InvalidUrl(String),
}

/// Upstream answer, passed through to the widget unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relayed {
    pub status: u16,
    /// Upstream `Content-Type`, when it sent one.
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct Upstream {
    http: reqwest::Client,
    base_url: String,
}

impl Upstream {
    pub fn new(base_url: &str, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Absolute upstream URL for an API path such as `/get_sessions`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Upstream URL for `path` followed by `segment` as one percent-encoded
    /// path segment, so reserved characters in opaque ids stay inside it.
    pub fn segment_url(&self, path: &str, segment: &str) -> Result<reqwest::Url, UpstreamError> {
        let mut url = reqwest::Url::parse(&self.url(path)).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| UpstreamError::InvalidUrl(format!("{} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    pub async fn get(&self, path: &str) -> Result<Relayed, UpstreamError> {
        let request = self.http.get(self.url(path));
        relay(request).await
    }

    /// GET `path/{segment}` with the segment encoded.
    pub async fn get_segment(&self, path: &str, segment: &str) -> Result<Relayed, UpstreamError> {
        let request = self.http.get(self.segment_url(path, segment)?);
        relay(request).await
    }

    /// POST a JSON body exactly as the widget sent it.
    pub async fn post_json(&self, path: &str, body: Bytes) -> Result<Relayed, UpstreamError> {
        let request = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        relay(request).await
    }
}

async fn relay(request: reqwest::RequestBuilder) -> Result<Relayed, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|e| UpstreamError::Request(e.to_string()))?;
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = response
        .bytes()
        .await
        .map_err(|e| UpstreamError::Body(e.to_string()))?;
    Ok(Relayed { status, content_type, body })
}
