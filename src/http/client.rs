//! HTTP client for the storefront API
//!
//! Wraps a single `reqwest::Client` configured with the suite's default
//! headers. Transport failures are classified into [`HttpError`] and never
//! retried.

use anyhow::{Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder, Url,
};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::utils::Timer;

/// Transport-level failures
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Request to {0} timed out")]
    Timeout(String),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read response body: {0}")]
    BodyRead(String),
}

/// HTTP client shared by every test in a run
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client bound to `base_url`.
    ///
    /// `timeout_secs` of `None` keeps the transport default.
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).context("Invalid user agent")?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        let base_url = base_url.into();
        Url::parse(&base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for `path` plus query pairs.
    ///
    /// Values go on the wire as given, so `between=price,1,78` keeps its commas.
    pub fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{key}={}", value.replace(' ', "%20")))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }

        url
    }

    /// GET `path` with optional query pairs
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse, HttpError> {
        let url = self.parse_url(path, query)?;
        debug!("GET {}", url);
        self.send(self.client.get(url.clone()), url.as_str()).await
    }

    /// POST a JSON body to `path`
    pub async fn post_json<T>(&self, path: &str, body: &T) -> Result<ApiResponse, HttpError>
    where
        T: Serialize + ?Sized,
    {
        let url = self.parse_url(path, &[])?;
        debug!("POST {}", url);
        self.send(self.client.post(url.clone()).json(body), url.as_str())
            .await
    }

    fn parse_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, HttpError> {
        let raw = self.build_url(path, query);
        Url::parse(&raw).map_err(|e| HttpError::InvalidUrl(format!("{raw} ({e})")))
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<ApiResponse, HttpError> {
        let timer = Timer::start(url);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout(url.to_string())
            } else if e.is_connect() {
                HttpError::ConnectionRefused(url.to_string())
            } else {
                HttpError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout(url.to_string())
            } else {
                HttpError::BodyRead(e.to_string())
            }
        })?;

        let duration_ms = timer.elapsed_ms_f64();

        debug!(
            "Response: {} {} in {:.1}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(ApiResponse {
            status_code: status.as_u16(),
            headers,
            body,
            duration_ms,
        })
    }
}

/// One response, consumed by assertions and then dropped
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub duration_ms: f64,
}

impl ApiResponse {
    /// Parse the body as loosely-typed JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers.get(&name.to_lowercase())
    }

    pub fn body_contains_ignore_case(&self, text: &str) -> bool {
        self.body.to_lowercase().contains(&text.to_lowercase())
    }

    /// First `max_chars` characters of the body, for failure messages
    pub fn body_excerpt(&self, max_chars: usize) -> String {
        let mut excerpt: String = self.body.chars().take(max_chars).collect();
        if self.body.chars().count() > max_chars {
            excerpt.push('…');
        }
        excerpt
    }
}
