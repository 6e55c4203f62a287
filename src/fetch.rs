//! Page fetching.
//!
//! One GET per call, no retries. Anything other than a 2xx HTML response is a
//! failure; the reason is kept in [`FetchError`] for logging and collapses to
//! [`Error::FetchFailure`] for callers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use tracing::{debug, warn};

use crate::encoding::decode_body;
use crate::error::Error;
use crate::options::Options;

/// Content types accepted as HTML.
pub const HTML_CONTENT_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Why a fetch failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("could not build HTTP client: {0}")]
    Client(String),

    /// DNS, connection, TLS or body read failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// The request did not finish within the timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-2xx response.
    #[error("server returned status {0}")]
    Status(u16),

    /// Response was not declared as HTML.
    #[error("unsupported content type: {0:?}")]
    ContentType(Option<String>),
}

impl From<FetchError> for Error {
    fn from(_: FetchError) -> Self {
        Error::FetchFailure
    }
}

/// A fetched HTML page. Lives only for the duration of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    /// Body decoded to UTF-8.
    pub html: String,
    /// The response's declared content type.
    pub content_type: String,
}

/// Source of HTML pages.
#[async_trait]
pub trait FetchBackend: Send + Sync {
    /// Fetch `url` (already validated as `http(s)://`), giving up after `timeout`.
    async fn fetch_html(&self, url: &str, timeout: Duration) -> Result<FetchedDocument, FetchError>;
}

/// Whether a `content-type` value denotes HTML or XHTML.
#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    let lower = content_type.to_ascii_lowercase();
    HTML_CONTENT_TYPES.iter().any(|t| lower.contains(t))
}

/// [`FetchBackend`] over `reqwest`.
///
/// The client is cheap to clone and safe to share between concurrent
/// extractions.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher sending the user agent and accept headers from `options`.
    pub fn new(options: &Options) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&options.accept).map_err(|e| FetchError::Client(e.to_string()))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&options.user_agent).map_err(|e| FetchError::Client(e.to_string()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FetchBackend for HttpFetcher {
    async fn fetch_html(&self, url: &str, timeout: Duration) -> Result<FetchedDocument, FetchError> {
        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                FetchError::Timeout(timeout)
            } else {
                FetchError::Transport(e.to_string())
            }
        };

        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let content_type = match content_type {
            Some(ct) if is_html_content_type(&ct) => ct,
            other => return Err(FetchError::ContentType(other)),
        };

        let body = resp.bytes().await.map_err(classify)?;
        debug!(url, bytes = body.len(), %content_type, "fetched page");

        Ok(FetchedDocument {
            html: decode_body(&body, Some(&content_type)),
            content_type,
        })
    }
}

/// Fetch a page, logging the cause on failure.
pub async fn fetch_html(
    backend: &dyn FetchBackend,
    url: &str,
    timeout: Duration,
) -> Result<FetchedDocument, Error> {
    backend.fetch_html(url, timeout).await.map_err(|e| {
        warn!(url, error = %e, "page fetch failed");
        Error::from(e)
    })
}
