//! # leftover-chef
//!
//! Back end of the leftover ingredient recipe helper.
//!
//! The core is a best-effort readable-text extractor: given a page URL it
//! fetches the HTML, strips noise elements, picks the most plausible main
//! content container and reduces it to clean paragraphs. Around it sit the
//! stateless recipe-suggestion helpers and an `axum` HTTP surface.
//!
//! ## Quick Start
//!
//! ```rust
//! use leftover_chef::extract_html;
//!
//! let html = format!(
//!     "<html><head><title>Hi</title></head><body><article><p>{}</p></article></body></html>",
//!     "x".repeat(60)
//! );
//!
//! let article = extract_html(&html)?;
//! assert_eq!(article.title, "Hi");
//! assert_eq!(article.text, "x".repeat(60));
//! # Ok::<(), leftover_chef::Error>(())
//! ```
//!
//! Remote pages go through [`extract_url`], which never fails: every outcome
//! is an [`ExtractionResult`] whose `ok` field tells success from failure.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Typed element predicates, noise list and candidate selection.
pub mod selector;

/// Parsing, title extraction and sanitation.
pub mod html_processing;

/// Keep-tag text collection.
pub mod extractor;

/// URL validation and query parameter parsing.
pub mod url_utils;

/// Response body decoding.
pub mod encoding;

/// Page fetching.
pub mod fetch;

/// Recipe suggestion helpers.
pub mod suggest;

/// Service configuration.
pub mod config;

/// Logging setup.
pub mod telemetry;

/// HTTP surface.
pub mod service;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{collapse_blank_lines, extract_article, shape, truncate_chars};
pub use fetch::{FetchBackend, FetchError, FetchedDocument, HttpFetcher};
pub use options::Options;
pub use result::{ExtractedArticle, ExtractionResult};

/// Extracts title and readable text from an HTML document using default options.
///
/// Fails with [`Error::ExtractionTooShort`] when less than 50 characters of
/// text can be collected.
pub fn extract_html(html: &str) -> Result<ExtractedArticle> {
    extract_html_with_options(html, &Options::default())
}

/// Extracts title and readable text from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use leftover_chef::{extract_html_with_options, Options};
///
/// let html = format!("<article><p>{}</p></article>", "word ".repeat(40));
/// let options = Options {
///     max_text_chars: 20,
///     ..Options::default()
/// };
/// let article = extract_html_with_options(&html, &options)?;
/// assert_eq!(article.text.chars().count(), 20);
/// # Ok::<(), leftover_chef::Error>(())
/// ```
pub fn extract_html_with_options(html: &str, options: &Options) -> Result<ExtractedArticle> {
    extract::extract_content(html, options)
}

/// Fetches `url` and extracts its readable text.
///
/// Never fails and never panics past this call: invalid URLs, fetch
/// failures, too-short pages and internal errors all come back as
/// `ExtractionResult { ok: false, error: Some(..) }`. Invalid URLs are
/// rejected before any network access.
///
/// Must be called from within a Tokio runtime.
pub async fn extract_url(fetcher: &dyn FetchBackend, url: &str, options: &Options) -> ExtractionResult {
    extract::extract_remote(fetcher, url, options).await
}
