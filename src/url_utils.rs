//! URL Utility Functions
//!
//! Validation of caller-supplied target URLs and lenient extraction of the
//! `url` query parameter.

use crate::patterns::HTTP_URL;

/// Name of the query parameter carrying the target URL.
pub const URL_PARAM: &str = "url";

/// Whether `s` is acceptable as an extraction target.
///
/// Only the `http://` / `https://` prefix is checked (case-insensitive).
/// Anything further is left to the fetcher, which reports unusable URLs as
/// fetch failures.
///
/// ```rust
/// use leftover_chef::url_utils::is_http_url;
///
/// assert!(is_http_url("HTTPS://example.com/a"));
/// assert!(!is_http_url("ftp://example.com"));
/// assert!(!is_http_url(""));
/// ```
#[must_use]
pub fn is_http_url(s: &str) -> bool {
    !s.is_empty() && HTTP_URL.is_match(s)
}

/// Value of the first `url` parameter in a raw query string.
///
/// Percent- and plus-decoding follow `application/x-www-form-urlencoded`.
/// A missing query or parameter yields an empty string.
#[must_use]
pub fn url_param(raw_query: Option<&str>) -> String {
    let Some(query) = raw_query else {
        return String::new();
    };

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == URL_PARAM)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
