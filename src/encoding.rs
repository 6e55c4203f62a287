//! Character decoding of fetched pages.
//!
//! Response bodies arrive as bytes. The charset is taken from the response's
//! `content-type` header when present, then from the document's own `<meta>`
//! declarations, and defaults to UTF-8. Invalid sequences become U+FFFD.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `charset=` parameter of a `content-type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Bytes of the document head examined for `<meta>` declarations.
const META_SNIFF_BYTES: usize = 1024;

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Charset label from a `content-type` header value, if any.
#[must_use]
pub fn header_charset(content_type: &str) -> Option<String> {
    capture(&HEADER_CHARSET_RE, content_type)
}

/// Charset label declared by `<meta charset>` or `<meta http-equiv>` in the
/// first kilobyte of the document.
#[must_use]
pub fn meta_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SNIFF_BYTES)]);
    capture(&CHARSET_META_RE, &head)
}

/// Resolve the encoding of a response body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| meta_charset(body).and_then(|label| Encoding::for_label(label.as_bytes())))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// ```
/// use leftover_chef::encoding::decode_body;
///
/// let html = b"<html><body>Caf\xE9</body></html>";
/// let text = decode_body(html, Some("text/html; charset=ISO-8859-1"));
/// assert!(text.contains("Café"));
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}
