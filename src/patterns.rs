//! Compiled regex patterns for text normalization and URL validation.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace, collapsed to one space when scoring candidates.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches whitespace immediately followed by a newline.
pub static WHITESPACE_BEFORE_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+\n").expect("WHITESPACE_BEFORE_NEWLINE regex")
});

/// Matches a newline followed by whitespace (indentation).
pub static NEWLINE_BEFORE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\s+").expect("NEWLINE_BEFORE_WHITESPACE regex")
});

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

// =============================================================================
// URL Patterns
// =============================================================================

/// Accepted target URL prefix.
pub static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://").expect("HTTP_URL regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_normalize_collapses_spaces() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello \n\t  world", " ");
        assert_eq!(result, "hello world");
    }

    #[test]
    fn whitespace_before_newline_swallows_blank_lines() {
        let result = WHITESPACE_BEFORE_NEWLINE.replace_all("a  \n\n\nb", "\n");
        assert_eq!(result, "a\nb");
    }

    #[test]
    fn newline_before_whitespace_strips_indentation() {
        let result = NEWLINE_BEFORE_WHITESPACE.replace_all("a\n    b", "\n");
        assert_eq!(result, "a\nb");
    }

    #[test]
    fn multiple_newlines_requires_three() {
        assert!(!MULTIPLE_NEWLINES.is_match("a\n\nb"));
        assert!(MULTIPLE_NEWLINES.is_match("a\n\n\nb"));
    }

    #[test]
    fn http_url_is_case_insensitive() {
        assert!(HTTP_URL.is_match("https://example.com"));
        assert!(HTTP_URL.is_match("HTTP://EXAMPLE.COM"));
        assert!(!HTTP_URL.is_match("ftp://example.com"));
        assert!(!HTTP_URL.is_match(" https://example.com"));
    }
}
