//! Result types for extraction output.
//!
//! `ExtractedArticle` is the raw `(title, text)` pair produced by the
//! parse/select/collect stages. `ExtractionResult` is the shaped object
//! returned to callers and serialized as the endpoint's JSON body.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Title and collected text of a document, before shaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedArticle {
    /// Trimmed text of the first `<title>` element, empty if absent.
    pub title: String,

    /// Readable text gathered from the main content node.
    pub text: String,
}

/// Outcome of one extraction call.
///
/// Serializes to `{"ok":true,"title":..,"text":..}` on success and
/// `{"ok":false,"error":..}` on failure. Exactly one side is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether extraction succeeded. Callers must inspect this field,
    /// the transport status is always a success.
    pub ok: bool,

    /// Page title (may be empty on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Extracted readable text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// One of the fixed failure messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Build a success result.
    #[must_use]
    pub fn success(title: String, text: String) -> Self {
        Self {
            ok: true,
            title: Some(title),
            text: Some(text),
            error: None,
        }
    }

    /// Build a failure result carrying the error's public message.
    #[must_use]
    pub fn failure(err: &Error) -> Self {
        Self {
            ok: false,
            title: None,
            text: None,
            error: Some(err.to_string()),
        }
    }
}

impl From<crate::error::Result<ExtractedArticle>> for ExtractionResult {
    fn from(value: crate::error::Result<ExtractedArticle>) -> Self {
        match value {
            Ok(article) => Self::success(article.title, article.text),
            Err(err) => Self::failure(&err),
        }
    }
}
