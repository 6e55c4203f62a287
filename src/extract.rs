//! Core extraction pipeline.
//!
//! validate url -> fetch -> parse + sanitize -> select -> collect -> shape.
//! The first failing stage ends the call; nothing propagates past
//! [`extract_url`], which always returns an [`ExtractionResult`].

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::extractor::collect_text;
use crate::fetch::{self, FetchBackend};
use crate::html_processing;
use crate::options::Options;
use crate::patterns::MULTIPLE_NEWLINES;
use crate::result::{ExtractedArticle, ExtractionResult};
use crate::selector::content::select_main_node;
use crate::url_utils::is_http_url;

/// Parse a page and collect its title and readable text, unshaped.
#[must_use]
pub fn extract_article(html: &str, options: &Options) -> ExtractedArticle {
    let document = html_processing::parse_document(html);

    // Title is read before sanitation, which may detach `<title>` inside `<svg>`.
    let title = html_processing::extract_title(&document);
    html_processing::doc_cleaning(&document);

    let main = select_main_node(&document, options.early_exit_score);
    let text = collect_text(&main, options.min_block_chars);

    debug!(title_len = title.chars().count(), text_len = text.chars().count(), "collected article");
    ExtractedArticle { title, text }
}

/// Collapse every run of three or more newlines to exactly two.
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    MULTIPLE_NEWLINES.replace_all(text, "\n\n").into_owned()
}

/// First `max_chars` characters of `s`.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

/// Validate and cap a collected article.
///
/// Text shorter than `min_text_chars` after trimming is rejected. Otherwise
/// the text is trimmed, blank-line runs are collapsed and the result is hard
/// cut at `max_text_chars`; the title is trimmed and cut at `max_title_chars`.
pub fn shape(article: ExtractedArticle, options: &Options) -> Result<ExtractedArticle> {
    let text = article.text.trim();
    if text.chars().count() < options.min_text_chars {
        debug!(len = text.chars().count(), "collected text too short");
        return Err(Error::ExtractionTooShort);
    }

    Ok(ExtractedArticle {
        title: truncate_chars(article.title.trim(), options.max_title_chars),
        text: truncate_chars(&collapse_blank_lines(text), options.max_text_chars),
    })
}

/// Run parse, selection, collection and shaping over an HTML string.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractedArticle> {
    shape(extract_article(html, options), options)
}

/// Full extraction of a remote page.
pub(crate) async fn extract_remote(
    fetcher: &dyn FetchBackend,
    raw_url: &str,
    options: &Options,
) -> ExtractionResult {
    let result = AssertUnwindSafe(try_extract_remote(fetcher, raw_url, options))
        .catch_unwind()
        .await
        .unwrap_or_else(|_| {
            warn!(url = raw_url, "extraction panicked");
            Err(Error::Unexpected)
        });
    if let Err(ref err) = result {
        debug!(url = raw_url, %err, "extraction failed");
    }
    ExtractionResult::from(result)
}

async fn try_extract_remote(
    fetcher: &dyn FetchBackend,
    raw_url: &str,
    options: &Options,
) -> Result<ExtractedArticle> {
    if !is_http_url(raw_url) {
        return Err(Error::InvalidInput);
    }

    let page = fetch::fetch_html(fetcher, raw_url, options.fetch_timeout).await?;

    // The parsed tree is not Send; build and drop it on the blocking pool.
    let opts = options.clone();
    tokio::task::spawn_blocking(move || extract_content(&page.html, &opts))
        .await
        .map_err(|e| {
            warn!(url = raw_url, error = %e, "extraction task failed");
            Error::Unexpected
        })?
}
