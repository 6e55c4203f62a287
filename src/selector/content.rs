//! Main-content candidate selection.
//!
//! Candidates are tried in a fixed priority order. Each matching element is
//! scored by the length of its normalized text and the best one wins. Later
//! selectors must beat the running best strictly, so earlier elements and
//! earlier selectors win ties.

use dom_query::{Document, Selection};
use tracing::debug;

use super::{query_all, Matcher};
use crate::dom;
use crate::patterns::WHITESPACE_NORMALIZE;

/// Candidate selectors in priority order.
///
/// CSS: `article, main, [role="main"], .content, .post-content,
/// .entry-content, #content, #main, .article, .post, .story`
pub const CANDIDATES: [Matcher; 11] = [
    Matcher::Tag("article"),
    Matcher::Tag("main"),
    Matcher::Attr("role", "main"),
    Matcher::Class("content"),
    Matcher::Class("post-content"),
    Matcher::Class("entry-content"),
    Matcher::Id("content"),
    Matcher::Id("main"),
    Matcher::Class("article"),
    Matcher::Class("post"),
    Matcher::Class("story"),
];

/// Visible text with whitespace runs collapsed to one space, trimmed.
#[must_use]
pub fn normalized_text(sel: &Selection) -> String {
    let text = dom::text_content(sel);
    WHITESPACE_NORMALIZE.replace_all(&text, " ").trim().to_string()
}

/// Candidate score: character count of the normalized text.
#[must_use]
pub fn score(sel: &Selection) -> usize {
    normalized_text(sel).chars().count()
}

/// Pick the main content node of a sanitized document.
///
/// Falls back to `body`, then to the document root, when no candidate
/// scores above zero.
#[must_use]
pub fn select_main_node(doc: &Document, early_exit_score: usize) -> Selection<'_> {
    let root = dom::root(doc);

    let mut best: Option<Selection> = None;
    let mut best_score = 0usize;

    for rule in CANDIDATES {
        for candidate in query_all(&root, rule) {
            let s = score(&candidate);
            if s > best_score {
                best_score = s;
                best = Some(candidate);
            }
        }
        if best_score > early_exit_score {
            debug!(?rule, best_score, "candidate selection stopped early");
            break;
        }
    }

    if let Some(node) = best {
        debug!(tag = ?dom::tag_name(&node), best_score, "selected main content node");
        return node;
    }

    if let Some(body) = query_all(&root, Matcher::Tag("body")).into_iter().next() {
        debug!("no scoring candidate, using body");
        return body;
    }

    debug!("no scoring candidate and no body, using document root");
    root
}
