//! Block normalization and collection.

use dom_query::Selection;
use tracing::debug;

use super::tags::is_keep_tag;
use crate::dom;
use crate::patterns::{NEWLINE_BEFORE_WHITESPACE, WHITESPACE_BEFORE_NEWLINE};

/// Separator placed between collected blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Collapse whitespace around newlines, then trim.
///
/// Whitespace immediately before a newline and whitespace right after one are
/// folded into the newline itself. Inner line breaks of `pre`/`code` survive
/// while indentation is dropped. Spaces inside a line are left alone.
///
/// ```rust
/// use leftover_chef::extractor::normalize_block;
///
/// assert_eq!(normalize_block("  line one  \n      line two \n"), "line one\nline two");
/// ```
#[must_use]
pub fn normalize_block(raw: &str) -> String {
    let folded = WHITESPACE_BEFORE_NEWLINE.replace_all(raw, "\n");
    let folded = NEWLINE_BEFORE_WHITESPACE.replace_all(&folded, "\n");
    folded.trim().to_string()
}

/// Collect readable text under `node`.
///
/// Every keep-tag descendant contributes its own block, nested ones
/// included. Blocks shorter than `min_block_chars` are dropped. If nothing
/// survives, the whole node's normalized text is returned instead, whatever
/// its length.
#[must_use]
pub fn collect_text(node: &Selection, min_block_chars: usize) -> String {
    let blocks: Vec<String> = dom::descendants(node)
        .iter()
        .filter(|el| dom::tag_name(el).is_some_and(|tag| is_keep_tag(&tag)))
        .map(|el| normalize_block(&dom::text_content(el)))
        .filter(|block| !block.is_empty() && block.chars().count() >= min_block_chars)
        .collect();

    if blocks.is_empty() {
        debug!("no keep-tag blocks survived, using whole node text");
        return normalize_block(&dom::text_content(node));
    }

    debug!(blocks = blocks.len(), "collected text blocks");
    blocks.join(BLOCK_SEPARATOR)
}
