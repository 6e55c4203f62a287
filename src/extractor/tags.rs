//! Tag catalogs for text collection.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Tags whose text becomes a standalone block: p, li, blockquote, pre, code, h1-h3
pub static KEEP_TAGS: [&str; 8] = ["p", "li", "blockquote", "pre", "code", "h1", "h2", "h3"];

/// `KEEP_TAGS` as a `HashSet`
pub static KEEP_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    KEEP_TAGS.into_iter().collect()
});

/// Whether a (lowercase) tag name is a keep tag.
#[inline]
#[must_use]
pub fn is_keep_tag(tag: &str) -> bool {
    KEEP_TAG_SET.contains(tag)
}
