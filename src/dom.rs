//! DOM Operations Adapter
//!
//! Small set of DOM operations over the `dom_query` crate. Everything the
//! extraction stages touch goes through here, so the rest of the crate never
//! reaches into `dom_query` node internals directly.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// StrTendril is reference-counted, so cloning text is O(1)
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Script, style and `pre` contents are kept as raw text nodes; comments do
/// not contribute to any text returned by [`text_content`].
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Selection wrapping the document node itself.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    get_attribute(sel, "id")
}

/// Check whether the whitespace-separated `class` attribute contains `class`.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|value| value.split_whitespace().any(|c| c == class))
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// All element descendants of the first node in `sel`, in document order.
///
/// The node itself is not included.
#[must_use]
pub fn descendants<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let Some(node) = sel.nodes().first() else {
        return Vec::new();
    };

    node.descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .map(Selection::from)
        .collect()
}

// === Tree Manipulation ===

/// Detach elements (and their subtrees) from the tree
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
