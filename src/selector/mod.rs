//! Selector Infrastructure
//!
//! A closed set of element predicates, enough to express the fixed noise and
//! candidate lists without a general CSS selector engine. Queries walk the
//! tree in document order and return references into it, never copies.

use dom_query::Selection;

use crate::dom;

pub mod content;
pub mod discard;

/// A single element predicate.
///
/// Equivalent CSS: `Tag("p")` is `p`, `Class("ads")` is `.ads`,
/// `Id("main")` is `#main`, `Attr("role", "main")` is `[role="main"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Element with this (lowercase) tag name.
    Tag(&'static str),
    /// Element whose class list contains this class.
    Class(&'static str),
    /// Element with exactly this id.
    Id(&'static str),
    /// Element whose attribute has exactly this value.
    Attr(&'static str, &'static str),
}

impl Matcher {
    /// Test a single element.
    #[must_use]
    pub fn matches(&self, sel: &Selection) -> bool {
        match *self {
            Self::Tag(tag) => dom::tag_name(sel).is_some_and(|t| t == tag),
            Self::Class(class) => dom::has_class(sel, class),
            Self::Id(id) => dom::id(sel).is_some_and(|v| v == id),
            Self::Attr(name, value) => dom::get_attribute(sel, name).is_some_and(|v| v == value),
        }
    }
}

/// Query for all descendants of `root` matching the rule
///
/// # Example
///
/// ```rust
/// use leftover_chef::dom;
/// use leftover_chef::selector::{self, Matcher};
///
/// let doc = dom::parse(r#"<div><p class="item">1</p><p class="item">2</p></div>"#);
/// let root = dom::root(&doc);
///
/// let results = selector::query_all(&root, Matcher::Class("item"));
/// assert_eq!(results.len(), 2);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Matcher) -> Vec<Selection<'a>> {
    dom::descendants(root)
        .into_iter()
        .filter(|sel| rule.matches(sel))
        .collect()
}
