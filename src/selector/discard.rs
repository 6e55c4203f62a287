//! Noise elements removed before any candidate is scored.

use super::Matcher;

/// Elements detached from the tree right after parsing.
///
/// CSS: `script, style, noscript, svg, canvas, form, nav, footer, header,
/// aside, iframe, ads, .ads, .advert, .promo`
pub const NOISE: [Matcher; 15] = [
    Matcher::Tag("script"),
    Matcher::Tag("style"),
    Matcher::Tag("noscript"),
    Matcher::Tag("svg"),
    Matcher::Tag("canvas"),
    Matcher::Tag("form"),
    Matcher::Tag("nav"),
    Matcher::Tag("footer"),
    Matcher::Tag("header"),
    Matcher::Tag("aside"),
    Matcher::Tag("iframe"),
    Matcher::Tag("ads"),
    Matcher::Class("ads"),
    Matcher::Class("advert"),
    Matcher::Class("promo"),
];

/// Whether an element is noise.
#[must_use]
pub fn is_noise(sel: &dom_query::Selection) -> bool {
    NOISE.iter().any(|rule| rule.matches(sel))
}
