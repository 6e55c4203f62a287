//! HTML Processing
//!
//! Parsing and sanitation of fetched pages before any candidate is scored.

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::selector::discard::is_noise;
use crate::selector::{query_all, Matcher};

/// Parse HTML into a document tree.
#[inline]
#[must_use]
pub fn parse_document(html: &str) -> Document {
    dom::parse(html)
}

/// Trimmed text of the first `<title>` element, or an empty string.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    query_all(&dom::root(doc), Matcher::Tag("title"))
        .first()
        .map(|title| dom::text_content(title).trim().to_string())
        .unwrap_or_default()
}

/// Detach every noise element from the tree.
///
/// Matches are collected before anything is removed so that detaching a
/// subtree never disturbs the walk. Returns the number of removed elements.
pub fn doc_cleaning(doc: &Document) -> usize {
    let noise: Vec<_> = dom::descendants(&dom::root(doc))
        .into_iter()
        .filter(is_noise)
        .collect();

    for sel in &noise {
        dom::remove(sel);
    }

    debug!(removed = noise.len(), "removed noise elements");
    noise.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_trims() {
        let doc = parse_document("<html><head><title>  My Page \n</title></head><body></body></html>");
        assert_eq!(extract_title(&doc), "My Page");
    }

    #[test]
    fn test_extract_title_missing() {
        let doc = parse_document("<html><body><p>no title</p></body></html>");
        assert_eq!(extract_title(&doc), "");
    }

    #[test]
    fn test_extract_title_uses_first() {
        let doc = parse_document("<html><head><title>First</title><title>Second</title></head></html>");
        assert_eq!(extract_title(&doc), "First");
    }

    #[test]
    fn test_doc_cleaning_removes_noise() {
        let doc = parse_document(
            r#"<html><head><style>.x{}</style></head><body>
                <header>HEADER_TEXT</header>
                <nav>NAV_TEXT</nav>
                <article><p>ARTICLE_TEXT</p><script>var x = 1;</script></article>
                <div class="advert">ADVERT_TEXT</div>
                <form><input>FORM</form>
                <footer>FOOTER_TEXT</footer>
            </body></html>"#,
        );

        let removed = doc_cleaning(&doc);
        assert!(removed >= 7);

        let text = dom::text_content(&dom::root(&doc)).to_string();
        assert!(text.contains("ARTICLE_TEXT"));
        assert!(!text.contains("HEADER_TEXT"));
        assert!(!text.contains("NAV_TEXT"));
        assert!(!text.contains("ADVERT_TEXT"));
        assert!(!text.contains("FOOTER_TEXT"));
        assert!(!text.contains("var x"));
        assert!(!text.contains(".x{}"));
    }

    #[test]
    fn test_doc_cleaning_handles_nested_noise() {
        let doc = parse_document(
            r#"<body><aside><nav><div class="ads">deep</div></nav></aside><p>kept</p></body>"#,
        );

        doc_cleaning(&doc);

        let text = dom::text_content(&dom::root(&doc)).to_string();
        assert!(!text.contains("deep"));
        assert!(text.contains("kept"));
    }

    #[test]
    fn test_pre_content_is_kept() {
        let doc = parse_document("<body><pre>  fn main() {}\n</pre></body>");
        doc_cleaning(&doc);
        assert!(dom::text_content(&doc.select("pre")).contains("fn main() {}"));
    }
}
