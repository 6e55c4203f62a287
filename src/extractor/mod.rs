//! Readable text collection.
//!
//! # Module Structure
//!
//! - `tags`: The keep-tag catalog
//! - `text`: Block normalization and collection from the main content node
//!
//! # Usage
//!
//! ```rust
//! use leftover_chef::{dom, extractor};
//!
//! let doc = dom::parse("<article><p>A paragraph that is long enough to keep.</p></article>");
//! let text = extractor::collect_text(&doc.select("article"), 30);
//! assert_eq!(text, "A paragraph that is long enough to keep.");
//! ```

pub mod tags;
pub mod text;

pub use text::{collect_text, normalize_block};
