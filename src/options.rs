//! Configuration options for content extraction.
//!
//! The `Options` struct carries every threshold used by the fetch, selection,
//! collection and shaping stages. The defaults reproduce the endpoint's
//! documented behaviour; override fields with struct-update syntax.

use std::time::Duration;

/// Browser-like user agent sent with every page fetch.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept header sent with every page fetch.
pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml";

/// Configuration options for content extraction.
///
/// # Example
///
/// ```rust
/// use leftover_chef::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     fetch_timeout: Duration::from_secs(3),
///     ..Options::default()
/// };
/// assert_eq!(options.max_text_chars, 5000);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Abort the page fetch after this long.
    ///
    /// Default: 10 seconds
    pub fetch_timeout: Duration,

    /// `user-agent` header for the page fetch.
    pub user_agent: String,

    /// `accept` header for the page fetch.
    pub accept: String,

    /// Stop evaluating further candidate selectors once the best score
    /// exceeds this many characters.
    ///
    /// Default: `800`
    pub early_exit_score: usize,

    /// Keep-tag blocks shorter than this (characters, after normalization)
    /// are discarded.
    ///
    /// Default: `30`
    pub min_block_chars: usize,

    /// Collected text shorter than this after trimming is a failure.
    ///
    /// Default: `50`
    pub min_text_chars: usize,

    /// Hard cap on returned text length (characters).
    ///
    /// Default: `5000`
    pub max_text_chars: usize,

    /// Hard cap on returned title length (characters).
    ///
    /// Default: `160`
    pub max_title_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_millis(10_000),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            early_exit_score: 800,
            min_block_chars: 30,
            min_text_chars: 50,
            max_text_chars: 5000,
            max_title_chars: 160,
        }
    }
}
