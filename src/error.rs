//! Error types for leftover-chef.
//!
//! Every failure of the extraction endpoint is terminal for that call and is
//! reported to callers only through one of the fixed messages below. The
//! underlying cause (HTTP status, transport error, ...) is logged, not returned.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The `url` parameter was missing or not an `http(s)://` URL.
    #[error("Invalid or missing url param")]
    InvalidInput,

    /// Network error, timeout, non-2xx status, or non-HTML content type.
    #[error("Failed to fetch page")]
    FetchFailure,

    /// The collected text was shorter than the minimum after trimming.
    #[error("Could not extract readable text")]
    ExtractionTooShort,

    /// Anything else that went wrong inside a stage.
    #[error("Unexpected error")]
    Unexpected,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
