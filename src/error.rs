//! Error types for postfeed
//!
//! Covers fetching, decoding and view wiring failures.

use thiserror::Error;

/// Main error type for postfeed operations
#[derive(Error, Debug)]
pub enum PostFeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Page {page} returned HTTP {status}")]
    Status { page: u32, status: u16 },

    #[error("Failed to decode posts: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("search store is not available")]
    MissingSearchStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for postfeed operations
pub type Result<T> = std::result::Result<T, PostFeedError>;

impl PostFeedError {
    /// Whether this error came from loading a page (as opposed to local wiring)
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            PostFeedError::Request(_) | PostFeedError::Status { .. } | PostFeedError::Decode(_)
        )
    }
}
