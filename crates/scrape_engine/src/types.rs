use std::time::Duration;

/// Transport-level fetch failure. HTTP error statuses are deliberately not
/// represented here: a 404 still carries a body worth scanning, so only
/// problems that prevent a response body from arriving count as failures.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("network error: {0}")]
    Network(String),
}

/// A completed fetch: the decoded response body plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub body: String,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub status: u16,
    pub byte_len: u64,
}
