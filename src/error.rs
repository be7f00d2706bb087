//! Crate-level error types.
//!
//! [`MockexError`] covers the failures that can stop the application from
//! starting (configuration, terminal, catalog parsing). User-input problems
//! inside a screen are never surfaced through it; those have their own
//! small enums next to the workflow that produces them.

use crate::models::pair::PairError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MockexError>;

/// Top-level error type returned by all fallible startup APIs.
#[derive(Debug, thiserror::Error)]
pub enum MockexError {
    /// An environment variable or config file held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// Catalog JSON could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A trading pair identifier was malformed.
    #[error("pair error: {0}")]
    Pair(#[from] PairError),
}
