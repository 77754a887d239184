//! Error types for key loading.

use thiserror::Error;

/// Errors raised while obtaining the link key.
///
/// Every variant is a deployment problem, never a property of a token.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The configured source has no secret.
    #[error("link key is not configured: {var} is missing or empty")]
    MissingConfiguration { var: String },

    /// The secret is not base64.
    #[error("link key is not valid base64: {0}")]
    InvalidEncoding(String),

    /// The secret decodes to the wrong number of bytes.
    #[error("link key must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The source itself failed.
    #[error("key source failed: {0}")]
    Source(String),
}

/// Result type for key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
