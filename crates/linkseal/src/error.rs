//! Error types for the link API.

use linkseal_core::CodecError;
use linkseal_keys::KeyError;
use thiserror::Error;

/// Errors surfaced by the link API.
///
/// Decoding never produces [`LinkError::Encode`]: an invalid token is
/// `Ok(None)`. Only key configuration problems escape a decode call.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The link key could not be loaded.
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// A claim set could not be turned into a token.
    #[error("encode error: {0}")]
    Encode(#[from] CodecError),
}

/// Result type for link operations.
pub type Result<T> = std::result::Result<T, LinkError>;
