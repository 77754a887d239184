//! Error types for linkseal core.
//!
//! These errors are differentiated for server-side diagnostics only. The
//! public decode surface in the `linkseal` crate collapses every one of them
//! into a single "invalid token" outcome.

use thiserror::Error;

/// Errors produced while sealing or opening a token.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Wrong segment count, undecodable base64url, bad segment lengths.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Header parsed but declares an algorithm or version we do not implement.
    #[error("unsupported header: {0}")]
    UnsupportedHeader(String),

    /// Tag mismatch, wrong key or corrupted ciphertext.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Plaintext recovered but is not valid raw DEFLATE (or too large).
    #[error("decompression failed: {0}")]
    Decompression(String),

    /// Inflated plaintext is not a valid claim set.
    #[error("claim set parse failed: {0}")]
    ClaimsParse(String),

    #[error("unsupported claim set version: {0}")]
    UnsupportedClaimsVersion(u32),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("compression failed: {0}")]
    Compression(String),

    #[error("encryption failed")]
    Encryption,
}

/// The pipeline stage at which a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureStage {
    /// Structure, base64url or header checks.
    Framing,
    /// AEAD tag verification.
    Authentication,
    /// Inflate or JSON parse of the recovered plaintext.
    Payload,
    /// Producing a token.
    Encoding,
}

impl FailureStage {
    /// Stable label for logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FailureStage::Framing => "framing",
            FailureStage::Authentication => "authentication",
            FailureStage::Payload => "payload",
            FailureStage::Encoding => "encoding",
        }
    }
}

impl CodecError {
    /// Classify this error by pipeline stage.
    pub fn stage(&self) -> FailureStage {
        match self {
            CodecError::MalformedToken(_) | CodecError::UnsupportedHeader(_) => {
                FailureStage::Framing
            }
            CodecError::AuthenticationFailed => FailureStage::Authentication,
            CodecError::Decompression(_)
            | CodecError::ClaimsParse(_)
            | CodecError::UnsupportedClaimsVersion(_) => FailureStage::Payload,
            CodecError::Serialization(_) | CodecError::Compression(_) | CodecError::Encryption => {
                FailureStage::Encoding
            }
        }
    }
}

/// Result type for core codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_classification() {
        assert_eq!(
            CodecError::MalformedToken("x".into()).stage(),
            FailureStage::Framing
        );
        assert_eq!(
            CodecError::UnsupportedHeader("x".into()).stage(),
            FailureStage::Framing
        );
        assert_eq!(
            CodecError::AuthenticationFailed.stage(),
            FailureStage::Authentication
        );
        assert_eq!(
            CodecError::UnsupportedClaimsVersion(2).stage(),
            FailureStage::Payload
        );
        assert_eq!(CodecError::Encryption.stage(), FailureStage::Encoding);
    }
}
