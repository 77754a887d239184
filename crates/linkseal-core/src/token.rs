//! Compact token framing and the keyed seal/open pipeline.
//!
//! Wire format, five base64url segments separated by `.`:
//!
//! ```text
//! header . <empty key segment> . nonce . ciphertext . tag
//! ```
//!
//! Encoding: JSON → raw DEFLATE → AES-256-GCM → framing.
//! Decoding runs the same chain backwards and reports which stage failed.

use crate::claims::ClaimSet;
use crate::compress::{self, Compression};
use crate::crypto::{LinkKey, Nonce, Sealed, Tag, NONCE_LEN, TAG_LEN};
use crate::encoding;
use crate::error::{CodecError, Result};
use crate::header::TokenHeader;

/// Number of `.`-separated segments in a compact token.
pub const SEGMENT_COUNT: usize = 5;

/// A structurally valid token whose header we support. Not yet authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactToken {
    pub header: TokenHeader,
    pub sealed: Sealed,
}

impl CompactToken {
    /// Split and decode a compact token, checking the header before any
    /// decryption is attempted.
    pub fn parse(token: &str) -> Result<Self> {
        let segments: Vec<&str> = token.split('.').collect();
        let [header, encrypted_key, nonce, ciphertext, tag] = segments.as_slice() else {
            return Err(CodecError::MalformedToken(format!(
                "expected {SEGMENT_COUNT} segments, got {}",
                segments.len()
            )));
        };

        let header = TokenHeader::decode(header)?;
        header.check_supported()?;

        if !encrypted_key.is_empty() {
            return Err(CodecError::MalformedToken(
                "direct mode carries no encrypted key".to_string(),
            ));
        }

        let nonce = Nonce::from_bytes(encoding::decode_array::<NONCE_LEN>(nonce, "nonce")?);
        let ciphertext = encoding::decode(ciphertext)?;
        let tag = Tag::from_bytes(encoding::decode_array::<TAG_LEN>(tag, "tag")?);

        Ok(Self {
            header,
            sealed: Sealed {
                nonce,
                ciphertext,
                tag,
            },
        })
    }

    /// Wrap a sealed payload under the current header.
    pub fn new(sealed: Sealed) -> Self {
        Self {
            header: TokenHeader::current(),
            sealed,
        }
    }

    /// Format as the compact string.
    pub fn to_compact(&self) -> Result<String> {
        Ok(format!(
            "{}..{}.{}.{}",
            self.header.encode()?,
            encoding::encode(self.sealed.nonce.as_bytes()),
            encoding::encode(&self.sealed.ciphertext),
            encoding::encode(self.sealed.tag.as_bytes()),
        ))
    }
}

/// Serialize, compress, seal and frame a claim set.
///
/// Claim sets whose JSON is longer than `max_plaintext_len`, the ceiling
/// decoders apply, are refused.
pub fn seal_claims(
    key: &LinkKey,
    claims: &ClaimSet,
    level: Compression,
    max_plaintext_len: usize,
) -> Result<String> {
    let json = claims.to_json()?;
    if json.len() > max_plaintext_len {
        return Err(CodecError::Serialization(format!(
            "claim set is {} bytes, limit is {max_plaintext_len}",
            json.len()
        )));
    }
    let compressed = compress::compress(&json, level)?;
    let sealed = key.seal(&compressed)?;
    CompactToken::new(sealed).to_compact()
}

/// Parse, authenticate, inflate and deserialize a token.
///
/// `max_inflated_len` bounds the decompressed plaintext.
pub fn open_claims(key: &LinkKey, token: &str, max_inflated_len: usize) -> Result<ClaimSet> {
    let parsed = CompactToken::parse(token)?;
    let compressed = key.open(&parsed.sealed)?;
    let json = compress::decompress(&compressed, max_inflated_len)?;
    ClaimSet::from_json(&json)
}
