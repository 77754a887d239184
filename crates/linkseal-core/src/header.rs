//! The protected-header segment of a compact token.
//!
//! Exactly one cipher suite exists, so the header is a fixed object. It is
//! still parsed and checked on every decode so that tokens from a future
//! format are refused instead of being decrypted under the wrong assumptions.

use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::error::{CodecError, Result};

/// Key management mode: the content key is the shared key itself.
pub const ALG_DIRECT: &str = "dir";

/// AES-256-GCM content encryption.
pub const ENC_A256GCM: &str = "A256GCM";

/// Raw DEFLATE compression of the plaintext.
pub const ZIP_DEFLATE: &str = "DEF";

/// Token format version. Independent of the claim set version.
pub const FORMAT_VERSION: u32 = 1;

/// Header object. Field order matches what issuers emit byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub enc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    pub v: u32,
}

impl TokenHeader {
    /// The only header this build produces or accepts.
    pub fn current() -> Self {
        Self {
            alg: ALG_DIRECT.to_string(),
            enc: ENC_A256GCM.to_string(),
            zip: Some(ZIP_DEFLATE.to_string()),
            v: FORMAT_VERSION,
        }
    }

    /// Encode as a base64url segment.
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self).map_err(|e| CodecError::Serialization(e.to_string()))?;
        Ok(encoding::encode(&json))
    }

    /// Decode a base64url segment. Does not check support.
    pub fn decode(segment: &str) -> Result<Self> {
        let json = encoding::decode(segment)?;
        serde_json::from_slice(&json)
            .map_err(|e| CodecError::MalformedToken(format!("header: {e}")))
    }

    /// Refuse anything other than the single supported suite.
    pub fn check_supported(&self) -> Result<()> {
        if self.alg != ALG_DIRECT {
            return Err(CodecError::UnsupportedHeader(format!("alg {}", self.alg)));
        }
        if self.enc != ENC_A256GCM {
            return Err(CodecError::UnsupportedHeader(format!("enc {}", self.enc)));
        }
        match self.zip.as_deref() {
            Some(ZIP_DEFLATE) => {}
            Some(other) => return Err(CodecError::UnsupportedHeader(format!("zip {other}"))),
            None => return Err(CodecError::UnsupportedHeader("zip missing".to_string())),
        }
        if self.v != FORMAT_VERSION {
            return Err(CodecError::UnsupportedHeader(format!("v {}", self.v)));
        }
        Ok(())
    }
}
