//! Configuration for the link codec.

use linkseal_core::compress::DEFAULT_MAX_INFLATED_LEN;
use linkseal_core::Compression;
use linkseal_keys::DEFAULT_KEY_VAR;

/// Prefix placed after `#` in share links.
pub const DEFAULT_PREFIX: &str = "TR?jwe=";

/// Configuration for [`TokenCodec`](crate::TokenCodec) and
/// [`LinkCodec`](crate::LinkCodec).
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Environment variable holding the base64 link key.
    pub key_var: String,
    /// Marker that precedes the token inside a URL fragment.
    pub prefix: String,
    /// DEFLATE level used when encoding.
    pub compression: Compression,
    /// Largest inflated plaintext accepted when decoding.
    pub max_plaintext_len: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            key_var: DEFAULT_KEY_VAR.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            compression: Compression::best(),
            max_plaintext_len: DEFAULT_MAX_INFLATED_LEN,
        }
    }
}

impl LinkConfig {
    pub fn with_key_var(mut self, var: impl Into<String>) -> Self {
        self.key_var = var.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_compression(mut self, level: Compression) -> Self {
        self.compression = level;
        self
    }

    pub fn with_max_plaintext_len(mut self, len: usize) -> Self {
        self.max_plaintext_len = len;
        self
    }
}
