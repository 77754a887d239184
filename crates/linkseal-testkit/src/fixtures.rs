//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use linkseal::{LinkCodec, LinkConfig, TokenCodec};
use linkseal_core::{ClaimSet, LinkKey, Role, KEY_LEN};
use linkseal_keys::{generate_secret, KeyProvider, StaticKeySource};

/// The fixed key behind every golden vector: bytes `0x00..=0x1f`.
pub const GOLDEN_KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

/// [`GOLDEN_KEY_HEX`] as the base64 secret an operator would configure.
pub const GOLDEN_SECRET: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

/// A provider, token codec and link codec sharing one key.
pub struct TestFixture {
    pub provider: Arc<KeyProvider>,
    pub codec: TokenCodec,
    pub links: LinkCodec,
}

impl TestFixture {
    /// Fixture over a fresh random key.
    pub fn new() -> Self {
        Self::with_secret(&generate_secret())
    }

    /// Fixture over the golden-vector key.
    pub fn golden() -> Self {
        Self::with_secret(GOLDEN_SECRET)
    }

    /// Fixture over a given base64 secret.
    pub fn with_secret(secret: &str) -> Self {
        Self::with_config(secret, LinkConfig::default())
    }

    /// Fixture with non-default configuration.
    pub fn with_config(secret: &str, config: LinkConfig) -> Self {
        let provider = Arc::new(KeyProvider::new(StaticKeySource::new(secret)));
        let codec = TokenCodec::new(Arc::clone(&provider), config);
        let links = LinkCodec::new(codec.clone());
        Self {
            provider,
            codec,
            links,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The golden key imported directly, for the synchronous core API.
pub fn golden_key() -> LinkKey {
    let mut bytes = [0u8; KEY_LEN];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    LinkKey::from_bytes(bytes)
}

/// The pre-fill claim set used throughout the docs.
pub fn prefill_claims() -> ClaimSet {
    let request = serde_json::json!({"ci": "20251120", "co": "20251122"});
    ClaimSet::builder(Role::Requester, "uuid-client")
        .project("uuid-project")
        .request(request.as_object().cloned().unwrap_or_default())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_key_matches_secret() {
        let from_secret = linkseal_keys::parse_secret(GOLDEN_SECRET).unwrap();
        assert_eq!(golden_key().fingerprint(), from_secret.fingerprint());
        assert_eq!(hex::decode(GOLDEN_KEY_HEX).unwrap(), (0u8..32).collect::<Vec<_>>());
    }
}
