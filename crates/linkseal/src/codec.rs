//! The async token codec.
//!
//! Binds the keyed core primitives to a [`KeyProvider`]. Decoding is total:
//! every token problem becomes `Ok(None)`, and the reason is only logged.

use std::sync::Arc;

use linkseal_core::{open_claims, seal_claims, ClaimSet};
use linkseal_keys::KeyProvider;
use tracing::debug;

use crate::config::LinkConfig;
use crate::error::Result;

/// Encodes claim sets to compact tokens and back.
///
/// Cheap to clone; clones share the key provider.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    provider: Arc<KeyProvider>,
    config: LinkConfig,
}

impl TokenCodec {
    /// Create a codec over an existing provider.
    pub fn new(provider: Arc<KeyProvider>, config: LinkConfig) -> Self {
        Self { provider, config }
    }

    /// Create a codec whose key comes from `config.key_var`.
    pub fn from_config(config: LinkConfig) -> Self {
        let provider = Arc::new(KeyProvider::from_env(config.key_var.clone()));
        Self::new(provider, config)
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn provider(&self) -> &Arc<KeyProvider> {
        &self.provider
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Encode a claim set as a compact token.
    ///
    /// Every call uses a fresh nonce, so encoding the same claims twice
    /// yields different tokens.
    pub async fn encode(&self, claims: &ClaimSet) -> Result<String> {
        let key = self.provider.get_key().await?;
        let token = seal_claims(
            &key,
            claims,
            self.config.compression,
            self.config.max_plaintext_len,
        )?;
        Ok(token)
    }

    /// Decode a compact token.
    ///
    /// Returns `Ok(None)` for any malformed, tampered, foreign or
    /// unsupported token. Returns `Err` only when the key itself cannot be
    /// loaded.
    pub async fn decode(&self, token: &str) -> Result<Option<ClaimSet>> {
        let key = self.provider.get_key().await?;

        match open_claims(&key, token, self.config.max_plaintext_len) {
            Ok(claims) => Ok(Some(claims)),
            Err(e) => {
                debug!(stage = e.stage().as_str(), error = %e, "token rejected");
                Ok(None)
            }
        }
    }
}
