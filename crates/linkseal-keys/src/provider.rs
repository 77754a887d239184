//! The memoized key provider.
//!
//! The key is imported on first use and then held for the life of the
//! provider. Concurrent first callers wait on one import. A failed import is
//! not remembered, so the next call tries again.

use std::fmt;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info};

use linkseal_core::LinkKey;

use crate::error::Result;
use crate::secret::parse_secret;
use crate::source::{EnvKeySource, KeySource};

/// Lazily imports and caches the single link key.
pub struct KeyProvider {
    source: Box<dyn KeySource>,
    key: OnceCell<Arc<LinkKey>>,
}

impl KeyProvider {
    /// Create a provider over any key source.
    pub fn new(source: impl KeySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            key: OnceCell::new(),
        }
    }

    /// Create a provider reading the named environment variable.
    pub fn from_env(var: impl Into<String>) -> Self {
        Self::new(EnvKeySource::new(var))
    }

    /// Get the link key, importing it on first call.
    ///
    /// Errors here are configuration errors and should stop the caller.
    pub async fn get_key(&self) -> Result<Arc<LinkKey>> {
        let key = self.key.get_or_try_init(|| self.import()).await?;
        Ok(Arc::clone(key))
    }

    async fn import(&self) -> Result<Arc<LinkKey>> {
        let source = self.source.name();
        let imported = match self.source.load().await {
            Ok(secret) => parse_secret(&secret),
            Err(e) => Err(e),
        };

        match imported {
            Ok(key) => {
                info!(source, fingerprint = %key.fingerprint(), "link key imported");
                Ok(Arc::new(key))
            }
            Err(e) => {
                error!(source, error = %e, "link key import failed");
                Err(e)
            }
        }
    }

    /// Whether a key has been imported.
    pub fn is_loaded(&self) -> bool {
        self.key.initialized()
    }

    /// Drop the cached key. The next `get_key` imports again.
    pub fn reset(&mut self) {
        self.key.take();
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }
}

impl Default for KeyProvider {
    fn default() -> Self {
        Self::new(EnvKeySource::default())
    }
}

impl fmt::Debug for KeyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyProvider")
            .field("source", &self.source.name())
            .field("key", &self.key.get())
            .finish()
    }
}
