//! KeySource trait: where the base64 secret comes from.
//!
//! Production reads one environment variable. Tests and embedders hand the
//! secret over directly.

use std::env::{self, VarError};
use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::error::{KeyError, Result};

/// Default environment variable holding the link key, the name existing
/// deployments of the link format already set.
pub const DEFAULT_KEY_VAR: &str = "NEXT_PUBLIC_JWE_KEY";

/// A single configuration source for the link key secret.
///
/// `load` is called at most once per successful import; see
/// [`KeyProvider`](crate::KeyProvider).
#[async_trait]
pub trait KeySource: Send + Sync {
    /// Short name for logs. Must not contain the secret.
    fn name(&self) -> &str;

    /// Fetch the base64 secret.
    async fn load(&self) -> Result<Zeroizing<String>>;
}

/// Reads the secret from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvKeySource {
    var: String,
}

impl EnvKeySource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// The variable this source reads.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvKeySource {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_VAR)
    }
}

#[async_trait]
impl KeySource for EnvKeySource {
    fn name(&self) -> &str {
        &self.var
    }

    async fn load(&self) -> Result<Zeroizing<String>> {
        match env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(Zeroizing::new(value)),
            Ok(_) | Err(VarError::NotPresent) => Err(KeyError::MissingConfiguration {
                var: self.var.clone(),
            }),
            Err(VarError::NotUnicode(_)) => Err(KeyError::InvalidEncoding(format!(
                "{} is not valid unicode",
                self.var
            ))),
        }
    }
}

/// A fixed secret supplied in code.
#[derive(Clone)]
pub struct StaticKeySource {
    secret: Zeroizing<String>,
}

impl StaticKeySource {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }
}

impl fmt::Debug for StaticKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticKeySource(..)")
    }
}

#[async_trait]
impl KeySource for StaticKeySource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<Zeroizing<String>> {
        if self.secret.trim().is_empty() {
            return Err(KeyError::MissingConfiguration {
                var: self.name().to_string(),
            });
        }
        Ok(self.secret.clone())
    }
}
