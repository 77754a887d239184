//! # Linkseal Keys
//!
//! Supplies the single symmetric link key to the codec.
//!
//! The key is a base64-encoded 256-bit secret read from one configuration
//! source (by default the `NEXT_PUBLIC_JWE_KEY` environment variable). It is
//! imported lazily on first use, cached for the lifetime of the
//! [`KeyProvider`], and never handed out as bytes.
//!
//! A missing or undecodable secret is a deployment error and is always
//! returned to the caller as a [`KeyError`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linkseal_keys::KeyProvider;
//!
//! async fn example() {
//!     let provider = KeyProvider::from_env("NEXT_PUBLIC_JWE_KEY");
//!     let key = provider.get_key().await.unwrap();
//!     println!("using key {}", key.fingerprint());
//! }
//! ```

pub mod error;
pub mod provider;
pub mod secret;
pub mod source;

pub use error::{KeyError, Result};
pub use provider::KeyProvider;
pub use secret::{generate_secret, parse_secret};
pub use source::{EnvKeySource, KeySource, StaticKeySource, DEFAULT_KEY_VAR};
