//! # Linkseal
//!
//! Self-contained, tamper-evident, confidential links.
//!
//! ## Overview
//!
//! Linkseal packs a [`ClaimSet`] (who may act, on whose behalf, with what
//! pre-filled request data) into a compact token that fits in a URL
//! fragment. Whoever holds the link can recover the claim set without a
//! server round trip, provided they hold the same key.
//!
//! - **Token**: `header..nonce.ciphertext.tag`, AES-256-GCM over raw-DEFLATE JSON
//! - **Fragment**: a prefix (default `TR?jwe=`) followed by the token
//! - **Key**: one base64 256-bit secret from the environment, imported once
//!
//! ## Failure model
//!
//! Decoding never says why a token is bad. Malformed, tampered, foreign and
//! unsupported tokens all decode to `Ok(None)`. The only error a decode can
//! return is a missing or broken key configuration.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linkseal::{ClaimSet, LinkCodec, LinkConfig, Role};
//!
//! async fn example() {
//!     let links = LinkCodec::from_config(LinkConfig::default());
//!
//!     let claims = ClaimSet::builder(Role::Requester, "client-1")
//!         .project("project-9")
//!         .build();
//!
//!     let url = links
//!         .share_url("https://app.example/", &claims)
//!         .await
//!         .unwrap();
//!
//!     let decoded = links.parse_fragment(&url).await.unwrap();
//!     assert_eq!(decoded, Some(claims));
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `linkseal::core` - Claim sets, token framing, AEAD primitives
//! - `linkseal::keys` - Key sources and the memoized provider

pub mod codec;
pub mod config;
pub mod error;
pub mod link;

pub use linkseal_core as core;
pub use linkseal_keys as keys;

pub use codec::TokenCodec;
pub use config::{LinkConfig, DEFAULT_PREFIX};
pub use error::{LinkError, Result};
pub use link::LinkCodec;

pub use linkseal_core::{ClaimMap, ClaimSet, ClaimSetBuilder, Compression, Role};
pub use linkseal_keys::{KeyProvider, KeySource, StaticKeySource};
