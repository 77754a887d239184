//! # Linkseal Core
//!
//! Pure primitives for encrypted, shareable links: the claim set schema and
//! the compact token that carries it.
//!
//! This crate does no I/O and knows nothing about where keys come from. Given
//! a [`LinkKey`], it turns a [`ClaimSet`] into a URL-safe token and back.
//!
//! ## Key Types
//!
//! - [`ClaimSet`] - The protected payload: role, client, request data
//! - [`LinkKey`] - The imported AES-256-GCM key
//! - [`CompactToken`] - A parsed `header..nonce.ciphertext.tag` token
//! - [`CodecError`] - Why a token could not be produced or opened
//!
//! ## Pipeline
//!
//! Sealing is JSON, then raw DEFLATE ([`compress`]), then AES-256-GCM
//! ([`crypto`]), then base64url framing ([`token`]). Opening reverses it.
//!
//! ```rust
//! use linkseal_core::{ClaimSet, Compression, LinkKey, Role};
//! use linkseal_core::token::{open_claims, seal_claims};
//! use linkseal_core::compress::DEFAULT_MAX_INFLATED_LEN;
//!
//! let key = LinkKey::generate();
//! let claims = ClaimSet::builder(Role::Requester, "client-1")
//!     .project("project-9")
//!     .build();
//!
//! let token = seal_claims(&key, &claims, Compression::best(), DEFAULT_MAX_INFLATED_LEN).unwrap();
//! let opened = open_claims(&key, &token, DEFAULT_MAX_INFLATED_LEN).unwrap();
//! assert_eq!(opened, claims);
//! ```

pub mod claims;
pub mod compress;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod header;
pub mod short;
pub mod token;

pub use claims::{ClaimMap, ClaimSet, ClaimSetBuilder, Role, CLAIMS_VERSION};
pub use compress::Compression;
pub use crypto::{KeyFingerprint, LinkKey, Nonce, Sealed, Tag, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use error::{CodecError, FailureStage, Result};
pub use header::{TokenHeader, FORMAT_VERSION};
pub use short::{ShortClaimSet, ShortRole};
pub use token::{open_claims, seal_claims, CompactToken};
