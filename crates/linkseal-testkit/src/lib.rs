//! # Linkseal Testkit
//!
//! Testing utilities for linkseal.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Tokens from an independent implementation, with expected outcomes
//! - **Generators**: Proptest strategies for claim sets
//! - **Fixtures**: A provider, token codec and link codec sharing one key
//!
//! ## Golden Vectors
//!
//! ```rust
//! use linkseal_core::compress::DEFAULT_MAX_INFLATED_LEN;
//! use linkseal_core::open_claims;
//! use linkseal_testkit::fixtures::golden_key;
//! use linkseal_testkit::vectors::all_vectors;
//!
//! let key = golden_key();
//! for vector in all_vectors() {
//!     let opened = open_claims(&key, vector.token, DEFAULT_MAX_INFLATED_LEN);
//!     assert_eq!(opened.is_ok(), vector.is_positive(), "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use linkseal_testkit::generators::{claims_from_params, ClaimParams};
//!
//! proptest! {
//!     #[test]
//!     fn json_roundtrip(params: ClaimParams) {
//!         let claims = claims_from_params(&params);
//!         let json = claims.to_json().unwrap();
//!         prop_assert_eq!(linkseal_core::ClaimSet::from_json(&json).unwrap(), claims);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{golden_key, prefill_claims, TestFixture, GOLDEN_SECRET};
pub use generators::{claims_from_params, ClaimParams};
pub use vectors::{all_vectors, negative_vectors, positive_vectors, GoldenVector};
