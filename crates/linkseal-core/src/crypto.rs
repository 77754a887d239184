//! AES-256-GCM sealing.
//!
//! Every seal draws a fresh 96-bit nonce from the operating system RNG and
//! produces a detached 128-bit tag. Opening is all-or-nothing: on any tag
//! mismatch no plaintext bytes leave this module.

use std::fmt;

use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce as GcmNonce, Tag as GcmTag};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::{CodecError, Result};

/// Key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

const FINGERPRINT_CONTEXT: &str = "linkseal 2025-01 key fingerprint";

/// Short, non-reversible identifier of a key, safe to log.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyFingerprint([u8; 8]);

impl KeyFingerprint {
    fn of(key: &[u8; KEY_LEN]) -> Self {
        let derived = blake3::derive_key(FINGERPRINT_CONTEXT, key);
        let mut short = [0u8; 8];
        short.copy_from_slice(&derived[..8]);
        Self(short)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for KeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyFingerprint({})", self.to_hex())
    }
}

impl fmt::Display for KeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The symmetric link key.
///
/// Usable only through [`LinkKey::seal`] and [`LinkKey::open`]; the raw key
/// bytes are wiped at construction and never exposed again.
#[derive(Clone)]
pub struct LinkKey {
    cipher: Aes256Gcm,
    fingerprint: KeyFingerprint,
}

impl LinkKey {
    /// Import raw key bytes. Callers own wiping any copy they keep.
    pub fn from_bytes(mut bytes: [u8; KEY_LEN]) -> Self {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&bytes));
        let fingerprint = KeyFingerprint::of(&bytes);
        bytes.zeroize();
        Self {
            cipher,
            fingerprint,
        }
    }

    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self::from_bytes(bytes)
    }

    /// Loggable identifier of this key.
    pub fn fingerprint(&self) -> KeyFingerprint {
        self.fingerprint
    }

    /// Encrypt under a freshly generated nonce.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Sealed> {
        self.seal_with_nonce(Nonce::generate(), plaintext)
    }

    pub(crate) fn seal_with_nonce(&self, nonce: Nonce, plaintext: &[u8]) -> Result<Sealed> {
        let mut buffer = plaintext.to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(GcmNonce::from_slice(&nonce.0), b"", &mut buffer)
            .map_err(|_| CodecError::Encryption)?;

        let mut tag_bytes = [0u8; TAG_LEN];
        tag_bytes.copy_from_slice(&tag);

        Ok(Sealed {
            nonce,
            ciphertext: buffer,
            tag: Tag(tag_bytes),
        })
    }

    /// Verify and decrypt.
    pub fn open(&self, sealed: &Sealed) -> Result<Vec<u8>> {
        let mut buffer = sealed.ciphertext.clone();
        let verified = self.cipher.decrypt_in_place_detached(
            GcmNonce::from_slice(&sealed.nonce.0),
            b"",
            &mut buffer,
            GcmTag::from_slice(&sealed.tag.0),
        );

        if verified.is_err() {
            buffer.zeroize();
            return Err(CodecError::AuthenticationFailed);
        }
        Ok(buffer)
    }
}

impl fmt::Debug for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkKey({})", self.fingerprint)
    }
}

/// A 96-bit AES-GCM nonce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce(pub [u8; NONCE_LEN]);

impl Nonce {
    /// Generate a new random nonce from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

/// A 128-bit GCM authentication tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag(pub [u8; TAG_LEN]);

impl Tag {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }
}

/// Output of one seal: nonce, ciphertext and detached tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    pub nonce: Nonce,
    pub ciphertext: Vec<u8>,
    pub tag: Tag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_open() {
        let key = LinkKey::generate();
        let sealed = key.seal(b"hello, link!").unwrap();

        assert_eq!(sealed.ciphertext.len(), b"hello, link!".len());
        assert_ne!(sealed.ciphertext, b"hello, link!");
        assert_eq!(key.open(&sealed).unwrap(), b"hello, link!");
    }

    #[test]
    fn test_fresh_nonce_per_seal() {
        let key = LinkKey::generate();
        let a = key.seal(b"same").unwrap();
        let b = key.seal(b"same").unwrap();

        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[test]
    fn test_wrong_key_fails() {
        let key1 = LinkKey::generate();
        let key2 = LinkKey::generate();
        let sealed = key1.seal(b"secret").unwrap();

        assert!(matches!(
            key2.open(&sealed),
            Err(CodecError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_every_bit_flip_fails() {
        let key = LinkKey::generate();
        let sealed = key.seal(b"tamper me").unwrap();

        for i in 0..NONCE_LEN {
            let mut t = sealed.clone();
            t.nonce.0[i] ^= 0x01;
            assert!(key.open(&t).is_err(), "nonce byte {i}");
        }
        for i in 0..sealed.ciphertext.len() {
            let mut t = sealed.clone();
            t.ciphertext[i] ^= 0x80;
            assert!(key.open(&t).is_err(), "ciphertext byte {i}");
        }
        for i in 0..TAG_LEN {
            let mut t = sealed.clone();
            t.tag.0[i] ^= 0x10;
            assert!(key.open(&t).is_err(), "tag byte {i}");
        }
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let key = LinkKey::generate();
        let mut sealed = key.seal(b"truncate").unwrap();
        sealed.ciphertext.pop();

        assert!(key.open(&sealed).is_err());
    }

    #[test]
    fn test_fixed_nonce_is_deterministic() {
        let key = LinkKey::from_bytes([0x42; KEY_LEN]);
        let nonce = Nonce::from_bytes([0x01; NONCE_LEN]);

        let a = key.seal_with_nonce(nonce, b"payload").unwrap();
        let b = key.seal_with_nonce(nonce, b"payload").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_is_stable_and_distinct() {
        let a1 = LinkKey::from_bytes([0x11; KEY_LEN]);
        let a2 = LinkKey::from_bytes([0x11; KEY_LEN]);
        let b = LinkKey::from_bytes([0x22; KEY_LEN]);

        assert_eq!(a1.fingerprint(), a2.fingerprint());
        assert_ne!(a1.fingerprint(), b.fingerprint());
        assert_eq!(a1.fingerprint().to_hex().len(), 16);
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let key = LinkKey::from_bytes([0xab; KEY_LEN]);
        let debug = format!("{:?}", key);

        assert!(debug.starts_with("LinkKey("));
        assert!(!debug.contains(&"ab".repeat(8)));
    }
}
