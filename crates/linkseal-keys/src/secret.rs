//! Parsing and generating the base64 key secret.
//!
//! The secret is 32 random bytes in base64. Both the standard and the
//! URL-safe alphabet are accepted, with or without padding, since operators
//! paste whatever their tooling printed.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, Zeroizing};

use linkseal_core::{LinkKey, KEY_LEN};

use crate::error::{KeyError, Result};

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a base64 secret and import it as a [`LinkKey`].
///
/// Intermediate copies of the key bytes are wiped before returning.
pub fn parse_secret(secret: &str) -> Result<LinkKey> {
    let normalized: Zeroizing<String> = Zeroizing::new(
        secret
            .trim()
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                other => other,
            })
            .collect(),
    );

    let decoded = Zeroizing::new(
        LENIENT
            .decode(normalized.as_bytes())
            .map_err(|e| KeyError::InvalidEncoding(e.to_string()))?,
    );

    if decoded.len() != KEY_LEN {
        return Err(KeyError::InvalidLength {
            expected: KEY_LEN,
            actual: decoded.len(),
        });
    }

    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&decoded);
    let key = LinkKey::from_bytes(bytes);
    bytes.zeroize();
    Ok(key)
}

/// Generate a fresh 256-bit secret in standard base64, for provisioning.
pub fn generate_secret() -> Zeroizing<String> {
    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    OsRng.fill_bytes(&mut bytes[..]);
    Zeroizing::new(STANDARD.encode(&bytes[..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTING: &str = "AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8=";

    #[test]
    fn test_standard_padded() {
        let key = parse_secret(COUNTING).unwrap();
        let unpadded = parse_secret(COUNTING.trim_end_matches('=')).unwrap();
        assert_eq!(key.fingerprint(), unpadded.fingerprint());
    }

    #[test]
    fn test_url_safe_alphabet() {
        let standard = parse_secret("+/v7+/v7+/v7+/v7+/v7+/v7+/v7+/v7+/v7+/v7+/s=").unwrap();
        let url_safe = parse_secret("-_v7-_v7-_v7-_v7-_v7-_v7-_v7-_v7-_v7-_v7-_s").unwrap();
        assert_eq!(standard.fingerprint(), url_safe.fingerprint());
    }

    #[test]
    fn test_surrounding_whitespace() {
        let key = parse_secret(&format!("  {COUNTING}\n")).unwrap();
        assert_eq!(key.fingerprint(), parse_secret(COUNTING).unwrap().fingerprint());
    }

    #[test]
    fn test_wrong_length() {
        let err = parse_secret("AQEBAQEBAQEBAQEBAQEBAQ==").unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidLength {
                expected: 32,
                actual: 16
            }
        ));
    }

    #[test]
    fn test_not_base64() {
        assert!(matches!(
            parse_secret("not a key!"),
            Err(KeyError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_generated_secret_parses() {
        let a = generate_secret();
        let b = generate_secret();

        assert_eq!(a.len(), 44);
        assert_ne!(*a, *b);
        parse_secret(&a).unwrap();
    }
}
