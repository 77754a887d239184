//! base64url text codec.
//!
//! URL-safe alphabet, no padding. Decoding is strict: padding characters and
//! non-canonical trailing bits are rejected, so every distinct segment string
//! maps to distinct bytes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::{CodecError, Result};

/// Encode bytes as unpadded base64url.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment.
pub fn decode(segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| CodecError::MalformedToken(format!("base64url: {e}")))
}

/// Decode a segment that must be exactly `N` bytes long.
pub fn decode_array<const N: usize>(segment: &str, what: &str) -> Result<[u8; N]> {
    let bytes = decode(segment)?;
    bytes.as_slice().try_into().map_err(|_| {
        CodecError::MalformedToken(format!("{what} must be {N} bytes, got {}", bytes.len()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_padding_and_url_alphabet() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet.
        let encoded = encode(&[0xfb, 0xff]);
        assert_eq!(encoded, "-_8");
        assert_eq!(decode(&encoded).unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_rejects_padding() {
        assert!(decode("-_8=").is_err());
    }

    #[test]
    fn test_rejects_standard_alphabet() {
        assert!(decode("+/8").is_err());
    }

    #[test]
    fn test_rejects_non_canonical_trailing_bits() {
        // "-_8" is canonical for [0xfb, 0xff]; "-_9" differs only in the
        // unused low bits of the last character.
        assert!(decode("-_9").is_err());
    }

    #[test]
    fn test_decode_array_length() {
        let twelve = encode(&[7u8; 12]);
        let nonce: [u8; 12] = decode_array(&twelve, "nonce").unwrap();
        assert_eq!(nonce, [7u8; 12]);

        let err = decode_array::<16>(&twelve, "tag").unwrap_err();
        assert!(matches!(err, CodecError::MalformedToken(_)));
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(encode(&[]), "");
        assert!(decode("").unwrap().is_empty());
    }

    proptest::proptest! {
        #[test]
        fn prop_output_is_url_safe(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..256)) {
            let encoded = encode(&bytes);
            proptest::prop_assert!(encoded
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
            proptest::prop_assert_eq!(decode(&encoded).unwrap(), bytes);
        }
    }
}
