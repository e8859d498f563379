//! The digest type, the type-tag alphabet, and the primitive hashers.
//!
//! Every hashed value is reduced as `SHA-256(tag || canonical bytes)`
//! where `tag` is a single ASCII byte naming the hashed type. The
//! primitive hashers are public so sibling canonical forms (JSON,
//! in-memory structures) can produce interoperable digests.

use std::fmt;

use sha2::{Digest as _, Sha256};

use crate::error::Result;
use crate::normalize::normalize_float;

/// Digest length in bytes (SHA-256 output).
pub const DIGEST_LEN: usize = 32;

/// The single-byte type tags, sorted alphabetically by value.
pub mod tag {
    /// Boolean values.
    pub const BOOL: u8 = b'b';
    /// Unordered mappings; also the default record identifier.
    pub const MAP: u8 = b'd';
    /// Floating-point values.
    pub const FLOAT: u8 = b'f';
    /// Integers; signed and unsigned share a tag.
    pub const INT: u8 = b'i';
    /// Ordered sequences.
    pub const LIST: u8 = b'l';
    /// The nil value.
    pub const NIL: u8 = b'n';
    /// Raw byte strings.
    pub const BYTES: u8 = b't';
    /// Unicode text.
    pub const UNICODE: u8 = b'u';
}

/// A 32-byte object-hash digest.
///
/// Compared and ordered as raw bytes; the ordering is what sorts map and
/// record entries during reduction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex.
    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}...)", &self.to_hex()[..8])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Reduce a tagged payload: `SHA-256(tag || payload)`.
pub fn hash_tagged(tag: u8, payload: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([tag]);
    hasher.update(payload);
    Digest(hasher.finalize().into())
}

/// Hash a boolean: the ASCII byte `0` or `1` under the bool tag.
pub fn hash_bool(b: bool) -> Digest {
    hash_tagged(tag::BOOL, if b { b"1" } else { b"0" })
}

/// Hash a signed integer: minimal decimal form under the integer tag.
pub fn hash_int(i: i64) -> Digest {
    hash_tagged(tag::INT, i.to_string().as_bytes())
}

/// Hash an unsigned integer. Shares the signed tag, so numerically-equal
/// signed and unsigned values hash identically.
pub fn hash_uint(u: u64) -> Digest {
    hash_tagged(tag::INT, u.to_string().as_bytes())
}

/// Hash a float. Finite values go through normalization; NaN and the
/// infinities hash as the literals `NaN`, `Infinity`, and `-Infinity`.
pub fn hash_float(f: f64) -> Result<Digest> {
    let normalized = if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        normalize_float(f)?
    };
    Ok(hash_tagged(tag::FLOAT, normalized.as_bytes()))
}

/// Hash text: its raw UTF-8 bytes under the unicode tag. No Unicode
/// normalization is performed; callers needing NFC/NFD equivalence must
/// normalize upstream.
pub fn hash_unicode(s: &str) -> Digest {
    hash_tagged(tag::UNICODE, s.as_bytes())
}

/// Hash a byte string: the raw bytes under the bytes tag.
pub fn hash_bytes(b: &[u8]) -> Digest {
    hash_tagged(tag::BYTES, b)
}

/// Hash the nil value: an empty payload under the nil tag.
pub fn hash_nil() -> Digest {
    hash_tagged(tag::NIL, b"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digests_are_tag_sensitive() {
        // Same payload, different tag, different digest.
        assert_ne!(hash_tagged(tag::UNICODE, b"abc"), hash_tagged(tag::BYTES, b"abc"));
        assert_ne!(hash_nil(), hash_tagged(tag::UNICODE, b""));
    }

    #[test]
    fn test_signed_and_unsigned_agree() {
        assert_eq!(hash_int(42), hash_uint(42));
        assert_eq!(hash_int(0), hash_uint(0));
        assert_ne!(hash_int(-1), hash_uint(1));
    }

    #[test]
    fn test_integer_form_is_minimal_decimal() {
        // No leading zeroes, no plus sign: i64 formatting guarantees it,
        // and the tagged payloads must reflect that.
        assert_eq!(hash_int(7), hash_tagged(tag::INT, b"7"));
        assert_eq!(hash_int(-7), hash_tagged(tag::INT, b"-7"));
        assert_eq!(hash_uint(u64::MAX), hash_tagged(tag::INT, b"18446744073709551615"));
    }

    #[test]
    fn test_float_specials() {
        let nan = hash_float(f64::NAN).unwrap();
        assert_eq!(nan, hash_tagged(tag::FLOAT, b"NaN"));
        assert_eq!(hash_float(f64::INFINITY).unwrap(), hash_tagged(tag::FLOAT, b"Infinity"));
        assert_eq!(
            hash_float(f64::NEG_INFINITY).unwrap(),
            hash_tagged(tag::FLOAT, b"-Infinity")
        );
        // Signed zero identity.
        assert_eq!(hash_float(0.0).unwrap(), hash_float(-0.0).unwrap());
    }

    #[test]
    fn test_unicode_is_not_normalized() {
        // U+03D3 vs U+03D2 U+0301: same rendered character, different
        // code points, different digests.
        assert_ne!(hash_unicode("\u{03d3}"), hash_unicode("\u{03d2}\u{0301}"));
    }

    #[test]
    fn test_hex_roundtrip() {
        let digest = hash_unicode("roundtrip");
        let recovered = Digest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, recovered);

        assert!(Digest::from_hex("abcd").is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let low = Digest::from_bytes([0x00; 32]);
        let high = Digest::from_bytes([0xff; 32]);
        assert!(low < high);
    }
}
