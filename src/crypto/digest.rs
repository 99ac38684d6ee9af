//! One-shot SHA-2 digests
//!
//! Stateless, deterministic hashing of text. Output is the lowercase hex
//! encoding of the raw digest bytes: 64 characters for SHA-256, 128 for
//! SHA-512.

use sha2::{Digest, Sha256, Sha512};

/// SHA-256 digest of the UTF-8 encoding of `text`, as lowercase hex
pub fn sha256(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// SHA-512 digest of the UTF-8 encoding of `text`, as lowercase hex
pub fn sha512(text: &str) -> String {
    hex::encode(Sha512::digest(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty_string_vector() {
        assert_eq!(
            sha256(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_known_vector() {
        // FIPS 180-2 test vector for "abc"
        assert_eq!(
            sha256("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha512_empty_string_vector() {
        assert_eq!(
            sha512(""),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn test_output_lengths_differ() {
        assert_eq!(sha256("anything").len(), 64);
        assert_eq!(sha512("anything").len(), 128);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(sha256("same input"), sha256("same input"));
        assert_eq!(sha512("same input"), sha512("same input"));
    }

    #[test]
    fn test_lowercase_hex_only() {
        let digest = sha256("The quick brown fox");
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
