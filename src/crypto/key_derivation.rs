//! Key derivation using PBKDF2
//!
//! Stretches a user passphrase into an AES-256 key with
//! PBKDF2-HMAC-SHA256. The iteration count is a fixed cost factor: tens of
//! milliseconds of derivation latency bought as resistance to offline
//! brute-force. It must stay identical between encryption and decryption,
//! so no configuration surface is exposed.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{KEY_LEN, PBKDF2_ITERATIONS};

/// A derived encryption key
///
/// Ephemeral by design: it exists for the duration of one encrypt or
/// decrypt call and zeroes its memory on drop. It is never persisted or
/// exported.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}

/// Derive an encryption key from a passphrase and salt
///
/// Deterministic: the same (passphrase, salt) pair always yields the same
/// key. An empty passphrase is accepted; rejecting weak passphrases is a
/// policy decision left to the caller.
pub fn derive_key(password: &[u8], salt: &[u8]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey { key }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_inputs_same_key() {
        let salt = [42u8; 16];
        let key1 = derive_key(b"test_passphrase", &salt);
        let key2 = derive_key(b"test_passphrase", &salt);
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let salt = [42u8; 16];
        let key1 = derive_key(b"passphrase1", &salt);
        let key2 = derive_key(b"passphrase2", &salt);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key(b"same_passphrase", &[1u8; 16]);
        let key2 = derive_key(b"same_passphrase", &[2u8; 16]);
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_passphrase_accepted() {
        let salt = [7u8; 16];
        let key = derive_key(b"", &salt);
        assert_eq!(key.as_bytes().len(), 32);
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let key = derive_key(b"secret", &[0u8; 16]);
        let debug = format!("{:?}", key);
        assert!(debug.contains("DerivedKey"));
        assert!(!debug.contains("key:"));
    }
}
