//! Cryptographic core for secureflow
//!
//! Provides password-based authenticated encryption (AES-256-GCM with
//! PBKDF2 key derivation), one-shot SHA-2 digests, and single-block
//! RSA-OAEP public-key encryption.
//!
//! Every operation here is a pure, self-contained computation: no shared
//! state, no caches, no configuration. All algorithm parameters are fixed
//! constants so that a blob encrypted today decrypts with the same code
//! tomorrow.

pub mod asymmetric;
pub mod digest;
pub mod key_derivation;
pub mod symmetric;

pub use asymmetric::{
    asymmetric_decrypt, asymmetric_encrypt, generate_keypair, KeyPair,
};
pub use digest::{sha256, sha512};
pub use key_derivation::{derive_key, DerivedKey};
pub use symmetric::{symmetric_decrypt, symmetric_encrypt};

/// Length of the per-encryption salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the AES-GCM nonce (12 bytes / 96 bits).
pub const NONCE_LEN: usize = 12;
/// Length of the derived encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the GCM authentication tag (16 bytes).
pub const TAG_LEN: usize = 16;
/// PBKDF2-HMAC-SHA256 iteration count. Fixed: changing it would orphan
/// every previously produced blob.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
/// RSA modulus size in bits.
pub const RSA_BITS: usize = 2048;
/// Largest plaintext a single RSA-OAEP(SHA-256) block can carry:
/// modulus bytes − 2·hash length − 2.
pub const RSA_MAX_PLAINTEXT: usize = RSA_BITS / 8 - 2 * 32 - 2;
