//! Custom error types for secureflow
//!
//! This module defines the error taxonomy for the cryptographic core using
//! thiserror for ergonomic error definitions. Error messages must never
//! include a password, key, or plaintext.

use thiserror::Error;

/// The main error type for secureflow operations
#[derive(Error, Debug)]
pub enum SecureFlowError {
    /// Structurally invalid blob, key, or base64 input, detected before any
    /// cryptographic operation runs
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// AES-GCM tag verification failed: wrong password, corrupted blob, or
    /// tampering. Deliberately generic so callers cannot distinguish cause.
    #[error("Authentication failed: invalid passphrase or corrupted data")]
    Authentication,

    /// RSA-OAEP decryption failed: wrong key, corrupted ciphertext, or
    /// padding failure. Deliberately generic (no padding oracle).
    #[error("Decryption failed: invalid key or corrupted ciphertext")]
    Decryption,

    /// Plaintext exceeds the single-block RSA-OAEP capacity
    #[error("Plaintext too large for a single RSA block: {len} bytes (maximum {max})")]
    PlaintextTooLarge { len: usize, max: usize },

    /// Key bytes do not parse as the expected interchange format
    #[error("Key import failed: {0}")]
    KeyImport(String),

    /// Key generation failure (RSA prime search)
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
}

/// Convenience Result type alias for secureflow operations
pub type SecureFlowResult<T> = Result<T, SecureFlowError>;
