//! AES-256-GCM symmetric envelope
//!
//! Authenticated encryption of text under a passphrase-derived key. Each
//! call generates a fresh 16-byte salt and fresh 12-byte nonce; the output
//! blob packs `salt || nonce || ciphertext+tag` and is base64 encoded, so
//! it is self-describing and nothing needs to be stored out of band.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use aes_gcm::aead::rand_core::RngCore;
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{SecureFlowError, SecureFlowResult};

use super::key_derivation::derive_key;
use super::{NONCE_LEN, SALT_LEN};

/// Minimum decoded blob length: salt + nonce. Anything shorter cannot even
/// be sliced, let alone decrypted.
const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN;

/// Encrypt plaintext under a passphrase
///
/// A fresh salt is drawn per call, so the derived key is never reused
/// across encryptions. This is deliberate: the cost of re-running PBKDF2
/// buys defense-in-depth on top of the per-call nonce, and it keeps the
/// API stateless. There is intentionally no way to supply a pre-derived
/// key.
pub fn symmetric_encrypt(plaintext: &str, password: &[u8]) -> SecureFlowResult<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let key = derive_key(password, &salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| SecureFlowError::MalformedInput("invalid key length".to_string()))?;

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|_| SecureFlowError::MalformedInput("plaintext too long for AES-GCM".to_string()))?;

    let mut blob = Vec::with_capacity(MIN_BLOB_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(&blob))
}

/// Decrypt a blob produced by [`symmetric_encrypt`]
///
/// Fails with `MalformedInput` when the base64 is invalid or the decoded
/// blob is too short to contain a salt and nonce, and with a single generic
/// `Authentication` error when the GCM tag does not verify. Wrong
/// passphrase, corruption, and tampering are indistinguishable on purpose.
pub fn symmetric_decrypt(blob: &str, password: &[u8]) -> SecureFlowResult<String> {
    let combined = STANDARD
        .decode(blob.trim())
        .map_err(|e| SecureFlowError::MalformedInput(format!("invalid base64: {}", e)))?;

    if combined.len() < MIN_BLOB_LEN {
        return Err(SecureFlowError::MalformedInput(format!(
            "blob too short: {} bytes, need at least {}",
            combined.len(),
            MIN_BLOB_LEN
        )));
    }

    let salt = &combined[..SALT_LEN];
    let nonce = Nonce::from_slice(&combined[SALT_LEN..MIN_BLOB_LEN]);
    let ciphertext = &combined[MIN_BLOB_LEN..];

    let key = derive_key(password, salt);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| SecureFlowError::MalformedInput("invalid key length".to_string()))?;

    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| SecureFlowError::Authentication)?;

    String::from_utf8(plaintext)
        .map_err(|_| SecureFlowError::MalformedInput("decrypted data is not valid UTF-8".to_string()))
}
