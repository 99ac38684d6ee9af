//! RSA-OAEP asymmetric envelope
//!
//! Key-pair generation and single-block public-key encryption. Keys travel
//! in the standard interchange formats: SubjectPublicKeyInfo DER for the
//! public half, PKCS#8 DER for the private half, each base64 encoded.
//!
//! OAEP with SHA-256 is the only padding accepted. Raw RSA or PKCS#1 v1.5
//! padding would be a cryptographic defect (no chosen-ciphertext
//! security), not a stylistic alternative.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::error::{SecureFlowError, SecureFlowResult};

use super::RSA_BITS;

/// An exported RSA key pair
///
/// Both halves are base64-encoded DER. The pair is generated once and never
/// mutated; keeping the private key secret is the caller's responsibility,
/// this module never stores it.
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// SubjectPublicKeyInfo DER, base64 encoded
    pub public_key: String,
    /// PKCS#8 DER, base64 encoded
    pub private_key: String,
}

/// Generate a fresh RSA-2048 key pair (public exponent 65537)
///
/// This is an expensive blocking call: the prime search over 2048-bit
/// integers can take hundreds of milliseconds. Callers on a
/// latency-sensitive path should dispatch it off that path.
pub fn generate_keypair() -> SecureFlowResult<KeyPair> {
    let mut rng = OsRng;
    let private = RsaPrivateKey::new(&mut rng, RSA_BITS)
        .map_err(|e| SecureFlowError::KeyGeneration(e.to_string()))?;
    let public = RsaPublicKey::from(&private);

    let public_der = public
        .to_public_key_der()
        .map_err(|e| SecureFlowError::KeyGeneration(e.to_string()))?;
    let private_der = private
        .to_pkcs8_der()
        .map_err(|e| SecureFlowError::KeyGeneration(e.to_string()))?;

    Ok(KeyPair {
        public_key: STANDARD.encode(public_der.as_bytes()),
        private_key: STANDARD.encode(private_der.as_bytes()),
    })
}

/// Encrypt text under a base64 SubjectPublicKeyInfo public key
///
/// RSA-OAEP is a single-block scheme: the plaintext must fit in
/// `modulus bytes − 2·hash length − 2` (190 bytes for RSA-2048 with
/// SHA-256). Larger inputs fail with `PlaintextTooLarge`; there is
/// deliberately no hybrid fallback.
pub fn asymmetric_encrypt(plaintext: &str, public_key_b64: &str) -> SecureFlowResult<String> {
    let public = import_public_key(public_key_b64)?;

    let max = public.size() - 2 * 32 - 2;
    if plaintext.len() > max {
        return Err(SecureFlowError::PlaintextTooLarge {
            len: plaintext.len(),
            max,
        });
    }

    let mut rng = OsRng;
    let ciphertext = public
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext.as_bytes())
        .map_err(|e| SecureFlowError::MalformedInput(format!("RSA encryption failed: {}", e)))?;

    Ok(STANDARD.encode(&ciphertext))
}

/// Decrypt a base64 ciphertext with a base64 PKCS#8 private key
///
/// Wrong key, corrupted ciphertext, and padding failure all surface as the
/// same generic `Decryption` error so that no padding oracle exists.
pub fn asymmetric_decrypt(ciphertext_b64: &str, private_key_b64: &str) -> SecureFlowResult<String> {
    let private = import_private_key(private_key_b64)?;

    let ciphertext = STANDARD
        .decode(ciphertext_b64.trim())
        .map_err(|e| SecureFlowError::MalformedInput(format!("invalid base64: {}", e)))?;

    let plaintext = private
        .decrypt(Oaep::new::<Sha256>(), &ciphertext)
        .map_err(|_| SecureFlowError::Decryption)?;

    String::from_utf8(plaintext)
        .map_err(|_| SecureFlowError::MalformedInput("decrypted data is not valid UTF-8".to_string()))
}

fn import_public_key(b64: &str) -> SecureFlowResult<RsaPublicKey> {
    let der = STANDARD
        .decode(b64.trim())
        .map_err(|e| SecureFlowError::MalformedInput(format!("invalid base64: {}", e)))?;
    RsaPublicKey::from_public_key_der(&der)
        .map_err(|_| SecureFlowError::KeyImport("not a SubjectPublicKeyInfo RSA key".to_string()))
}

fn import_private_key(b64: &str) -> SecureFlowResult<RsaPrivateKey> {
    let der = STANDARD
        .decode(b64.trim())
        .map_err(|e| SecureFlowError::MalformedInput(format!("invalid base64: {}", e)))?;
    RsaPrivateKey::from_pkcs8_der(&der)
        .map_err(|_| SecureFlowError::KeyImport("not a PKCS#8 RSA key".to_string()))
}
