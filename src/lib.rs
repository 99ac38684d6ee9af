//! secureflow - cryptographic envelope toolkit
//!
//! This library provides the cryptographic core for the secureflow CLI:
//! password-based authenticated encryption, collision-resistant digests,
//! and RSA public-key encryption.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: the cryptographic core (key derivation, symmetric and
//!   asymmetric envelopes, digests)
//! - `error`: the error taxonomy
//! - `cli`: clap subcommand handlers for the `secureflow` binary
//!
//! Every operation is a pure blocking computation with no shared state.
//! PBKDF2 derivation and RSA key generation are CPU-bound and can take
//! tens to hundreds of milliseconds; callers with a latency-sensitive
//! event loop should run them on a worker.
//!
//! # Example
//!
//! ```rust,ignore
//! use secureflow::{symmetric_decrypt, symmetric_encrypt};
//!
//! let blob = symmetric_encrypt("attack at dawn", b"hunter2")?;
//! let text = symmetric_decrypt(&blob, b"hunter2")?;
//! assert_eq!(text, "attack at dawn");
//! ```

pub mod cli;
pub mod crypto;
pub mod error;

pub use crypto::{
    asymmetric_decrypt, asymmetric_encrypt, derive_key, generate_keypair, sha256, sha512,
    symmetric_decrypt, symmetric_encrypt, DerivedKey, KeyPair,
};
pub use error::{SecureFlowError, SecureFlowResult};
