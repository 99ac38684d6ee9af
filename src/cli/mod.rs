//! CLI command handlers
//!
//! One module per command family, each exposing a clap `Subcommand` enum
//! and a `handle_*_command` dispatch function.

pub mod aes;
pub mod hash;
pub mod passphrase;
pub mod rsa;

pub use aes::{handle_aes_command, AesCommands};
pub use hash::{handle_hash_command, HashCommands};
pub use rsa::{handle_rsa_command, RsaCommands};
