//! Digest CLI commands

use clap::Subcommand;

use crate::crypto::{sha256, sha512};

/// One-shot digest commands
#[derive(Subcommand)]
pub enum HashCommands {
    /// SHA-256 digest of the given text (lowercase hex)
    Sha256 {
        /// The text to hash
        text: String,
    },

    /// SHA-512 digest of the given text (lowercase hex)
    Sha512 {
        /// The text to hash
        text: String,
    },
}

/// Handle hash commands
pub fn handle_hash_command(cmd: HashCommands) -> anyhow::Result<()> {
    match cmd {
        HashCommands::Sha256 { text } => println!("{}", sha256(&text)),
        HashCommands::Sha512 { text } => println!("{}", sha512(&text)),
    }
    Ok(())
}
