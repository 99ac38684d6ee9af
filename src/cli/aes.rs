//! AES encryption CLI commands
//!
//! Passphrase-based encryption and decryption of text. The output of
//! `encrypt` is a self-contained base64 blob (salt, nonce, and ciphertext
//! travel together), so `decrypt` needs nothing but the blob and the
//! passphrase.

use clap::Subcommand;

use crate::crypto::{symmetric_decrypt, symmetric_encrypt};

use super::passphrase;

/// AES-256-GCM encryption commands
#[derive(Subcommand)]
pub enum AesCommands {
    /// Encrypt text with a passphrase
    Encrypt {
        /// The text to encrypt
        text: String,

        /// Passphrase (prompted interactively when omitted)
        #[arg(long, env = "SECUREFLOW_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
    },

    /// Decrypt a blob produced by `aes encrypt`
    Decrypt {
        /// The base64 blob to decrypt
        blob: String,

        /// Passphrase (prompted interactively when omitted)
        #[arg(long, env = "SECUREFLOW_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
    },
}

/// Handle AES commands
pub fn handle_aes_command(cmd: AesCommands) -> anyhow::Result<()> {
    match cmd {
        AesCommands::Encrypt { text, passphrase: flag } => {
            let passphrase = passphrase::resolve_new(flag)?;
            let blob = symmetric_encrypt(&text, passphrase.as_bytes())?;
            println!("{}", blob);
            Ok(())
        }
        AesCommands::Decrypt { blob, passphrase: flag } => {
            let passphrase = passphrase::resolve(flag, "Enter passphrase: ")?;
            let text = symmetric_decrypt(&blob, passphrase.as_bytes())?;
            println!("{}", text);
            Ok(())
        }
    }
}
