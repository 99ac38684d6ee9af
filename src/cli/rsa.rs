//! RSA CLI commands
//!
//! Key-pair generation and single-block public-key encryption. Keys are
//! base64 DER (SubjectPublicKeyInfo / PKCS#8) and can be passed inline or
//! via files written by `rsa keygen`.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Subcommand;

use crate::crypto::{asymmetric_decrypt, asymmetric_encrypt, generate_keypair};

/// RSA-OAEP encryption commands
#[derive(Subcommand)]
pub enum RsaCommands {
    /// Generate a new RSA-2048 key pair
    Keygen {
        /// Write the public key to this file instead of stdout
        #[arg(long)]
        public_out: Option<PathBuf>,

        /// Write the private key to this file instead of stdout
        #[arg(long)]
        private_out: Option<PathBuf>,
    },

    /// Encrypt text with a public key (single block, max 190 bytes)
    Encrypt {
        /// The text to encrypt
        text: String,

        /// Base64 public key
        #[arg(long, conflicts_with = "key_file")]
        key: Option<String>,

        /// File containing the base64 public key
        #[arg(long)]
        key_file: Option<PathBuf>,
    },

    /// Decrypt a ciphertext with a private key
    Decrypt {
        /// The base64 ciphertext
        ciphertext: String,

        /// Base64 private key
        #[arg(long, conflicts_with = "key_file")]
        key: Option<String>,

        /// File containing the base64 private key
        #[arg(long)]
        key_file: Option<PathBuf>,
    },
}

/// Handle RSA commands
pub fn handle_rsa_command(cmd: RsaCommands) -> anyhow::Result<()> {
    match cmd {
        RsaCommands::Keygen {
            public_out,
            private_out,
        } => keygen(public_out, private_out),
        RsaCommands::Encrypt { text, key, key_file } => {
            let key = load_key(key, key_file)?;
            let ciphertext = asymmetric_encrypt(&text, &key)?;
            println!("{}", ciphertext);
            Ok(())
        }
        RsaCommands::Decrypt {
            ciphertext,
            key,
            key_file,
        } => {
            let key = load_key(key, key_file)?;
            let text = asymmetric_decrypt(&ciphertext, &key)?;
            println!("{}", text);
            Ok(())
        }
    }
}

fn keygen(public_out: Option<PathBuf>, private_out: Option<PathBuf>) -> anyhow::Result<()> {
    eprintln!("Generating RSA-2048 key pair (this can take a moment)...");
    let pair = generate_keypair()?;

    match public_out {
        Some(path) => {
            fs::write(&path, &pair.public_key)
                .with_context(|| format!("failed to write public key to {}", path.display()))?;
            println!("Public key written to {}", path.display());
        }
        None => {
            println!("Public key:");
            println!("{}", pair.public_key);
        }
    }

    match private_out {
        Some(path) => {
            fs::write(&path, &pair.private_key)
                .with_context(|| format!("failed to write private key to {}", path.display()))?;
            println!("Private key written to {}", path.display());
            println!("Keep this file secret; there is no recovery mechanism.");
        }
        None => {
            println!("Private key:");
            println!("{}", pair.private_key);
        }
    }

    Ok(())
}

fn load_key(inline: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    match (inline, file) {
        (Some(key), _) => Ok(key),
        (None, Some(path)) => {
            let key = fs::read_to_string(&path)
                .with_context(|| format!("failed to read key from {}", path.display()))?;
            Ok(key.trim().to_string())
        }
        (None, None) => bail!("provide a key with --key or --key-file"),
    }
}
