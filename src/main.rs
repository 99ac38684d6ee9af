use anyhow::Result;
use clap::{Parser, Subcommand};

use secureflow::cli::{handle_aes_command, handle_hash_command, handle_rsa_command};

#[derive(Parser)]
#[command(
    name = "secureflow",
    version,
    about = "Cryptographic envelope toolkit",
    long_about = "secureflow is a command-line toolkit for everyday cryptography: \
                  passphrase-based AES-256-GCM encryption of text, SHA-2 digests, \
                  and RSA-2048 OAEP public-key encryption with standard key \
                  interchange formats."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Passphrase-based AES-256-GCM encryption
    #[command(subcommand)]
    Aes(secureflow::cli::AesCommands),

    /// SHA-2 digests
    #[command(subcommand)]
    Hash(secureflow::cli::HashCommands),

    /// RSA-OAEP key generation and encryption
    #[command(subcommand)]
    Rsa(secureflow::cli::RsaCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Aes(cmd) => handle_aes_command(cmd),
        Commands::Hash(cmd) => handle_hash_command(cmd),
        Commands::Rsa(cmd) => handle_rsa_command(cmd),
    }
}
