//! Passphrase resolution for the CLI
//!
//! A passphrase can arrive via `--passphrase`, the `SECUREFLOW_PASSPHRASE`
//! environment variable, or an interactive hidden prompt. Prompted values
//! for encryption are entered twice. Resolved passphrases are held in
//! `Zeroizing` wrappers so they are wiped on drop.

use anyhow::{bail, Context, Result};
use zeroize::Zeroizing;

/// Resolve a passphrase for decryption (single prompt when interactive)
pub fn resolve(flag: Option<String>, prompt: &str) -> Result<Zeroizing<String>> {
    match flag {
        Some(p) => Ok(Zeroizing::new(p)),
        None => {
            let p = rpassword::prompt_password(prompt)
                .context("failed to read passphrase from terminal")?;
            Ok(Zeroizing::new(p))
        }
    }
}

/// Resolve a passphrase for encryption (prompted values are confirmed)
pub fn resolve_new(flag: Option<String>) -> Result<Zeroizing<String>> {
    match flag {
        Some(p) => Ok(Zeroizing::new(p)),
        None => {
            let first = Zeroizing::new(
                rpassword::prompt_password("Enter passphrase: ")
                    .context("failed to read passphrase from terminal")?,
            );
            let second = Zeroizing::new(
                rpassword::prompt_password("Confirm passphrase: ")
                    .context("failed to read passphrase from terminal")?,
            );
            if *first != *second {
                bail!("passphrases do not match");
            }
            Ok(first)
        }
    }
}
