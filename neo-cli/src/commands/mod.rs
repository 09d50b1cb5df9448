// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Subcommands of `neo-account`. Each one loads a single account record and
//! returns the text to print.

pub mod dump;
pub mod export;
pub mod show;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use neo_wallet::{Nep6Account, WalletAccount, WalletSettings};
use serde_json::Value;

pub type CommandResult = Result<String>;

pub fn load_settings(path: &Path) -> Result<WalletSettings> {
    WalletSettings::load_from_file(path)
        .with_context(|| format!("failed to load settings from {}", path.display()))
}

pub fn load_account(path: &Path, settings: &WalletSettings) -> Result<Nep6Account> {
    tracing::debug!(path = %path.display(), "loading account record");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read account record {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid json", path.display()))?;

    Nep6Account::from_json(&json, settings.address_version)
        .with_context(|| format!("{} is not a NEP-6 account record", path.display()))
}

/// Loads the account and decrypts its key with `password`.
pub fn unlock_account(
    path: &Path,
    password: &str,
    settings: &WalletSettings,
) -> Result<Nep6Account> {
    let mut account = load_account(path, settings)?;
    let address = account.address();
    let key = account
        .get_key_with_password(password, &settings.scrypt)
        .with_context(|| format!("failed to decrypt the key of {address}"))?;
    if key.is_none() {
        anyhow::bail!("account {address} has no key");
    }
    Ok(account)
}


#[cfg(test)]
mod tests {
    use super::{testing::*, *};

    #[test]
    fn test_load_account() {
        let (_dir, path) = write_record();
        let account = load_account(&path, &settings()).expect("load");
        assert!(account.has_key());
        assert!(!account.is_decrypted());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(load_account(&missing, &settings()).is_err());

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, "{").unwrap();
        let err = load_account(&garbage, &settings()).unwrap_err();
        assert!(err.to_string().contains("not valid json"));

        let incomplete = dir.path().join("incomplete.json");
        std::fs::write(&incomplete, r#"{"address":"AStZHy8E6StCqYQbzMqi4poH7YNDHQKxvt"}"#).unwrap();
        let err = load_account(&incomplete, &settings()).unwrap_err();
        assert!(err.to_string().contains("not a NEP-6 account record"));
    }

    #[test]
    fn test_unlock_account() {
        let (_dir, path) = write_record();
        let account = unlock_account(&path, PASSWORD, &settings()).expect("unlock");
        assert_eq!(account.private_key_hex().unwrap().as_str(), PRIVATE_HEX);

        let err = unlock_account(&path, "wrong", &settings()).unwrap_err();
        assert!(err.to_string().starts_with("failed to decrypt"));
    }
}
