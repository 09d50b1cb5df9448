// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Verify command - checks a password without caching the decrypted key

use std::path::Path;

use anyhow::bail;
use neo_wallet::{WalletAccount, WalletSettings};

use super::{load_account, CommandResult};

pub fn execute(record: &Path, password: &str, settings: &WalletSettings) -> CommandResult {
    let account = load_account(record, settings)?;
    let address = account.address();

    if !account.verify_password(password, &settings.scrypt)? {
        bail!("password does not match the key of {address}");
    }
    Ok(format!("password verified for {address}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::*;

    #[test]
    fn test_verify() {
        let (_dir, path) = write_record();
        let output = execute(&path, PASSWORD, &settings()).expect("correct password");
        assert!(output.starts_with("password verified"));

        let err = execute(&path, "wrong", &settings()).unwrap_err();
        assert!(err.to_string().starts_with("password does not match"));
    }
}
