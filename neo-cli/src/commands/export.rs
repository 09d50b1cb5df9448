// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Export command - the public account record (requires the key to derive the public key)

use std::path::Path;

use neo_wallet::{WalletAccount, WalletSettings};

use super::{unlock_account, CommandResult};

pub fn execute(record: &Path, password: &str, settings: &WalletSettings) -> CommandResult {
    let account = unlock_account(record, password, settings)?;
    Ok(serde_json::to_string_pretty(&account.to_public_json()?)?)
}
