// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Show command - account metadata, no key material and no decryption

use std::path::Path;

use neo_wallet::{WalletAccount, WalletSettings};
use serde_json::json;

use super::{load_account, CommandResult};

pub fn execute(record: &Path, settings: &WalletSettings) -> CommandResult {
    let account = load_account(record, settings)?;

    let info = json!({
        "address": account.address(),
        "scriptHash": account.script_hash().to_string(),
        "label": account.label(),
        "isDefault": account.is_default(),
        "lock": account.is_locked(),
        "watchOnly": account.watch_only(),
        "hasKey": account.has_key(),
        "decrypted": account.is_decrypted(),
        "contract": account.contract().map(|contract| contract.to_json()),
        "extra": account.extra(),
    });
    Ok(serde_json::to_string_pretty(&info)?)
}
