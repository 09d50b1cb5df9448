// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Dump command - prints the private key in every encoding

use std::path::Path;

use anyhow::Context;
use neo_wallet::{WalletAccount, WalletSettings};

use super::{unlock_account, CommandResult};

pub fn execute(record: &Path, password: &str, settings: &WalletSettings) -> CommandResult {
    let account = unlock_account(record, password, settings)?;

    let mut out = Vec::<u8>::new();
    account.write_summary(&mut out)?;
    let summary = String::from_utf8(out).context("summary is not utf-8")?;
    Ok(summary.trim_end().to_string())
}
