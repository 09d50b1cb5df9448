// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::io::{self, Write};

use neo_base::{
    encoding::{WifEncode, WIF_VERSION},
    AddressVersion, UInt160,
};
use neo_crypto::ecc256::{Keypair, PublicKey};
use serde_json::Value;
use zeroize::Zeroizing;

use crate::{Contract, ScryptParameters, WalletError};

/// Ambient wallet state an account needs to decrypt its key implicitly.
pub trait UnlockContext {
    /// The wallet password, if the wallet is unlocked.
    fn password(&self) -> Option<&str>;

    fn scrypt(&self) -> &ScryptParameters;
}

/// A plain [`UnlockContext`] holding the wallet password in memory.
pub struct WalletSession {
    password: Option<Zeroizing<String>>,
    scrypt: ScryptParameters,
}

impl WalletSession {
    pub fn new(password: impl Into<String>, scrypt: ScryptParameters) -> Self {
        Self { password: Some(Zeroizing::new(password.into())), scrypt }
    }

    pub fn locked(scrypt: ScryptParameters) -> Self {
        Self { password: None, scrypt }
    }

    pub fn unlock(&mut self, password: impl Into<String>) {
        self.password = Some(Zeroizing::new(password.into()));
    }

    pub fn lock(&mut self) {
        self.password = None;
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.password.is_none()
    }
}

impl UnlockContext for WalletSession {
    fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    fn scrypt(&self) -> &ScryptParameters {
        &self.scrypt
    }
}

impl core::fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WalletSession")
            .field("locked", &self.is_locked())
            .field("scrypt", &self.scrypt)
            .finish()
    }
}

/// A wallet account: an address, its spending-lock metadata, an optional
/// contract and, depending on the implementation, some form of key material.
pub trait WalletAccount {
    fn script_hash(&self) -> UInt160;

    fn address_version(&self) -> AddressVersion;

    fn address(&self) -> String {
        self.script_hash().to_address(self.address_version())
    }

    fn label(&self) -> Option<&str>;

    fn set_label(&mut self, label: Option<String>);

    fn is_default(&self) -> bool;

    fn set_default(&mut self, is_default: bool);

    fn is_locked(&self) -> bool;

    fn set_locked(&mut self, lock: bool);

    fn contract(&self) -> Option<&Contract>;

    fn set_contract(&mut self, contract: Option<Contract>);

    /// An account without a contract cannot spend.
    fn watch_only(&self) -> bool {
        self.contract().is_none()
    }

    /// Whether any key material, encrypted or not, is present. Never decrypts.
    fn has_key(&self) -> bool;

    /// Returns the key pair, decrypting it with the context's password on first use.
    fn get_key(&mut self, ctx: &dyn UnlockContext) -> Result<Option<&Keypair>, WalletError>;

    /// The already decrypted key pair, if any.
    fn decrypted_key(&self) -> Option<&Keypair>;

    fn public_key(&self) -> Option<&PublicKey>;

    fn encrypted_key(&self) -> Option<&str>;

    fn private_key_hex(&self) -> Result<Zeroizing<String>, WalletError> {
        Ok(self.spending_key()?.private_key.to_hex())
    }

    fn wif(&self) -> Result<Zeroizing<String>, WalletError> {
        let key = self.spending_key()?;
        Ok(Zeroizing::new(key.private_key.as_be_bytes().wif_encode(WIF_VERSION, true)))
    }

    /// The decrypted key pair of an account that can spend.
    fn spending_key(&self) -> Result<&Keypair, WalletError> {
        if self.watch_only() {
            return Err(WalletError::WatchOnly);
        }
        self.decrypted_key().ok_or(WalletError::MissingKey)
    }

    /// Address, label, flags, public key, contract and extra. Never any private
    /// or encrypted key material.
    fn to_public_json(&self) -> Result<Value, WalletError>;

    /// Writes every form of the key for manual inspection.
    fn write_summary(&self, out: &mut dyn Write) -> Result<(), WalletError> {
        let private_hex = self.private_key_hex()?;
        let wif = self.wif()?;
        let public = self.public_key().map(|key| key.to_string()).unwrap_or_default();
        let script = self.contract().map(|c| hex::encode(c.script())).unwrap_or_default();

        writeln!(out, "            prikey: {}", private_hex.as_str())?;
        writeln!(out, "            wifkey: {}", wif.as_str())?;
        writeln!(out, "           nep2key: {}", self.encrypted_key().unwrap_or_default())?;
        writeln!(out, "            pubkey: {public}")?;
        writeln!(out, "           address: {}", self.address())?;
        writeln!(out, "   contract script: {script}")?;
        Ok(())
    }

    fn print_summary(&self) -> Result<(), WalletError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_summary(&mut out)
    }
}
