// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! NEP-6 account whose private key is kept as a NEP-2 record and decrypted
//! lazily, at most once, on first use.

mod json;

use std::{fmt, sync::Arc};

use neo_base::{AddressVersion, UInt160};
use neo_crypto::{
    ecc256::{Keypair, PublicKey},
    nep2::Nep2Error,
};
use serde_json::Value;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{
    Contract, KeyCipher, Nep2Cipher, ScryptParameters, UnlockContext, WalletAccount, WalletError,
};

/// The NEP-2 record that produced (or was produced from) a decrypted key,
/// with a digest of the password that opened it. The digest is unknown while
/// the key came from elsewhere and the record has not been opened yet.
struct SealedKey {
    nep2: String,
    password_digest: Option<Zeroizing<[u8; 32]>>,
}

impl SealedKey {
    fn new(nep2: String, password: &str) -> Self {
        let password_digest = Some(password_digest(&nep2, password));
        Self { nep2, password_digest }
    }

    fn unopened(nep2: String) -> Self {
        Self { nep2, password_digest: None }
    }

    fn opens_with(&self, password: &str) -> bool {
        let Some(expected) = &self.password_digest else {
            return false;
        };
        let digest = password_digest(&self.nep2, password);
        bool::from(digest[..].ct_eq(&expected[..]))
    }
}

fn password_digest(nep2: &str, password: &str) -> Zeroizing<[u8; 32]> {
    let mut hasher = Sha256::new();
    hasher.update(nep2.as_bytes());
    hasher.update(password.as_bytes());
    Zeroizing::new(hasher.finalize().into())
}

enum KeyState {
    /// No key material at all.
    Absent,
    /// Only the public key is known, e.g. an account imported from a public export.
    PublicOnly(PublicKey),
    /// The NEP-2 record has not been decrypted yet.
    Encrypted { nep2: String },
    Decrypted { key: Keypair, sealed: Option<SealedKey> },
}

impl KeyState {
    fn name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::PublicOnly(_) => "public-only",
            Self::Encrypted { .. } => "encrypted",
            Self::Decrypted { .. } => "decrypted",
        }
    }
}

pub struct Nep6Account {
    script_hash: UInt160,
    address_version: AddressVersion,
    label: Option<String>,
    is_default: bool,
    lock: bool,
    contract: Option<Contract>,
    extra: Option<Value>,
    state: KeyState,
    cipher: Arc<dyn KeyCipher>,
}

impl Nep6Account {
    fn with_state(script_hash: UInt160, version: AddressVersion, state: KeyState) -> Self {
        Self {
            script_hash,
            address_version: version,
            label: None,
            is_default: false,
            lock: false,
            contract: None,
            extra: None,
            state,
            cipher: Arc::new(Nep2Cipher::new(version)),
        }
    }

    /// An account loaded from storage: encrypted if `nep2` is present, keyless otherwise.
    pub fn new(script_hash: UInt160, version: AddressVersion, nep2: Option<String>) -> Self {
        let state = match nep2 {
            Some(nep2) => KeyState::Encrypted { nep2 },
            None => KeyState::Absent,
        };
        Self::with_state(script_hash, version, state)
    }

    /// An account holding a plaintext key with no encrypted record.
    pub fn with_key(script_hash: UInt160, version: AddressVersion, key: Keypair) -> Self {
        Self::with_state(script_hash, version, KeyState::Decrypted { key, sealed: None })
    }

    /// An account for a signature contract of `key`.
    pub fn from_keypair(key: Keypair, version: AddressVersion) -> Self {
        let contract = Contract::signature(&key.public_key);
        let mut account = Self::with_key(contract.script_hash(), version, key);
        account.contract = Some(contract);
        account
    }

    /// Encrypts `key` with `password` right away and keeps the plaintext cached.
    pub fn with_encrypted_key(
        script_hash: UInt160,
        version: AddressVersion,
        key: Keypair,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<Self, WalletError> {
        let cipher = Arc::new(Nep2Cipher::new(version));
        Self::with_encrypted_key_using(cipher, script_hash, version, key, password, scrypt)
    }

    pub fn with_encrypted_key_using(
        cipher: Arc<dyn KeyCipher>,
        script_hash: UInt160,
        version: AddressVersion,
        key: Keypair,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<Self, WalletError> {
        let nep2 = cipher.encrypt_key(&key.private_key, password, scrypt)?;
        let sealed = SealedKey::new(nep2, password);
        let state = KeyState::Decrypted { key, sealed: Some(sealed) };

        let account = Self { cipher, ..Self::with_state(script_hash, version, state) };
        tracing::debug!(address = %account.address(), "created account with encrypted key");
        Ok(account)
    }

    /// Replaces the cipher used to decrypt the NEP-2 record.
    pub fn with_cipher(mut self, cipher: Arc<dyn KeyCipher>) -> Self {
        self.cipher = cipher;
        self
    }

    /// The NEP-2 record, if the account has one.
    pub fn nep2_key(&self) -> Option<&str> {
        match &self.state {
            KeyState::Encrypted { nep2 } => Some(nep2),
            KeyState::Decrypted { sealed: Some(sealed), .. } => Some(&sealed.nep2),
            _ => None,
        }
    }

    /// True unless a NEP-2 record is still waiting to be decrypted.
    pub fn is_decrypted(&self) -> bool {
        !matches!(self.state, KeyState::Encrypted { .. })
    }

    #[inline]
    pub fn extra(&self) -> Option<&Value> {
        self.extra.as_ref()
    }

    #[inline]
    pub fn set_extra(&mut self, extra: Option<Value>) {
        self.extra = extra;
    }

    /// Returns the key pair, decrypting the NEP-2 record with `password` if needed.
    ///
    /// Once decrypted, the key is never derived again: later calls only check that
    /// `password` is the one that opened the record. A key supplied next to a record
    /// (see [`Nep6Account::from_json_with_key`]) opens the record on the first call.
    pub fn get_key_with_password(
        &mut self,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<Option<&Keypair>, WalletError> {
        match self.state {
            KeyState::Absent | KeyState::PublicOnly(_) => return Ok(None),
            KeyState::Encrypted { .. } => self.decrypt(password, scrypt)?,
            KeyState::Decrypted { sealed: Some(ref sealed), .. }
                if sealed.password_digest.is_none() =>
            {
                self.open_record(password, scrypt)?
            }
            KeyState::Decrypted { sealed: Some(ref sealed), .. } => {
                if !sealed.opens_with(password) {
                    tracing::warn!(address = %self.address(), "password does not open the account key");
                    return Err(WalletError::MalformedRecord(Nep2Error::InvalidAddressHash));
                }
            }
            KeyState::Decrypted { sealed: None, .. } => {}
        }
        Ok(self.decrypted_key())
    }

    /// Checks `password` against the NEP-2 record without caching anything.
    pub fn verify_password(
        &self,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<bool, WalletError> {
        let nep2 = self.nep2_key().ok_or(WalletError::MissingKey)?;
        match self.cipher.decrypt_key(nep2, password, scrypt) {
            Ok(_) => Ok(true),
            Err(WalletError::MalformedRecord(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn decrypt(&mut self, password: &str, scrypt: &ScryptParameters) -> Result<(), WalletError> {
        let KeyState::Encrypted { nep2 } = &self.state else {
            return Ok(());
        };

        let address = self.address();
        tracing::debug!(%address, %scrypt, "decrypting account key");

        let private = self.cipher.decrypt_key(nep2, password, scrypt).map_err(|err| {
            tracing::warn!(%address, error = %err, "failed to decrypt account key");
            err
        })?;
        let key = Keypair::from_private(private)
            .map_err(|_| WalletError::MalformedRecord(Nep2Error::InvalidPrivateKey))?;

        let sealed = SealedKey::new(nep2.clone(), password);
        self.state = KeyState::Decrypted { key, sealed: Some(sealed) };
        Ok(())
    }

    /// Checks `password` against a record that arrived next to a plaintext key,
    /// once. The record must hold that same key.
    fn open_record(&mut self, password: &str, scrypt: &ScryptParameters) -> Result<(), WalletError> {
        let KeyState::Decrypted { key, sealed: Some(sealed) } = &self.state else {
            return Ok(());
        };

        let address = self.address();
        tracing::debug!(%address, %scrypt, "opening account key record");

        let private = self.cipher.decrypt_key(&sealed.nep2, password, scrypt).map_err(|err| {
            tracing::warn!(%address, error = %err, "password does not open the account key");
            err
        })?;
        if private != key.private_key {
            tracing::warn!(%address, "account key record holds a different key");
            return Err(WalletError::MalformedRecord(Nep2Error::InvalidPrivateKey));
        }

        let digest = password_digest(&sealed.nep2, password);
        if let KeyState::Decrypted { sealed: Some(sealed), .. } = &mut self.state {
            sealed.password_digest = Some(digest);
        }
        Ok(())
    }
}

impl WalletAccount for Nep6Account {
    #[inline]
    fn script_hash(&self) -> UInt160 {
        self.script_hash
    }

    #[inline]
    fn address_version(&self) -> AddressVersion {
        self.address_version
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    fn is_locked(&self) -> bool {
        self.lock
    }

    fn set_locked(&mut self, lock: bool) {
        self.lock = lock;
    }

    fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    fn set_contract(&mut self, contract: Option<Contract>) {
        self.contract = contract;
    }

    fn has_key(&self) -> bool {
        matches!(self.state, KeyState::Encrypted { .. } | KeyState::Decrypted { .. })
    }

    fn get_key(&mut self, ctx: &dyn UnlockContext) -> Result<Option<&Keypair>, WalletError> {
        if let KeyState::Encrypted { .. } = self.state {
            let password = ctx.password().ok_or(WalletError::PassphraseRequired)?;
            self.decrypt(password, ctx.scrypt())?;
        } else {
            tracing::trace!(address = %self.address(), key = self.state.name(), "no decryption needed");
        }
        Ok(self.decrypted_key())
    }

    fn decrypted_key(&self) -> Option<&Keypair> {
        match &self.state {
            KeyState::Decrypted { key, .. } => Some(key),
            _ => None,
        }
    }

    fn public_key(&self) -> Option<&PublicKey> {
        match &self.state {
            KeyState::PublicOnly(public_key) => Some(public_key),
            KeyState::Decrypted { key, .. } => Some(&key.public_key),
            _ => None,
        }
    }

    fn encrypted_key(&self) -> Option<&str> {
        self.nep2_key()
    }

    fn to_public_json(&self) -> Result<Value, WalletError> {
        self.public_json()
    }
}

impl fmt::Debug for Nep6Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nep6Account")
            .field("address", &self.address())
            .field("label", &self.label)
            .field("is_default", &self.is_default)
            .field("lock", &self.lock)
            .field("watch_only", &self.watch_only())
            .field("key", &self.state.name())
            .finish()
    }
}
