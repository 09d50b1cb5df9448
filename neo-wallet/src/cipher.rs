// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::AddressVersion;
use neo_crypto::{
    ecc256::PrivateKey,
    nep2::{decrypt_nep2, encrypt_nep2},
};

use crate::{ScryptParameters, WalletError};

/// Turns an encrypted key record into a private key and back.
///
/// Implementations must report a wrong password or a corrupted record as
/// [`WalletError::MalformedRecord`] and unusable scrypt parameters as
/// [`WalletError::InvalidScrypt`].
pub trait KeyCipher: Send + Sync {
    fn decrypt_key(
        &self,
        record: &str,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<PrivateKey, WalletError>;

    fn encrypt_key(
        &self,
        key: &PrivateKey,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<String, WalletError>;
}

/// NEP-2 key encryption bound to an address version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nep2Cipher {
    version: AddressVersion,
}

impl Nep2Cipher {
    pub const fn new(version: AddressVersion) -> Self {
        Self { version }
    }

    #[inline]
    pub fn version(&self) -> AddressVersion {
        self.version
    }
}

impl KeyCipher for Nep2Cipher {
    fn decrypt_key(
        &self,
        record: &str,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<PrivateKey, WalletError> {
        scrypt.validate()?;
        Ok(decrypt_nep2(record, password, self.version, (*scrypt).into())?)
    }

    fn encrypt_key(
        &self,
        key: &PrivateKey,
        password: &str,
        scrypt: &ScryptParameters,
    ) -> Result<String, WalletError> {
        scrypt.validate()?;
        Ok(encrypt_nep2(key, password, self.version, (*scrypt).into())?)
    }
}
