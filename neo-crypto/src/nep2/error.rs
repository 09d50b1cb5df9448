// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::encoding::FromBase58CheckError;

use crate::{aes::EcbError, ecc256::KeyError, scrypt::ScryptDeriveError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Nep2Error {
    #[error("nep2-key: invalid base58check: {0}")]
    InvalidBase58Check(#[from] FromBase58CheckError),

    #[error("nep2-key: the key length(base58-decoded) must be 39, got {0}")]
    InvalidKeyLength(usize),

    #[error("nep2-key: invalid prefix")]
    InvalidPrefix,

    #[error("nep2-key: invalid private key")]
    InvalidPrivateKey,

    #[error("nep2-key: address hash mismatch")]
    InvalidAddressHash,

    #[error("nep2-key: {0}")]
    Scrypt(#[from] ScryptDeriveError),

    #[error("nep2-key: {0}")]
    Aes(#[from] EcbError),
}

impl From<KeyError> for Nep2Error {
    fn from(_: KeyError) -> Self {
        Self::InvalidPrivateKey
    }
}

impl Nep2Error {
    /// True when the record itself or the passphrase is wrong, as opposed to
    /// unusable scrypt parameters.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::Scrypt(_))
    }
}
