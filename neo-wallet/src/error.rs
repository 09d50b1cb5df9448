// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_crypto::nep2::Nep2Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    /// The encrypted key record failed to decode, or the password is wrong.
    #[error("malformed encrypted key record: {0}")]
    MalformedRecord(Nep2Error),

    #[error("account key is not available")]
    MissingKey,

    #[error("watch-only account has no spending contract")]
    WatchOnly,

    #[error("account json: missing field `{0}`")]
    MissingField(&'static str),

    #[error("account json: invalid field `{0}`")]
    InvalidField(&'static str),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid contract: {0}")]
    InvalidContract(&'static str),

    #[error("keystore passphrase required")]
    PassphraseRequired,

    #[error("invalid scrypt parameters: {0}")]
    InvalidScrypt(String),

    #[error("crypto error: {0}")]
    Crypto(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<Nep2Error> for WalletError {
    fn from(err: Nep2Error) -> Self {
        match err {
            Nep2Error::Scrypt(err) => Self::InvalidScrypt(err.to_string()),
            err => Self::MalformedRecord(err),
        }
    }
}

impl WalletError {
    /// NEP-2 cannot tell a wrong password from a corrupted record.
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, Self::MalformedRecord(_))
    }
}
