// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! NEP-6 wallet accounts for Neo.
//!
//! An account stores an address, spending-lock metadata, an optional contract
//! and key material that is either plaintext, a NEP-2 record decrypted lazily
//! on first use, or absent (watch-only).

mod account;
mod cipher;
mod contract;
mod error;
mod nep6;
mod scrypt_parameters;
mod settings;

pub use account::{UnlockContext, WalletAccount, WalletSession};
pub use cipher::{KeyCipher, Nep2Cipher};
pub use contract::{Contract, ContractParameterType};
pub use error::WalletError;
pub use nep6::Nep6Account;
pub use scrypt_parameters::ScryptParameters;
pub use settings::WalletSettings;
