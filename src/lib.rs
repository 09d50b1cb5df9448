//! # neo-account: NEP-6 wallet accounts for Neo
//!
//! A wallet account stores an address, its spending-lock metadata, an optional
//! spending contract and key material in one of three shapes:
//! - a plaintext key pair held in memory,
//! - a NEP-2 encrypted record, decrypted lazily and at most once,
//! - nothing at all (watch-only).
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_account::prelude::*;
//!
//! # fn main() -> Result<(), WalletError> {
//! let scrypt = ScryptParameters::fast();
//! let key = Keypair::generate(&mut rand::rngs::OsRng);
//! let contract = Contract::signature(&key.public_key);
//!
//! let mut account = Nep6Account::with_encrypted_key(
//!     contract.script_hash(),
//!     AddressVersion::LEGACY,
//!     key,
//!     "password",
//!     &scrypt,
//! )?;
//! account.set_contract(Some(contract));
//!
//! // persist, then load again: the key stays encrypted until first use
//! let record = account.to_json();
//! let mut loaded = Nep6Account::from_json(&record, AddressVersion::LEGACY)?;
//! assert!(!loaded.is_decrypted());
//!
//! let session = WalletSession::new("password", scrypt);
//! assert!(loaded.get_key(&session)?.is_some());
//! assert_eq!(loaded.wif()?.as_str(), account.wif()?.as_str());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`base`]: hashing, Base58Check, WIF and script-hash addresses
//! - [`crypto`]: P-256 key pairs, scrypt, AES-256-ECB and NEP-2
//! - [`wallet`]: the account trait, the NEP-6 account and its collaborators

pub use neo_base as base;
pub use neo_crypto as crypto;
pub use neo_wallet as wallet;

/// Commonly used types for working with accounts.
pub mod prelude {
    pub use neo_base::{AddressVersion, UInt160};
    pub use neo_crypto::ecc256::{Keypair, PrivateKey, PublicKey};
    pub use neo_wallet::{
        Contract, ContractParameterType, KeyCipher, Nep2Cipher, Nep6Account, ScryptParameters,
        UnlockContext, WalletAccount, WalletError, WalletSession, WalletSettings,
    };
}
