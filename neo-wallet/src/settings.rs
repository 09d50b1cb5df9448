// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::path::Path;

use neo_base::AddressVersion;
use serde::{Deserialize, Serialize};

use crate::{ScryptParameters, WalletError};

/// Wallet-level settings the accounts consume: the address version used to
/// render script hashes and the scrypt parameters used for NEP-2 keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletSettings {
    pub address_version: AddressVersion,
    pub scrypt: ScryptParameters,
}

impl WalletSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, WalletError> {
        let settings: WalletSettings =
            toml::from_str(content).map_err(|err| WalletError::Config(err.to_string()))?;
        settings.scrypt.validate()?;
        Ok(settings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            address_version = settings.address_version.0,
            scrypt = %settings.scrypt,
            "loaded wallet settings"
        );
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string(self).map_err(|err| WalletError::Config(err.to_string()))
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), WalletError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
