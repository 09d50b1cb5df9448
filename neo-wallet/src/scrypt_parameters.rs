// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Scrypt cost parameters consumed by NEP-2 key encryption.

use core::fmt;

use neo_crypto::scrypt::ScryptParams;
use serde::{Deserialize, Serialize};

use crate::WalletError;

/// Scrypt parameters for key derivation, as stored in a NEP-6 wallet.
///
/// The derived key length is fixed at 64 bytes by NEP-2 and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScryptParameters {
    /// CPU/memory cost parameter (N), a power of two greater than 1.
    pub n: u64,

    /// Block size parameter (r).
    pub r: u32,

    /// Parallelization parameter (p).
    pub p: u32,
}

impl ScryptParameters {
    /// Creates validated scrypt parameters.
    pub fn new(n: u64, r: u32, p: u32) -> Result<Self, WalletError> {
        let params = Self { n, r, p };
        params.validate()?;
        Ok(params)
    }

    /// The parameters NEP-6 wallets are created with.
    pub const fn default_nep6() -> Self {
        Self { n: 16384, r: 8, p: 8 }
    }

    /// Cheap parameters for tests and throwaway wallets.
    pub const fn fast() -> Self {
        Self { n: 1024, r: 1, p: 1 }
    }

    pub fn validate(&self) -> Result<(), WalletError> {
        if self.n <= 1 || !self.n.is_power_of_two() {
            return Err(WalletError::InvalidScrypt(format!(
                "N must be a power of 2 greater than 1, got {}",
                self.n
            )));
        }

        if self.r == 0 {
            return Err(WalletError::InvalidScrypt("r must be greater than 0".into()));
        }

        if self.p == 0 {
            return Err(WalletError::InvalidScrypt("p must be greater than 0".into()));
        }

        // scrypt requires log2(N) < 16 * r
        if u64::from(self.log_n()) >= 16 * u64::from(self.r) {
            return Err(WalletError::InvalidScrypt("N is too large for r".into()));
        }

        if self.memory_usage().is_none() {
            return Err(WalletError::InvalidScrypt("N * r is too large".into()));
        }

        if u64::from(self.p) * u64::from(self.r) >= 1 << 30 {
            return Err(WalletError::InvalidScrypt("p * r is too large".into()));
        }

        Ok(())
    }

    /// Bytes of memory the derivation needs, `128 * r * N`.
    pub fn memory_usage(&self) -> Option<u64> {
        self.n.checked_mul(u64::from(self.r))?.checked_mul(128)
    }

    #[inline]
    pub fn log_n(&self) -> u32 {
        self.n.trailing_zeros()
    }
}

impl Default for ScryptParameters {
    fn default() -> Self {
        Self::default_nep6()
    }
}

impl fmt::Display for ScryptParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N={}, r={}, p={}", self.n, self.r, self.p)
    }
}

impl From<ScryptParameters> for ScryptParams {
    fn from(value: ScryptParameters) -> Self {
        ScryptParams { n: value.n, r: value.r, p: value.p }
    }
}

impl From<ScryptParams> for ScryptParameters {
    fn from(value: ScryptParams) -> Self {
        Self { n: value.n, r: value.r, p: value.p }
    }
}
