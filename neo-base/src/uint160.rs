// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    encoding::{FromBase58Check, FromBase58CheckError, ToBase58Check},
    hash::{hash160, HASH160_SIZE},
};

const U160_LEN: usize = HASH160_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("address: invalid length {length}, expected 21 bytes (version + script hash)")]
    InvalidLength { length: usize },

    #[error("address: invalid version byte (expected 0x{expected:02X}, found 0x{found:02X})")]
    InvalidVersion { expected: u8, found: u8 },

    #[error("address: {0}")]
    Base58(#[from] FromBase58CheckError),

    #[error("address: invalid script hash hex")]
    InvalidHex,
}

/// Wrapper around the address version byte prefixed to a script hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressVersion(pub u8);

impl AddressVersion {
    /// Legacy Neo address version, addresses start with `A`.
    pub const LEGACY: Self = Self(0x17);

    /// Neo N3 address version, addresses start with `N`.
    pub const N3: Self = Self(0x35);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }
}

impl Default for AddressVersion {
    fn default() -> Self {
        Self::LEGACY
    }
}

/// 160-bit script hash, stored in the byte order produced by `hash160`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct UInt160([u8; U160_LEN]);

impl UInt160 {
    pub const LENGTH: usize = U160_LEN;
    pub const ZERO: Self = Self([0u8; U160_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; U160_LEN]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; U160_LEN] = slice.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Script hash of a contract script.
    #[inline]
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    #[inline]
    pub fn to_array(self) -> [u8; U160_LEN] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; U160_LEN] {
        &self.0
    }

    pub fn to_address(&self, version: AddressVersion) -> String {
        let mut payload = Vec::with_capacity(1 + U160_LEN);
        payload.push(version.0);
        payload.extend_from_slice(&self.0);
        payload.to_base58_check()
    }

    pub fn from_address(address: &str, version: AddressVersion) -> Result<Self, AddressError> {
        let decoded = Vec::<u8>::from_base58_check(address)?;
        if decoded.len() != 1 + U160_LEN {
            return Err(AddressError::InvalidLength { length: decoded.len() });
        }
        if decoded[0] != version.0 {
            return Err(AddressError::InvalidVersion { expected: version.0, found: decoded[0] });
        }
        let mut buf = [0u8; U160_LEN];
        buf.copy_from_slice(&decoded[1..]);
        Ok(Self(buf))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; U160_LEN]> for UInt160 {
    #[inline]
    fn from(value: [u8; U160_LEN]) -> Self {
        Self(value)
    }
}

/// Big-endian hex with `0x` prefix, the way script hashes are displayed.
impl Display for UInt160 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "0x{}", hex::encode(reversed))
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for UInt160 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let mut bytes = [0u8; U160_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressError::InvalidHex)?;
        bytes.reverse();
        Ok(Self(bytes))
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
