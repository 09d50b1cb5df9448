// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! NEP-2 passphrase-protected private keys.
//!
//! Layout of the Base58Check payload (39 bytes):
//! `0x01 0x42 0xE0 || address_hash[4] || AES256-ECB(key ^ derived[..32], derived[32..])`,
//! where `derived = scrypt(passphrase, address_hash, n, r, p, 64)` and
//! `address_hash = sha256(sha256(address))[..4]`.

mod decrypt;
mod encrypt;
mod error;
#[cfg(test)]
mod tests;

pub use decrypt::decrypt_nep2;
pub use encrypt::encrypt_nep2;
pub use error::Nep2Error;

pub(crate) const NEP2_PREFIX: [u8; 3] = [0x01, 0x42, 0xE0];
pub(crate) const NEP2_KEY_SIZE: usize = 39;
pub(crate) const DERIVED_KEY_SIZE: usize = 64;

pub(crate) fn address_hash(
    public_key: &crate::ecc256::PublicKey,
    version: neo_base::AddressVersion,
) -> [u8; 4] {
    use neo_base::hash::Sha256Twice;

    let address = public_key.script_hash().to_address(version);
    let hash = address.as_bytes().sha256_twice();
    let mut out = [0u8; 4];
    out.copy_from_slice(&hash[..4]);
    out
}
