// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::{encoding::ToBase58Check, AddressVersion};
use zeroize::Zeroizing;

use crate::{
    aes::{Aes256EcbCipher, AES256_KEY_SIZE},
    ecc256::{Keypair, PrivateKey, KEY_SIZE},
    scrypt::{DeriveScryptKey, ScryptParams},
};

use super::{address_hash, Nep2Error, DERIVED_KEY_SIZE, NEP2_KEY_SIZE, NEP2_PREFIX};

/// Encrypt a private key into a NEP-2 string.
///
/// NOTE: there is no normalization for the passphrase
pub fn encrypt_nep2(
    private: &PrivateKey,
    passphrase: impl AsRef<[u8]>,
    version: AddressVersion,
    params: ScryptParams,
) -> Result<String, Nep2Error> {
    let keypair = Keypair::from_private(private.clone())?;
    let hash = address_hash(&keypair.public_key, version);

    let derived = passphrase.derive_scrypt_key::<DERIVED_KEY_SIZE>(&hash, params)?;
    let (derived_half1, derived_half2) = derived.split_at(AES256_KEY_SIZE);

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    for ((out, byte), mask) in key.iter_mut().zip(private.as_be_bytes()).zip(derived_half1) {
        *out = byte ^ mask;
    }
    derived_half2.aes256_ecb_encrypt_aligned(key.as_mut_slice())?;

    let mut buf = Vec::with_capacity(NEP2_KEY_SIZE);
    buf.extend_from_slice(&NEP2_PREFIX);
    buf.extend_from_slice(&hash);
    buf.extend_from_slice(key.as_slice());

    Ok(buf.to_base58_check())
}
