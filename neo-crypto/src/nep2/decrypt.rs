// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::{encoding::FromBase58Check, AddressVersion};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{
    aes::{Aes256EcbCipher, AES256_KEY_SIZE},
    ecc256::{Keypair, PrivateKey, KEY_SIZE},
    scrypt::{DeriveScryptKey, ScryptParams},
};

use super::{address_hash, Nep2Error, DERIVED_KEY_SIZE, NEP2_KEY_SIZE, NEP2_PREFIX};

/// Decrypt a NEP-2 string back into the 32-byte private key.
///
/// A wrong passphrase yields [`Nep2Error::InvalidAddressHash`] (or, rarely,
/// [`Nep2Error::InvalidPrivateKey`]), the same as a corrupted record.
pub fn decrypt_nep2(
    nep2: &str,
    passphrase: impl AsRef<[u8]>,
    version: AddressVersion,
    params: ScryptParams,
) -> Result<PrivateKey, Nep2Error> {
    let data = Zeroizing::new(Vec::<u8>::from_base58_check(nep2)?);
    if data.len() != NEP2_KEY_SIZE {
        return Err(Nep2Error::InvalidKeyLength(data.len()));
    }
    if data[..3] != NEP2_PREFIX {
        return Err(Nep2Error::InvalidPrefix);
    }

    let expected_hash = &data[3..7];
    let derived = passphrase.derive_scrypt_key::<DERIVED_KEY_SIZE>(expected_hash, params)?;
    let (derived_half1, derived_half2) = derived.split_at(AES256_KEY_SIZE);

    let mut decrypted = Zeroizing::new([0u8; KEY_SIZE]);
    decrypted.copy_from_slice(&data[7..]);
    derived_half2.aes256_ecb_decrypt_aligned(decrypted.as_mut_slice())?;
    for (byte, mask) in decrypted.iter_mut().zip(derived_half1) {
        *byte ^= *mask;
    }

    let private = PrivateKey::new(*decrypted);
    let keypair = Keypair::from_private(private)?;

    let hash = address_hash(&keypair.public_key, version);
    if !bool::from(hash[..].ct_eq(expected_hash)) {
        return Err(Nep2Error::InvalidAddressHash);
    }

    Ok(keypair.private_key)
}
