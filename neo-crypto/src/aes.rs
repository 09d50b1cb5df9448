// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

pub const AES256_KEY_SIZE: usize = 32;

const AES_BLOCK_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcbError {
    #[error("aes-ecb: invalid key length")]
    InvalidKeyLength,

    #[error("aes-ecb: invalid data length")]
    InvalidDataLength,
}

/// AES-256 in ECB mode without padding; `self` is the 32-byte key.
pub trait Aes256EcbCipher {
    fn aes256_ecb_encrypt_aligned(&self, buf: &mut [u8]) -> Result<(), EcbError>;

    fn aes256_ecb_decrypt_aligned(&self, buf: &mut [u8]) -> Result<(), EcbError>;
}

impl Aes256EcbCipher for [u8] {
    fn aes256_ecb_encrypt_aligned(&self, data: &mut [u8]) -> Result<(), EcbError> {
        let cipher = new_cipher(self, data)?;
        data.chunks_mut(AES_BLOCK_SIZE)
            .map(GenericArray::from_mut_slice)
            .for_each(|block| cipher.encrypt_block(block));
        Ok(())
    }

    fn aes256_ecb_decrypt_aligned(&self, data: &mut [u8]) -> Result<(), EcbError> {
        let cipher = new_cipher(self, data)?;
        data.chunks_mut(AES_BLOCK_SIZE)
            .map(GenericArray::from_mut_slice)
            .for_each(|block| cipher.decrypt_block(block));
        Ok(())
    }
}

fn new_cipher(key: &[u8], data: &[u8]) -> Result<Aes256, EcbError> {
    if data.len() % AES_BLOCK_SIZE != 0 {
        return Err(EcbError::InvalidDataLength);
    }
    Aes256::new_from_slice(key).map_err(|_| EcbError::InvalidKeyLength)
}
