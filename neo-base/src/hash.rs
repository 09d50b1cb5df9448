// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use sha2::Digest;

pub const HASH160_SIZE: usize = 20;

pub trait Sha256 {
    fn sha256(&self) -> [u8; 32];
}

impl<T: ?Sized + AsRef<[u8]>> Sha256 for T {
    #[inline]
    fn sha256(&self) -> [u8; 32] {
        let mut h = sha2::Sha256::new();
        h.update(self.as_ref());
        h.finalize().into()
    }
}

pub trait Sha256Twice {
    fn sha256_twice(&self) -> [u8; 32];
}

impl<T: ?Sized + AsRef<[u8]>> Sha256Twice for T {
    #[inline]
    fn sha256_twice(&self) -> [u8; 32] {
        self.sha256().sha256()
    }
}

pub trait Ripemd160 {
    fn ripemd160(&self) -> [u8; 20];
}

impl<T: ?Sized + AsRef<[u8]>> Ripemd160 for T {
    #[inline]
    fn ripemd160(&self) -> [u8; 20] {
        let mut h = ripemd::Ripemd160::new();
        h.update(self.as_ref());
        h.finalize().into()
    }
}

/// `RIPEMD160(SHA256(data))`, the script hash function.
#[inline]
pub fn hash160<T: AsRef<[u8]>>(data: T) -> [u8; HASH160_SIZE] {
    data.sha256().ripemd160()
}

#[inline]
pub fn double_sha256<T: AsRef<[u8]>>(data: T) -> [u8; 32] {
    data.sha256_twice()
}

#[cfg(test)]
mod test {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_sha256() {
        assert_eq!(
            b"abc".sha256(),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn test_sha256_twice() {
        assert_eq!(b"hello".sha256_twice(), b"hello".sha256().sha256());
        assert_eq!(double_sha256(b"hello"), b"hello".sha256_twice());
    }

    #[test]
    fn test_ripemd160() {
        assert_eq!(b"abc".ripemd160(), hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"));
    }

    #[test]
    fn test_hash_unsized_slice() {
        let data = *b"abcdef";
        let head: &[u8] = &data[..3];

        assert_eq!(data[..3].sha256(), b"abc".sha256());
        assert_eq!(data[..3].sha256_twice(), b"abc".sha256_twice());
        assert_eq!(data[..3].ripemd160(), b"abc".ripemd160());
        assert_eq!(head.sha256_twice(), double_sha256(b"abc"));
        assert_eq!("abc".sha256(), b"abc".sha256());
    }

    #[test]
    fn test_hash160() {
        assert_eq!(hash160(b"abc"), b"abc".sha256().ripemd160());
    }
}
