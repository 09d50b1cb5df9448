// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

use crate::hash::Sha256Twice;

const CHECKSUM_SIZE: usize = 4;

pub trait ToBase58Check {
    fn to_base58_check(&self) -> String;
}

impl<T: AsRef<[u8]>> ToBase58Check for T {
    fn to_base58_check(&self) -> String {
        let src = self.as_ref();
        let mut buf = Vec::with_capacity(src.len() + CHECKSUM_SIZE);
        buf.extend_from_slice(src);

        let check = src.sha256_twice();
        buf.extend_from_slice(&check[..CHECKSUM_SIZE]);

        bs58::encode(buf).into_string()
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, thiserror::Error)]
pub enum FromBase58CheckError {
    #[error("base58check: invalid character")]
    InvalidChar,

    #[error("base58check: invalid length")]
    InvalidLength,

    #[error("base58check: invalid checksum")]
    InvalidChecksum,
}

pub trait FromBase58Check: Sized {
    type Error;

    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;
}

impl FromBase58Check for Vec<u8> {
    type Error = FromBase58CheckError;

    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Vec<u8>, Self::Error> {
        let mut decoded = bs58::decode(src.as_ref())
            .into_vec()
            .map_err(|_err| FromBase58CheckError::InvalidChar)?;

        // at least one payload byte
        if decoded.len() <= CHECKSUM_SIZE {
            return Err(FromBase58CheckError::InvalidLength);
        }

        let payload_len = decoded.len() - CHECKSUM_SIZE;
        let check = decoded[..payload_len].sha256_twice();
        if check[..CHECKSUM_SIZE] != decoded[payload_len..] {
            return Err(FromBase58CheckError::InvalidChecksum);
        }

        decoded.truncate(payload_len);
        Ok(decoded)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_base58_check() {
        let encoded = b"hello world".to_base58_check();
        let decoded = Vec::from_base58_check(&encoded).expect("decode should be ok");
        assert_eq!(decoded.as_slice(), b"hello world");
    }

    #[test]
    fn test_base58_check_errors() {
        assert_eq!(
            Vec::from_base58_check("0OIl"),
            Err(FromBase58CheckError::InvalidChar)
        );
        assert_eq!(
            Vec::from_base58_check("2g"),
            Err(FromBase58CheckError::InvalidLength)
        );

        let mut encoded = b"neo".to_base58_check();
        let last = encoded.pop().expect("not empty");
        encoded.push(if last == '1' { '2' } else { '1' });
        assert!(Vec::from_base58_check(&encoded).is_err());
    }
}
