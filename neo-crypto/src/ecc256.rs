// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::fmt::{self, Debug, Display, Formatter};

use neo_base::UInt160;
use p256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey as P256PublicKey, SecretKey as P256SecretKey};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

pub const KEY_SIZE: usize = 32;
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// `PUSHBYTES33` followed by the compressed point.
const OP_PUSHBYTES33: u8 = 0x21;
const OP_CHECKSIG: u8 = 0xAC;

pub const SIGNATURE_SCRIPT_SIZE: usize = COMPRESSED_PUBLIC_KEY_SIZE + 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("ecc256: invalid private key")]
    InvalidPrivateKey,

    #[error("ecc256: invalid public key encoding")]
    InvalidPublicKey,
}

#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self { key: Zeroizing::new(bytes) }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; KEY_SIZE] = slice.try_into().map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self::new(bytes))
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }

    /// Lowercase hex of the big-endian scalar.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.key.as_slice()))
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct PublicKey {
    compressed: [u8; COMPRESSED_PUBLIC_KEY_SIZE],
}

impl PublicKey {
    /// Accepts compressed (`02`/`03`, 33 bytes) or uncompressed (`04`, 65 bytes)
    /// SEC1 encodings of a point on P-256. Compact and identity encodings are rejected.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        match (bytes.len(), bytes.first().copied()) {
            (COMPRESSED_PUBLIC_KEY_SIZE, Some(0x02 | 0x03))
            | (UNCOMPRESSED_PUBLIC_KEY_SIZE, Some(0x04)) => {}
            _ => return Err(KeyError::InvalidPublicKey),
        }

        let point = P256PublicKey::from_sec1_bytes(bytes).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self::from_p256(&point))
    }

    pub fn from_hex(value: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(value.trim()).map_err(|_| KeyError::InvalidPublicKey)?;
        Self::from_sec1_bytes(&bytes)
    }

    fn from_p256(point: &P256PublicKey) -> Self {
        let encoded = point.to_encoded_point(true);
        let mut compressed = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        compressed.copy_from_slice(encoded.as_bytes());
        Self { compressed }
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        self.compressed
    }

    /// Single-signature verification script for this key.
    pub fn signature_redeem_script(&self) -> [u8; SIGNATURE_SCRIPT_SIZE] {
        let mut script = [0u8; SIGNATURE_SCRIPT_SIZE];
        script[0] = OP_PUSHBYTES33;
        script[1..=COMPRESSED_PUBLIC_KEY_SIZE].copy_from_slice(&self.compressed);
        script[SIGNATURE_SCRIPT_SIZE - 1] = OP_CHECKSIG;
        script
    }

    #[inline]
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.signature_redeem_script())
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.compressed))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey").field("compressed", &hex::encode(self.compressed)).finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    pub fn from_private(private_key: PrivateKey) -> Result<Self, KeyError> {
        let secret = P256SecretKey::from_slice(private_key.as_be_bytes())
            .map_err(|_| KeyError::InvalidPrivateKey)?;
        let public_key = PublicKey::from_p256(&secret.public_key());
        Ok(Self { private_key, public_key })
    }

    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let secret = P256SecretKey::random(rng);
        let private_key = PrivateKey::new(secret.to_bytes().into());
        let public_key = PublicKey::from_p256(&secret.public_key());
        Self { private_key, public_key }
    }

    #[inline]
    pub fn script_hash(&self) -> UInt160 {
        self.public_key.script_hash()
    }
}

impl Debug for Keypair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("private_key", &self.private_key)
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use hex_literal::hex;
    use rand::rngs::OsRng;

    use super::*;

    #[test]
    fn test_keypair_from_private() {
        let private = PrivateKey::new(hex!(
            "c37b8b0c7c0b8c1fe4f602c3f0f2f3536bc3a1ad9ecf15ff86f9fee9b7dd2f75"
        ));
        let keypair = Keypair::from_private(private.clone()).expect("keypair should be ok");
        assert_eq!(keypair.private_key, private);

        let compressed = keypair.public_key.to_compressed();
        assert!(compressed[0] == 0x02 || compressed[0] == 0x03);

        let parsed = PublicKey::from_hex(&keypair.public_key.to_string()).expect("parse should be ok");
        assert_eq!(parsed, keypair.public_key);
    }

    #[test]
    fn test_invalid_private_key() {
        assert_eq!(
            Keypair::from_private(PrivateKey::new([0u8; KEY_SIZE])).unwrap_err(),
            KeyError::InvalidPrivateKey
        );
        assert!(PrivateKey::from_slice(&[1u8; 31]).is_err());
    }

    #[test]
    fn test_invalid_public_key() {
        assert!(PublicKey::from_hex("02").is_err());
        assert!(PublicKey::from_hex("zz").is_err());
        assert!(PublicKey::from_sec1_bytes(&[0x05; 33]).is_err());
        assert!(PublicKey::from_sec1_bytes(&[0x00]).is_err());
    }

    #[test]
    fn test_public_key_sec1_tags() {
        let compressed = hex!("026241e7e26b38bb7154b8ad49458b97fb1c4797443dc921c5ca5774f511a2bbfc");
        let key = PublicKey::from_sec1_bytes(&compressed).expect("compressed key should be ok");
        assert_eq!(key.to_compressed(), compressed);

        let mut uncompressed = [0u8; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        uncompressed[0] = 0x04;
        uncompressed[1..33].copy_from_slice(&compressed[1..]);
        uncompressed[33..].copy_from_slice(&hex!(
            "9714669225b6684976776230793f0950f22557ae25976a0081bfa58319574084"
        ));
        assert_eq!(PublicKey::from_sec1_bytes(&uncompressed), Ok(key));

        // same x coordinate, compact tag
        let mut compact = compressed;
        compact[0] = 0x05;
        assert_eq!(PublicKey::from_sec1_bytes(&compact), Err(KeyError::InvalidPublicKey));

        // uncompressed tag on a compressed length and vice versa
        let mut mislabeled = compressed;
        mislabeled[0] = 0x04;
        assert!(PublicKey::from_sec1_bytes(&mislabeled).is_err());
        uncompressed[0] = 0x02;
        assert!(PublicKey::from_sec1_bytes(&uncompressed).is_err());
    }

    #[test]
    fn test_signature_redeem_script() {
        let keypair = Keypair::generate(&mut OsRng);
        let script = keypair.public_key.signature_redeem_script();
        assert_eq!(script[0], 0x21);
        assert_eq!(&script[1..34], keypair.public_key.to_compressed().as_slice());
        assert_eq!(script[34], 0xAC);
        assert_eq!(keypair.script_hash(), UInt160::from_script(&script));
    }

    #[test]
    fn test_private_key_is_redacted() {
        let keypair = Keypair::generate(&mut OsRng);
        let debug = format!("{:?}", keypair);
        assert!(!debug.contains(keypair.private_key.to_hex().as_str()));
        assert!(debug.contains("***"));
    }
}
