// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use hex_literal::hex;
use neo_base::{encoding::ToBase58Check, AddressVersion};

use super::*;
use crate::{ecc256::PrivateKey, scrypt::ScryptParams};

const FAST: ScryptParams = ScryptParams { n: 16, r: 1, p: 1 };

fn vector_key() -> PrivateKey {
    PrivateKey::new(hex!("cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5"))
}

#[test]
fn test_nep2_roundtrip() {
    let key = vector_key();
    let nep2 = encrypt_nep2(&key, "Satoshi", AddressVersion::LEGACY, FAST)
        .expect("encrypt should be ok");
    assert!(nep2.starts_with("6P"));

    let decrypted = decrypt_nep2(&nep2, "Satoshi", AddressVersion::LEGACY, FAST)
        .expect("decrypt should be ok");
    assert_eq!(decrypted, key);
}

#[test]
fn test_nep2_deterministic() {
    let key = vector_key();
    let a = encrypt_nep2(&key, "pwd", AddressVersion::LEGACY, FAST).unwrap();
    let b = encrypt_nep2(&key, "pwd", AddressVersion::LEGACY, FAST).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_nep2_wrong_passphrase() {
    let nep2 = encrypt_nep2(&vector_key(), "right", AddressVersion::LEGACY, FAST).unwrap();
    let err = decrypt_nep2(&nep2, "wrong", AddressVersion::LEGACY, FAST)
        .expect_err("wrong passphrase must fail");
    assert!(matches!(err, Nep2Error::InvalidAddressHash | Nep2Error::InvalidPrivateKey));
    assert!(err.is_format_error());
}

#[test]
fn test_nep2_wrong_params() {
    let nep2 = encrypt_nep2(&vector_key(), "pwd", AddressVersion::LEGACY, FAST).unwrap();
    let other = ScryptParams { n: 32, r: 1, p: 1 };
    assert!(decrypt_nep2(&nep2, "pwd", AddressVersion::LEGACY, other).is_err());
}

#[test]
fn test_nep2_address_version_is_bound() {
    let nep2 = encrypt_nep2(&vector_key(), "pwd", AddressVersion::LEGACY, FAST).unwrap();
    let err = decrypt_nep2(&nep2, "pwd", AddressVersion::N3, FAST).unwrap_err();
    assert_eq!(err, Nep2Error::InvalidAddressHash);
}

#[test]
fn test_nep2_malformed() {
    let err = decrypt_nep2("not-base58-0OIl", "pwd", AddressVersion::LEGACY, FAST).unwrap_err();
    assert!(matches!(err, Nep2Error::InvalidBase58Check(_)));

    let short = [0x01u8, 0x42, 0xE0, 1, 2, 3, 4].to_base58_check();
    let err = decrypt_nep2(&short, "pwd", AddressVersion::LEGACY, FAST).unwrap_err();
    assert_eq!(err, Nep2Error::InvalidKeyLength(7));

    let mut bad_prefix = [0u8; 39];
    bad_prefix[0] = 0x01;
    bad_prefix[1] = 0x43;
    let err = decrypt_nep2(&bad_prefix.to_base58_check(), "pwd", AddressVersion::LEGACY, FAST)
        .unwrap_err();
    assert_eq!(err, Nep2Error::InvalidPrefix);
}

#[test]
fn test_nep2_invalid_params() {
    let bad = ScryptParams { n: 15, r: 1, p: 1 };
    let err = encrypt_nep2(&vector_key(), "pwd", AddressVersion::LEGACY, bad).unwrap_err();
    assert!(matches!(err, Nep2Error::Scrypt(_)));
    assert!(!err.is_format_error());
}

#[test]
fn test_nep2_zero_key() {
    let zero = PrivateKey::new([0u8; 32]);
    let err = encrypt_nep2(&zero, "pwd", AddressVersion::LEGACY, FAST).unwrap_err();
    assert_eq!(err, Nep2Error::InvalidPrivateKey);
}

#[test]
fn test_nep2_vector() {
    let params = ScryptParams { n: 16384, r: 8, p: 8 };
    let expected = "6PYVPVe1fQznphjbUxXP9KZJqPMVnVwCx5s5pr5axRJ8uHkMtZg97eT5kL";

    let nep2 = encrypt_nep2(&vector_key(), "TestingOneTwoThree", AddressVersion::LEGACY, params)
        .expect("encrypt should be ok");
    assert_eq!(nep2, expected);

    let key = decrypt_nep2(expected, "TestingOneTwoThree", AddressVersion::LEGACY, params)
        .expect("decrypt should be ok");
    assert_eq!(key, vector_key());
}
