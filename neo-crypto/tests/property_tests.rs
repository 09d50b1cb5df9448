//! Property-based tests for neo-crypto
//!
//! These tests use proptest to verify:
//! - NEP-2 records decrypt back to the key they were made from
//! - AES-256-ECB decrypt inverts encrypt
//! - Key pairs agree with their signature script hash

use neo_base::{hash::hash160, AddressVersion};
use neo_crypto::{
    aes::Aes256EcbCipher,
    ecc256::{Keypair, PrivateKey},
    nep2::{decrypt_nep2, encrypt_nep2},
    scrypt::ScryptParams,
};
use proptest::prelude::*;

const FAST: ScryptParams = ScryptParams { n: 16, r: 1, p: 1 };

fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>()
        .prop_filter_map("not a valid scalar", |bytes| Keypair::from_private(PrivateKey::new(bytes)).ok())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_nep2_round_trip(key in keypair(), passphrase in ".{0,16}") {
        let nep2 = encrypt_nep2(&key.private_key, &passphrase, AddressVersion::LEGACY, FAST).unwrap();
        prop_assert_eq!(nep2.len(), 58);

        let decrypted = decrypt_nep2(&nep2, &passphrase, AddressVersion::LEGACY, FAST).unwrap();
        prop_assert_eq!(decrypted, key.private_key);
    }

    #[test]
    fn test_aes_ecb_round_trip(key in any::<[u8; 32]>(), blocks in proptest::collection::vec(any::<[u8; 16]>(), 1..4)) {
        let plain: Vec<u8> = blocks.concat();
        let mut data = plain.clone();

        key.aes256_ecb_encrypt_aligned(&mut data).unwrap();
        prop_assert_ne!(&data, &plain);
        key.aes256_ecb_decrypt_aligned(&mut data).unwrap();
        prop_assert_eq!(data, plain);
    }

    #[test]
    fn test_script_hash_matches_redeem_script(key in keypair()) {
        let script = key.public_key.signature_redeem_script();
        prop_assert_eq!(key.script_hash().to_array(), hash160(script));
    }
}
