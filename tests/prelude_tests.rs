use hex_literal::hex;
use neo_account::prelude::*;
use serde_json::json;

#[test]
fn test_prelude_account_flow() {
    let key = Keypair::from_private(PrivateKey::new(hex!(
        "cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5"
    )))
    .unwrap();

    let account = Nep6Account::from_keypair(key, AddressVersion::LEGACY);
    assert_eq!(account.address(), "AStZHy8E6StCqYQbzMqi4poH7YNDHQKxvt");
    assert_eq!(account.wif().unwrap().as_str(), "L44B5gGEpqEDRS9vVPz7QT35jcBG2r3CZwSwQ4fCewXAhAhqGVpP");

    // no password was given, so the persisted record carries no key
    let record = account.to_json();
    assert_eq!(record["key"], json!(null));
    let loaded = Nep6Account::from_json(&record, AddressVersion::LEGACY).unwrap();
    assert!(!loaded.has_key());
    assert!(!loaded.watch_only());
}

#[test]
fn test_custom_cipher_through_trait_object() {
    struct Rot13;

    impl KeyCipher for Rot13 {
        fn decrypt_key(
            &self,
            _record: &str,
            _password: &str,
            _scrypt: &ScryptParameters,
        ) -> Result<PrivateKey, WalletError> {
            Err(WalletError::Crypto("not a real cipher"))
        }

        fn encrypt_key(
            &self,
            _key: &PrivateKey,
            _password: &str,
            _scrypt: &ScryptParameters,
        ) -> Result<String, WalletError> {
            Ok("rot13".into())
        }
    }

    let key = Keypair::generate(&mut rand::rngs::OsRng);
    let account = Nep6Account::with_encrypted_key_using(
        std::sync::Arc::new(Rot13),
        key.script_hash(),
        AddressVersion::N3,
        key,
        "pwd",
        &ScryptParameters::fast(),
    )
    .unwrap();

    assert_eq!(account.nep2_key(), Some("rot13"));
    assert!(account.address().starts_with('N'));
    let accounts: Vec<Box<dyn WalletAccount>> = vec![Box::new(account)];
    assert!(accounts.iter().all(|account| account.has_key()));
}
