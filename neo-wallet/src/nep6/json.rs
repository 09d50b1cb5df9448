// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use neo_base::{AddressVersion, UInt160};
use neo_crypto::ecc256::{Keypair, PublicKey};
use serde_json::{Map, Value};

use super::{KeyState, Nep6Account, SealedKey};
use crate::{Contract, WalletAccount, WalletError};

type Object = Map<String, Value>;

fn required<'a>(obj: &'a Object, field: &'static str) -> Result<&'a Value, WalletError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(WalletError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn required_str<'a>(obj: &'a Object, field: &'static str) -> Result<&'a str, WalletError> {
    required(obj, field)?.as_str().ok_or(WalletError::InvalidField(field))
}

fn required_bool(obj: &Object, field: &'static str) -> Result<bool, WalletError> {
    required(obj, field)?.as_bool().ok_or(WalletError::InvalidField(field))
}

fn optional_str(obj: &Object, field: &'static str) -> Result<Option<String>, WalletError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(WalletError::InvalidField(field)),
    }
}

fn optional<'a>(obj: &'a Object, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|value| !value.is_null())
}

fn nullable<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

/// Fields shared by the persisted and the public record.
struct Common {
    script_hash: UInt160,
    label: Option<String>,
    is_default: bool,
    lock: bool,
    contract: Option<Contract>,
    extra: Option<Value>,
}

impl Common {
    fn parse(obj: &Object, version: AddressVersion) -> Result<Self, WalletError> {
        let address = required_str(obj, "address")?;
        let script_hash = UInt160::from_address(address, version)
            .map_err(|err| WalletError::InvalidAddress(err.to_string()))?;

        let contract = optional(obj, "contract").map(Contract::from_json).transpose()?;
        Ok(Self {
            script_hash,
            label: optional_str(obj, "label")?,
            is_default: required_bool(obj, "isDefault")?,
            lock: required_bool(obj, "lock")?,
            contract,
            extra: optional(obj, "extra").cloned(),
        })
    }

    fn into_account(self, version: AddressVersion, state: KeyState) -> Nep6Account {
        let mut account = Nep6Account::with_state(self.script_hash, version, state);
        account.label = self.label;
        account.is_default = self.is_default;
        account.lock = self.lock;
        account.contract = self.contract;
        account.extra = self.extra;
        account
    }
}

impl Nep6Account {
    fn common_json(&self, key_field: &'static str, key: Value) -> Value {
        let mut obj = Object::new();
        obj.insert("address".into(), Value::String(self.address()));
        obj.insert("label".into(), nullable(self.label.clone()));
        obj.insert("isDefault".into(), Value::Bool(self.is_default));
        obj.insert("lock".into(), Value::Bool(self.lock));
        obj.insert(key_field.into(), key);
        obj.insert("contract".into(), nullable(self.contract.as_ref().map(Contract::to_json)));
        obj.insert("extra".into(), self.extra.clone().unwrap_or(Value::Null));
        Value::Object(obj)
    }

    /// The persisted NEP-6 record; `key` is the NEP-2 string or null.
    pub fn to_json(&self) -> Value {
        self.common_json("key", nullable(self.nep2_key()))
    }

    /// Loads a persisted NEP-6 record. The key stays encrypted until first use.
    pub fn from_json(json: &Value, version: AddressVersion) -> Result<Self, WalletError> {
        let obj = json.as_object().ok_or(WalletError::InvalidField("account"))?;
        let common = Common::parse(obj, version)?;
        let state = match optional_str(obj, "key")? {
            Some(nep2) => KeyState::Encrypted { nep2 },
            None => KeyState::Absent,
        };

        let account = common.into_account(version, state);
        tracing::debug!(
            address = %account.address(),
            key = account.state.name(),
            watch_only = account.watch_only(),
            "loaded account"
        );
        Ok(account)
    }

    /// Loads a persisted NEP-6 record for which the wallet already holds the plaintext
    /// key. The account starts decrypted and keeps the NEP-2 record, which is opened
    /// only when a password is first checked against it.
    pub fn from_json_with_key(
        json: &Value,
        version: AddressVersion,
        key: Keypair,
    ) -> Result<Self, WalletError> {
        let obj = json.as_object().ok_or(WalletError::InvalidField("account"))?;
        let common = Common::parse(obj, version)?;
        let sealed = optional_str(obj, "key")?.map(SealedKey::unopened);

        let account = common.into_account(version, KeyState::Decrypted { key, sealed });
        tracing::debug!(
            address = %account.address(),
            record = account.nep2_key().is_some(),
            "loaded account with supplied key"
        );
        Ok(account)
    }

    pub(super) fn public_json(&self) -> Result<Value, WalletError> {
        let public = self.public_key().ok_or(WalletError::MissingKey)?;
        Ok(self.common_json("public", Value::String(public.to_string())))
    }

    /// Loads a record produced by [`WalletAccount::to_public_json`].
    pub fn from_public_json(json: &Value, version: AddressVersion) -> Result<Self, WalletError> {
        let obj = json.as_object().ok_or(WalletError::InvalidField("account"))?;
        let common = Common::parse(obj, version)?;
        let public = PublicKey::from_hex(required_str(obj, "public")?)
            .map_err(|_| WalletError::InvalidField("public"))?;

        Ok(common.into_account(version, KeyState::PublicOnly(public)))
    }
}
