// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use core::{fmt, str::FromStr};

use neo_base::UInt160;
use neo_crypto::ecc256::PublicKey;
use serde_json::{json, Map, Value};

use crate::WalletError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContractParameterType {
    Signature = 0x00,
    Boolean = 0x01,
    Integer = 0x02,
    Hash160 = 0x03,
    Hash256 = 0x04,
    ByteArray = 0x05,
    PublicKey = 0x06,
    String = 0x07,
    Array = 0x10,
    InteropInterface = 0xF0,
    Void = 0xFF,
}

impl ContractParameterType {
    pub fn name(self) -> &'static str {
        use ContractParameterType::*;
        match self {
            Signature => "Signature",
            Boolean => "Boolean",
            Integer => "Integer",
            Hash160 => "Hash160",
            Hash256 => "Hash256",
            ByteArray => "ByteArray",
            PublicKey => "PublicKey",
            String => "String",
            Array => "Array",
            InteropInterface => "InteropInterface",
            Void => "Void",
        }
    }
}

impl From<ContractParameterType> for u8 {
    fn from(value: ContractParameterType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ContractParameterType {
    type Error = WalletError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use ContractParameterType::*;
        let ty = match value {
            0x00 => Signature,
            0x01 => Boolean,
            0x02 => Integer,
            0x03 => Hash160,
            0x04 => Hash256,
            0x05 => ByteArray,
            0x06 => PublicKey,
            0x07 => String,
            0x10 => Array,
            0xF0 => InteropInterface,
            0xFF => Void,
            _ => return Err(WalletError::InvalidContract("unknown parameter type")),
        };
        Ok(ty)
    }
}

impl FromStr for ContractParameterType {
    type Err = WalletError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        use ContractParameterType::*;
        [
            Signature,
            Boolean,
            Integer,
            Hash160,
            Hash256,
            ByteArray,
            PublicKey,
            String,
            Array,
            InteropInterface,
            Void,
        ]
        .into_iter()
        .find(|ty| ty.name() == value)
        .ok_or(WalletError::InvalidContract("unknown parameter type"))
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The spending contract attached to an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    script: Vec<u8>,
    parameter_list: Vec<ContractParameterType>,
    parameter_names: Vec<String>,
    deployed: bool,
}

impl Contract {
    pub fn new(
        script: Vec<u8>,
        parameter_list: Vec<ContractParameterType>,
        parameter_names: Vec<String>,
        deployed: bool,
    ) -> Result<Self, WalletError> {
        if parameter_list.len() != parameter_names.len() {
            return Err(WalletError::InvalidContract("parameter names do not match types"));
        }
        Ok(Self { script, parameter_list, parameter_names, deployed })
    }

    /// Single-signature contract: `PUSHBYTES33 <pubkey> CHECKSIG`.
    pub fn signature(public_key: &PublicKey) -> Self {
        Self {
            script: public_key.signature_redeem_script().to_vec(),
            parameter_list: vec![ContractParameterType::Signature],
            parameter_names: vec!["signature".to_string()],
            deployed: false,
        }
    }

    #[inline]
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    #[inline]
    pub fn parameter_list(&self) -> &[ContractParameterType] {
        &self.parameter_list
    }

    #[inline]
    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    #[inline]
    pub fn deployed(&self) -> bool {
        self.deployed
    }

    pub fn script_hash(&self) -> UInt160 {
        UInt160::from_script(&self.script)
    }

    pub fn to_json(&self) -> Value {
        let parameters = self
            .parameter_names
            .iter()
            .zip(&self.parameter_list)
            .map(|(name, ty)| json!({ "name": name, "type": ty.name() }))
            .collect::<Vec<_>>();

        let mut obj = Map::new();
        obj.insert("script".into(), Value::String(hex::encode(&self.script)));
        obj.insert("parameters".into(), Value::Array(parameters));
        obj.insert("deployed".into(), Value::Bool(self.deployed));
        Value::Object(obj)
    }

    pub fn from_json(json: &Value) -> Result<Self, WalletError> {
        let obj = json.as_object().ok_or(WalletError::InvalidContract("expected an object"))?;

        let script = obj
            .get("script")
            .and_then(Value::as_str)
            .ok_or(WalletError::InvalidContract("missing script"))?;
        let script =
            hex::decode(script).map_err(|_| WalletError::InvalidContract("invalid script hex"))?;

        let parameters = obj
            .get("parameters")
            .and_then(Value::as_array)
            .ok_or(WalletError::InvalidContract("missing parameters"))?;

        let mut parameter_list = Vec::with_capacity(parameters.len());
        let mut parameter_names = Vec::with_capacity(parameters.len());
        for param in parameters {
            let name = param
                .get("name")
                .and_then(Value::as_str)
                .ok_or(WalletError::InvalidContract("missing parameter name"))?;
            let ty: ContractParameterType = match param.get("type") {
                Some(Value::String(ty)) => ty.parse::<ContractParameterType>()?,
                Some(Value::Number(n)) => {
                    let value = n
                        .as_u64()
                        .and_then(|n| u8::try_from(n).ok())
                        .ok_or(WalletError::InvalidContract("unknown parameter type"))?;
                    ContractParameterType::try_from(value)?
                }
                _ => return Err(WalletError::InvalidContract("missing parameter type")),
            };
            parameter_names.push(name.to_string());
            parameter_list.push(ty);
        }

        let deployed = match obj.get("deployed") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(deployed)) => *deployed,
            Some(_) => return Err(WalletError::InvalidContract("invalid deployed flag")),
        };

        Ok(Self { script, parameter_list, parameter_names, deployed })
    }
}
