use std::{fmt, str::FromStr};

use alloy_primitives::{B256, hex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Well-known address of the system state object that carries the validator set.
pub const SYSTEM_STATE_OBJECT_ID: ObjectID = ObjectID(B256::with_last_byte(0x5));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectIDParseError {
    #[error("Object ID must be 0x-prefixed: {0}")]
    MissingPrefix(String),

    #[error("Object ID is longer than 32 bytes: {0}")]
    TooLong(String),

    #[error("Object ID is not valid hex: {0}")]
    InvalidHex(String),
}

/// [ObjectID] identifies an on-chain object. The short form `0x5` is accepted
/// and left-padded with zeros to 32 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectID(pub B256);

impl ObjectID {
    pub const fn new(bytes: B256) -> Self {
        Self(bytes)
    }

    /// Hex form with leading zero bytes stripped, e.g. `0x5`.
    pub fn to_short_string(&self) -> String {
        let encoded = hex::encode(self.0);
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{trimmed}")
        }
    }
}

impl FromStr for ObjectID {
    type Err = ObjectIDParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| ObjectIDParseError::MissingPrefix(s.to_string()))?;
        if digits.len() > 64 {
            return Err(ObjectIDParseError::TooLong(s.to_string()));
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|_| ObjectIDParseError::InvalidHex(s.to_string()))?;

        Ok(Self(B256::from(bytes)))
    }
}

impl fmt::Display for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for ObjectID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
