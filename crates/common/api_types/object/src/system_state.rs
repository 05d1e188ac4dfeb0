use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{
    object::{MoveObject, NarrowError},
    quoted::quoted_u64_opt,
};

pub const SYSTEM_STATE_TYPE: &str = "0x3::sui_system::SuiSystemState";
pub const VALIDATOR_SET_TYPE: &str = "0x3::validator_set::ValidatorSet";
pub const VALIDATOR_TYPE: &str = "0x3::validator::Validator";
pub const VALIDATOR_METADATA_TYPE: &str = "0x3::validator::ValidatorMetadata";

/// A Move struct as rendered by the node: its fully qualified type next to its
/// fields.
///
/// # Example
/// {
///   "type": "0x3::validator::Validator",
///   "fields": json!(T)
/// }
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveStruct<T> {
    #[serde(rename = "type")]
    pub type_: String,
    pub fields: T,
}

impl<T> MoveStruct<T> {
    pub fn new(type_: impl Into<String>, fields: T) -> Self {
        Self {
            type_: type_.into(),
            fields,
        }
    }
}

/// Fields of the system state object. Only what the explorer reads is modelled;
/// everything else on the object is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemState {
    #[serde(default, with = "quoted_u64_opt")]
    pub epoch: Option<u64>,
    pub validators: MoveStruct<ValidatorSetState>,
}

impl SystemState {
    pub fn from_move_object(move_object: &MoveObject) -> Result<Self, NarrowError> {
        move_object.decode_fields()
    }

    pub fn validator_set(&self) -> &ValidatorSetState {
        &self.validators.fields
    }

    pub fn into_validator_set(self) -> ValidatorSetState {
        self.validators.fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatorSetState {
    #[serde(with = "serde_utils::quoted_u256")]
    pub total_validator_stake: U256,
    #[serde(default)]
    pub active_validators: Vec<MoveStruct<Validator>>,
}

impl ValidatorSetState {
    pub fn new(total_validator_stake: U256, validators: Vec<Validator>) -> Self {
        Self {
            total_validator_stake,
            active_validators: validators
                .into_iter()
                .map(|validator| MoveStruct::new(VALIDATOR_TYPE, validator))
                .collect(),
        }
    }

    /// State used when no real validator set is available. A fresh value is
    /// built on every call.
    pub fn fallback() -> Self {
        Self {
            total_validator_stake: U256::ZERO,
            active_validators: Vec::new(),
        }
    }

    pub fn validators(&self) -> impl Iterator<Item = &Validator> {
        self.active_validators.iter().map(|validator| &validator.fields)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Validator {
    pub metadata: MoveStruct<ValidatorMetadata>,
    #[serde(with = "serde_utils::quoted_u256")]
    pub stake_amount: U256,
    #[serde(default, with = "quoted_u64_opt")]
    pub delegation_count: Option<u64>,
}

impl Validator {
    pub fn new(
        metadata: ValidatorMetadata,
        stake_amount: U256,
        delegation_count: Option<u64>,
    ) -> Self {
        Self {
            metadata: MoveStruct::new(VALIDATOR_METADATA_TYPE, metadata),
            stake_amount,
            delegation_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatorMetadata {
    /// Base64 of the UTF-8 encoded display name.
    pub name: String,
    #[serde(default)]
    pub net_address: String,
    pub pubkey_bytes: String,
    pub sui_address: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_system_state_fields() {
        let move_object = MoveObject {
            type_: SYSTEM_STATE_TYPE.to_string(),
            has_public_transfer: false,
            fields: json!({
                "epoch": "12",
                "storage_fund": "100",
                "validators": {
                    "type": VALIDATOR_SET_TYPE,
                    "fields": {
                        "total_validator_stake": "1000",
                        "quorum_stake_threshold": "667",
                        "active_validators": [{
                            "type": VALIDATOR_TYPE,
                            "fields": {
                                "stake_amount": "300",
                                "delegation_count": 4,
                                "metadata": {
                                    "type": VALIDATOR_METADATA_TYPE,
                                    "fields": {
                                        "name": "QnJhdm8=",
                                        "net_address": "/dns/bravo/tcp/8080",
                                        "pubkey_bytes": "AQID",
                                        "sui_address": "0xb0"
                                    }
                                }
                            }
                        }]
                    }
                }
            }),
        };

        let state = SystemState::from_move_object(&move_object).expect("decodes");
        assert_eq!(state.epoch, Some(12));

        let set = state.validator_set();
        assert_eq!(set.total_validator_stake, U256::from(1000u64));
        let validators: Vec<_> = set.validators().collect();
        assert_eq!(validators.len(), 1);
        assert_eq!(validators[0].stake_amount, U256::from(300u64));
        assert_eq!(validators[0].delegation_count, Some(4));
        assert_eq!(validators[0].metadata.fields.sui_address, "0xb0");
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let move_object = MoveObject {
            type_: "0x2::coin::Coin".to_string(),
            has_public_transfer: true,
            fields: json!({ "balance": "5" }),
        };

        assert!(matches!(
            SystemState::from_move_object(&move_object),
            Err(NarrowError::Fields { type_, .. }) if type_ == "0x2::coin::Coin"
        ));
    }

    #[test]
    fn test_fallback_is_fresh_and_empty() {
        let mut first = ValidatorSetState::fallback();
        first.total_validator_stake = U256::from(1u64);

        let second = ValidatorSetState::fallback();
        assert_eq!(second.total_validator_stake, U256::ZERO);
        assert!(second.active_validators.is_empty());
    }
}
