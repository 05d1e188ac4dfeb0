use alloy_primitives::U256;
use base64::{Engine, engine::general_purpose::STANDARD};
use explorer_api_types_object::system_state::{Validator, ValidatorSetState};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    error::{DecodeError, TableError},
    stake::stake_percent,
};

/// Display model of a single validator, rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorView {
    pub name: String,
    pub address: String,
    pub pubkey_bytes: String,
    #[serde(serialize_with = "serialize_u256")]
    pub stake: U256,
    pub stake_percent: Decimal,
    pub delegation_count: u64,
}

fn serialize_u256<S: serde::Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

/// Decode an on-chain validator name: base64 payload holding UTF-8 bytes.
pub fn decode_name(raw_name: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(raw_name)?;
    Ok(String::from_utf8(bytes)?)
}

/// Project raw validator records into display views. Stake shares are taken
/// against `total_stake`. Fails on the first name that does not decode.
pub fn project<'a>(
    validators: impl IntoIterator<Item = &'a Validator>,
    total_stake: U256,
) -> Result<Vec<ValidatorView>, TableError> {
    validators
        .into_iter()
        .map(|validator| -> Result<ValidatorView, TableError> {
            let metadata = &validator.metadata.fields;
            Ok(ValidatorView {
                name: decode_name(&metadata.name)?,
                address: metadata.sui_address.clone(),
                pubkey_bytes: metadata.pubkey_bytes.clone(),
                stake: validator.stake_amount,
                stake_percent: stake_percent(validator.stake_amount, total_stake),
                delegation_count: validator.delegation_count.unwrap_or(0),
            })
        })
        .collect()
}

/// [project] over the active set of `state`.
pub fn project_state(state: &ValidatorSetState) -> Result<Vec<ValidatorView>, TableError> {
    project(state.validators(), state.total_validator_stake)
}
