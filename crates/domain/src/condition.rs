use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::enums::{EvaluationMethod, GatingType, TokenType};
use crate::{validation, Canonical, Validity, ZERO_ADDRESS};

/// Token-gating condition attached to an offer. The default condition
/// (method `None`, zero address, zero bounds) gates nothing and is what an
/// unconditional receipt carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub method: u8,
    pub token_type: u8,
    pub token_address: String,
    pub gating_type: u8,
    pub min_token_id: String,
    pub threshold: String,
    pub max_commits: String,
    pub max_token_id: String,
}

impl Default for Condition {
    fn default() -> Self {
        Self {
            method: EvaluationMethod::None.code(),
            token_type: TokenType::FungibleToken.code(),
            token_address: ZERO_ADDRESS.to_owned(),
            gating_type: GatingType::PerAddress.code(),
            min_token_id: "0".to_owned(),
            threshold: "0".to_owned(),
            max_commits: "0".to_owned(),
            max_token_id: "0".to_owned(),
        }
    }
}

impl Condition {
    pub fn method_is_valid(&self) -> bool {
        EvaluationMethod::is_member(self.method)
    }

    pub fn token_type_is_valid(&self) -> bool {
        TokenType::is_member(self.token_type)
    }

    pub fn token_address_is_valid(&self) -> bool {
        validation::address_string(&self.token_address)
    }

    pub fn gating_type_is_valid(&self) -> bool {
        GatingType::is_member(self.gating_type)
    }

    pub fn min_token_id_is_valid(&self) -> bool {
        validation::uint_string(&self.min_token_id)
    }

    pub fn threshold_is_valid(&self) -> bool {
        validation::uint_string(&self.threshold)
    }

    pub fn max_commits_is_valid(&self) -> bool {
        validation::uint_string(&self.max_commits)
    }

    pub fn max_token_id_is_valid(&self) -> bool {
        validation::uint_string(&self.max_token_id)
    }
}

impl Validity for Condition {
    fn is_valid(&self) -> bool {
        self.method_is_valid()
            && self.token_type_is_valid()
            && self.token_address_is_valid()
            && self.gating_type_is_valid()
            && self.min_token_id_is_valid()
            && self.threshold_is_valid()
            && self.max_commits_is_valid()
            && self.max_token_id_is_valid()
    }
}

impl Canonical for Condition {}

impl Wire for Condition {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![
            WireValue::uint_code(self.method),
            WireValue::uint_code(self.token_type),
            WireValue::address_str(&self.token_address)?,
            WireValue::uint_code(self.gating_type),
            WireValue::uint_str(&self.min_token_id)?,
            WireValue::uint_str(&self.threshold)?,
            WireValue::uint_str(&self.max_commits)?,
            WireValue::uint_str(&self.max_token_id)?,
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [method, token_type, token_address, gating_type, min_token_id, threshold, max_commits, max_token_id] =
            value.into_tuple()?;
        Ok(Self {
            method: method.into_enum_code()?,
            token_type: token_type.into_enum_code()?,
            token_address: token_address.into_address_string()?,
            gating_type: gating_type.into_enum_code()?,
            min_token_id: min_token_id.into_uint_string()?,
            threshold: threshold.into_uint_string()?,
            max_commits: max_commits.into_uint_string()?,
            max_token_id: max_token_id.into_uint_string()?,
        })
    }
}
