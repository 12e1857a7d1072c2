use serde::{Deserialize, Serialize};

use alloy_primitives::U256;

use bazaar_wire::{Wire, WireError, WireValue};

use crate::enums::TokenType;
use crate::{validation, Canonical, Validity};

/// Record of a twin transfer performed when a voucher was redeemed.
///
/// `token_id` may be the empty string for fungible twins, where no token id
/// applies; empty wires as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwinReceipt {
    pub twin_id: String,
    pub token_id: String,
    pub amount: String,
    pub token_address: String,
    pub token_type: u8,
}

impl TwinReceipt {
    pub fn twin_id_is_valid(&self) -> bool {
        validation::uint_string(&self.twin_id)
    }

    pub fn token_id_is_valid(&self) -> bool {
        self.token_id.is_empty() || validation::uint_string(&self.token_id)
    }

    pub fn amount_is_valid(&self) -> bool {
        validation::uint_string(&self.amount)
    }

    pub fn token_address_is_valid(&self) -> bool {
        validation::address_string(&self.token_address)
    }

    pub fn token_type_is_valid(&self) -> bool {
        TokenType::is_member(self.token_type)
    }
}

impl Validity for TwinReceipt {
    fn is_valid(&self) -> bool {
        self.twin_id_is_valid()
            && self.token_id_is_valid()
            && self.amount_is_valid()
            && self.token_address_is_valid()
            && self.token_type_is_valid()
    }
}

impl Canonical for TwinReceipt {}

impl Wire for TwinReceipt {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        let token_id = if self.token_id.is_empty() {
            WireValue::Uint(U256::ZERO)
        } else {
            WireValue::uint_str(&self.token_id)?
        };
        Ok(WireValue::Tuple(vec![
            WireValue::uint_str(&self.twin_id)?,
            token_id,
            WireValue::uint_str(&self.amount)?,
            WireValue::address_str(&self.token_address)?,
            WireValue::uint_code(self.token_type),
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [twin_id, token_id, amount, token_address, token_type] = value.into_tuple()?;
        Ok(Self {
            twin_id: twin_id.into_uint_string()?,
            token_id: token_id.into_uint_string()?,
            amount: amount.into_uint_string()?,
            token_address: token_address.into_address_string()?,
            token_type: token_type.into_enum_code()?,
        })
    }
}
