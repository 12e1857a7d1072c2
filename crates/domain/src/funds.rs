use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::{all_valid, validation, Canonical, Validity};

/// Available balance of one token held by the protocol for a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Funds {
    pub token_address: String,
    pub token_name: String,
    pub available_amount: String,
}

impl Funds {
    pub fn token_address_is_valid(&self) -> bool {
        validation::address_string(&self.token_address)
    }

    pub fn available_amount_is_valid(&self) -> bool {
        validation::uint_string(&self.available_amount)
    }
}

impl Validity for Funds {
    fn is_valid(&self) -> bool {
        self.token_address_is_valid() && self.available_amount_is_valid()
    }
}

impl Canonical for Funds {}

impl Wire for Funds {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![
            WireValue::address_str(&self.token_address)?,
            WireValue::String(self.token_name.clone()),
            WireValue::uint_str(&self.available_amount)?,
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [token_address, token_name, available_amount] = value.into_tuple()?;
        Ok(Self {
            token_address: token_address.into_address_string()?,
            token_name: token_name.into_string()?,
            available_amount: available_amount.into_uint_string()?,
        })
    }
}

/// Ordered collection of [`Funds`]; wires as a dynamic array of tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsList {
    pub funds: Vec<Funds>,
}

impl FundsList {
    pub fn funds_is_valid(&self) -> bool {
        all_valid(&self.funds)
    }
}

impl Validity for FundsList {
    fn is_valid(&self) -> bool {
        self.funds_is_valid()
    }
}

impl Canonical for FundsList {}

impl Wire for FundsList {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        let funds = self
            .funds
            .iter()
            .map(Funds::to_wire)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WireValue::Array(funds))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let funds = value
            .into_array()?
            .into_iter()
            .map(Funds::from_wire)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { funds })
    }
}
