use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::{validation, Canonical, Validity};

/// Protocol and agent fees attached to an offer. Zero is a legitimate fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferFees {
    pub protocol_fee: String,
    pub agent_fee: String,
}

impl OfferFees {
    pub fn protocol_fee_is_valid(&self) -> bool {
        validation::uint_string(&self.protocol_fee)
    }

    pub fn agent_fee_is_valid(&self) -> bool {
        validation::uint_string(&self.agent_fee)
    }
}

impl Validity for OfferFees {
    fn is_valid(&self) -> bool {
        self.protocol_fee_is_valid() && self.agent_fee_is_valid()
    }
}

impl Canonical for OfferFees {}

impl Wire for OfferFees {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![
            WireValue::uint_str(&self.protocol_fee)?,
            WireValue::uint_str(&self.agent_fee)?,
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [protocol_fee, agent_fee] = value.into_tuple()?;
        Ok(Self {
            protocol_fee: protocol_fee.into_uint_string()?,
            agent_fee: agent_fee.into_uint_string()?,
        })
    }
}
