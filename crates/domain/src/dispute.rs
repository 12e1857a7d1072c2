use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::enums::DisputeState;
use crate::resolution::Resolution;
use crate::{validation, Canonical, Validity};

/// Dispute raised against a redeemed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub exchange_id: String,
    pub disputed_date: String,
    pub finalized_date: String,
    pub complaint: String,
    pub state: u8,
    pub resolution: Resolution,
}

impl Dispute {
    pub fn exchange_id_is_valid(&self) -> bool {
        validation::uint_string(&self.exchange_id)
    }

    pub fn disputed_date_is_valid(&self) -> bool {
        validation::uint_string(&self.disputed_date)
    }

    pub fn finalized_date_is_valid(&self) -> bool {
        validation::uint_string(&self.finalized_date)
    }

    pub fn state_is_valid(&self) -> bool {
        DisputeState::is_member(self.state)
    }

    pub fn resolution_is_valid(&self) -> bool {
        self.resolution.is_valid()
    }
}

impl Validity for Dispute {
    fn is_valid(&self) -> bool {
        self.exchange_id_is_valid()
            && self.disputed_date_is_valid()
            && self.finalized_date_is_valid()
            && self.state_is_valid()
            && self.resolution_is_valid()
    }
}

impl Canonical for Dispute {}

impl Wire for Dispute {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![
            WireValue::uint_str(&self.exchange_id)?,
            WireValue::uint_str(&self.disputed_date)?,
            WireValue::uint_str(&self.finalized_date)?,
            WireValue::String(self.complaint.clone()),
            WireValue::uint_code(self.state),
            self.resolution.to_wire()?,
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [exchange_id, disputed_date, finalized_date, complaint, state, resolution] =
            value.into_tuple()?;
        Ok(Self {
            exchange_id: exchange_id.into_uint_string()?,
            disputed_date: disputed_date.into_uint_string()?,
            finalized_date: finalized_date.into_uint_string()?,
            complaint: complaint.into_string()?,
            state: state.into_enum_code()?,
            resolution: Resolution::from_wire(resolution)?,
        })
    }
}
