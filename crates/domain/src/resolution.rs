use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::{validation, Canonical, Validity};

/// Inclusive upper bound for [`Resolution::buyer_percent`], in basis points
/// (10000 = 100%).
pub const MAX_BUYER_PERCENT: u64 = 10_000;

/// Mutually-agreed dispute outcome: the share of the escrow awarded to the
/// buyer, in basis points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub buyer_percent: String,
}

impl Resolution {
    pub fn buyer_percent_is_valid(&self) -> bool {
        validation::uint_string_at_most(&self.buyer_percent, MAX_BUYER_PERCENT)
    }
}

impl Validity for Resolution {
    fn is_valid(&self) -> bool {
        self.buyer_percent_is_valid()
    }
}

impl Canonical for Resolution {}

impl Wire for Resolution {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![WireValue::uint_str(
            &self.buyer_percent,
        )?]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [buyer_percent] = value.into_tuple()?;
        Ok(Self {
            buyer_percent: buyer_percent.into_uint_string()?,
        })
    }
}
