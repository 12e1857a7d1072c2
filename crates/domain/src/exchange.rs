use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::enums::ExchangeState;
use crate::voucher::Voucher;
use crate::{validation, Canonical, Validity};

/// A buyer's commitment to an offer. Identifiers are never zero on chain,
/// so `"0"` fails validation for `id`, `offer_id` and `buyer_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub id: String,
    pub offer_id: String,
    pub buyer_id: String,
    pub finalized_date: Option<String>,
    pub voucher: Option<Voucher>,
    pub state: u8,
}

impl Exchange {
    pub fn id_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.id)
    }

    pub fn offer_id_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.offer_id)
    }

    pub fn buyer_id_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.buyer_id)
    }

    pub fn finalized_date_is_valid(&self) -> bool {
        validation::optional_uint_string(self.finalized_date.as_deref())
    }

    pub fn voucher_is_valid(&self) -> bool {
        self.voucher.as_ref().map_or(true, Voucher::is_valid)
    }

    pub fn state_is_valid(&self) -> bool {
        ExchangeState::is_member(self.state)
    }
}

impl Validity for Exchange {
    fn is_valid(&self) -> bool {
        self.id_is_valid()
            && self.offer_id_is_valid()
            && self.buyer_id_is_valid()
            && self.finalized_date_is_valid()
            && self.voucher_is_valid()
            && self.state_is_valid()
    }
}

impl Canonical for Exchange {}

impl Wire for Exchange {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        // ABI tuples cannot express absence: a missing voucher wires as the
        // all-zero voucher tuple.
        let voucher = self.voucher.clone().unwrap_or_default();
        Ok(WireValue::Tuple(vec![
            WireValue::uint_str(&self.id)?,
            WireValue::uint_str(&self.offer_id)?,
            WireValue::uint_str(&self.buyer_id)?,
            WireValue::opt_uint_str(self.finalized_date.as_deref())?,
            voucher.to_wire()?,
            WireValue::uint_code(self.state),
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [id, offer_id, buyer_id, finalized_date, voucher, state] = value.into_tuple()?;
        let voucher = Voucher::from_wire(voucher)?;
        Ok(Self {
            id: id.into_uint_string()?,
            offer_id: offer_id.into_uint_string()?,
            buyer_id: buyer_id.into_uint_string()?,
            finalized_date: finalized_date.into_opt_uint_string()?,
            voucher: (voucher != Voucher::default()).then_some(voucher),
            state: state.into_enum_code()?,
        })
    }
}
