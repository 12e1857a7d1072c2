use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::{validation, Canonical, Validity};

/// Redeemable voucher attached to an exchange. All three dates are unset
/// until the corresponding lifecycle event happens on chain; unset wires as
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub committed_date: Option<String>,
    pub valid_until_date: Option<String>,
    pub redeemed_date: Option<String>,
    pub expired: bool,
}

impl Voucher {
    pub fn committed_date_is_valid(&self) -> bool {
        validation::optional_uint_string(self.committed_date.as_deref())
    }

    pub fn valid_until_date_is_valid(&self) -> bool {
        validation::optional_uint_string(self.valid_until_date.as_deref())
    }

    pub fn redeemed_date_is_valid(&self) -> bool {
        validation::optional_uint_string(self.redeemed_date.as_deref())
    }
}

impl Validity for Voucher {
    fn is_valid(&self) -> bool {
        self.committed_date_is_valid()
            && self.valid_until_date_is_valid()
            && self.redeemed_date_is_valid()
    }
}

impl Canonical for Voucher {}

impl Wire for Voucher {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![
            WireValue::opt_uint_str(self.committed_date.as_deref())?,
            WireValue::opt_uint_str(self.valid_until_date.as_deref())?,
            WireValue::opt_uint_str(self.redeemed_date.as_deref())?,
            WireValue::Bool(self.expired),
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [committed_date, valid_until_date, redeemed_date, expired] = value.into_tuple()?;
        Ok(Self {
            committed_date: committed_date.into_opt_uint_string()?,
            valid_until_date: valid_until_date.into_opt_uint_string()?,
            redeemed_date: redeemed_date.into_opt_uint_string()?,
            expired: expired.into_bool()?,
        })
    }
}
