use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::enums::AuthTokenType;
use crate::{validation, Canonical, Validity};

/// Seller authorization token reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    pub token_id: String,
    pub token_type: u8,
}

impl AuthToken {
    pub fn token_id_is_valid(&self) -> bool {
        validation::uint_string(&self.token_id)
    }

    pub fn token_type_is_valid(&self) -> bool {
        AuthTokenType::is_member(self.token_type)
    }
}

impl Validity for AuthToken {
    fn is_valid(&self) -> bool {
        self.token_id_is_valid() && self.token_type_is_valid()
    }
}

impl Canonical for AuthToken {}

impl Wire for AuthToken {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![
            WireValue::uint_str(&self.token_id)?,
            WireValue::uint_code(self.token_type),
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [token_id, token_type] = value.into_tuple()?;
        Ok(Self {
            token_id: token_id.into_uint_string()?,
            token_type: token_type.into_enum_code()?,
        })
    }
}
