use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::{validation, Canonical, Validity};

/// Payload of a meta-transaction targeting one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTxExchangeDetails {
    pub exchange_id: String,
}

impl MetaTxExchangeDetails {
    pub fn exchange_id_is_valid(&self) -> bool {
        validation::uint_string(&self.exchange_id)
    }
}

impl Validity for MetaTxExchangeDetails {
    fn is_valid(&self) -> bool {
        self.exchange_id_is_valid()
    }
}

impl Canonical for MetaTxExchangeDetails {}

impl Wire for MetaTxExchangeDetails {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        Ok(WireValue::Tuple(vec![WireValue::uint_str(
            &self.exchange_id,
        )?]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [exchange_id] = value.into_tuple()?;
        Ok(Self {
            exchange_id: exchange_id.into_uint_string()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity() {
        let mut details = MetaTxExchangeDetails {
            exchange_id: "42".to_owned(),
        };
        assert!(details.is_valid());

        details.exchange_id = "forty-two".to_owned();
        assert!(!details.is_valid());
    }

    #[test]
    fn test_wire_roundtrip() {
        let details = MetaTxExchangeDetails {
            exchange_id: "42".to_owned(),
        };
        assert_eq!(
            MetaTxExchangeDetails::from_wire(details.to_wire().unwrap()).unwrap(),
            details
        );
    }
}
