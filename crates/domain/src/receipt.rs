use serde::{Deserialize, Serialize};

use bazaar_wire::{Wire, WireError, WireValue};

use crate::condition::Condition;
use crate::enums::DisputeState;
use crate::offer_fees::OfferFees;
use crate::twin_receipt::TwinReceipt;
use crate::{all_valid, validation, Canonical, Validity, ZERO_ADDRESS};

fn zero_string() -> String {
    "0".to_owned()
}

/// Full record of a finalized exchange: the richest composite entity,
/// assembled on chain from the offer, exchange, dispute and twin data.
///
/// Fields a plain sale never touches (agent, dispute, twins) default to
/// their zero values when omitted from a plain-object form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub exchange_id: String,
    pub offer_id: String,
    pub buyer_id: String,
    pub seller_id: String,
    pub price: String,
    pub seller_deposit: String,
    pub buyer_cancel_penalty: String,
    pub offer_fees: OfferFees,
    #[serde(default = "zero_string")]
    pub agent_id: String,
    pub exchange_token: String,
    pub finalized_date: String,
    #[serde(default)]
    pub condition: Condition,
    pub committed_date: String,
    pub redeemed_date: String,
    pub voucher_expired: bool,
    #[serde(default = "zero_string")]
    pub dispute_resolver_id: String,
    #[serde(default = "zero_string")]
    pub disputed_date: String,
    #[serde(default = "zero_string")]
    pub escalated_date: String,
    #[serde(default)]
    pub dispute_state: u8,
    #[serde(default)]
    pub twin_receipts: Vec<TwinReceipt>,
}

impl Default for Receipt {
    fn default() -> Self {
        Self {
            exchange_id: String::new(),
            offer_id: String::new(),
            buyer_id: String::new(),
            seller_id: String::new(),
            price: String::new(),
            seller_deposit: String::new(),
            buyer_cancel_penalty: String::new(),
            offer_fees: OfferFees {
                protocol_fee: zero_string(),
                agent_fee: zero_string(),
            },
            agent_id: zero_string(),
            exchange_token: ZERO_ADDRESS.to_owned(),
            finalized_date: String::new(),
            condition: Condition::default(),
            committed_date: String::new(),
            redeemed_date: zero_string(),
            voucher_expired: false,
            dispute_resolver_id: zero_string(),
            disputed_date: zero_string(),
            escalated_date: zero_string(),
            dispute_state: DisputeState::Disputed.code(),
            twin_receipts: Vec::new(),
        }
    }
}

impl Receipt {
    pub fn exchange_id_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.exchange_id)
    }

    pub fn offer_id_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.offer_id)
    }

    pub fn buyer_id_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.buyer_id)
    }

    pub fn seller_id_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.seller_id)
    }

    pub fn price_is_valid(&self) -> bool {
        validation::uint_string(&self.price)
    }

    pub fn seller_deposit_is_valid(&self) -> bool {
        validation::uint_string(&self.seller_deposit)
    }

    pub fn buyer_cancel_penalty_is_valid(&self) -> bool {
        validation::uint_string(&self.buyer_cancel_penalty)
    }

    pub fn offer_fees_is_valid(&self) -> bool {
        self.offer_fees.is_valid()
    }

    pub fn agent_id_is_valid(&self) -> bool {
        validation::uint_string(&self.agent_id)
    }

    pub fn exchange_token_is_valid(&self) -> bool {
        validation::address_string(&self.exchange_token)
    }

    pub fn finalized_date_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.finalized_date)
    }

    pub fn condition_is_valid(&self) -> bool {
        self.condition.is_valid()
    }

    pub fn committed_date_is_valid(&self) -> bool {
        validation::positive_uint_string(&self.committed_date)
    }

    pub fn redeemed_date_is_valid(&self) -> bool {
        validation::uint_string(&self.redeemed_date)
    }

    pub fn dispute_resolver_id_is_valid(&self) -> bool {
        validation::uint_string(&self.dispute_resolver_id)
    }

    pub fn disputed_date_is_valid(&self) -> bool {
        validation::uint_string(&self.disputed_date)
    }

    pub fn escalated_date_is_valid(&self) -> bool {
        validation::uint_string(&self.escalated_date)
    }

    pub fn dispute_state_is_valid(&self) -> bool {
        DisputeState::is_member(self.dispute_state)
    }

    pub fn twin_receipts_is_valid(&self) -> bool {
        all_valid(&self.twin_receipts)
    }
}

impl Validity for Receipt {
    fn is_valid(&self) -> bool {
        self.exchange_id_is_valid()
            && self.offer_id_is_valid()
            && self.buyer_id_is_valid()
            && self.seller_id_is_valid()
            && self.price_is_valid()
            && self.seller_deposit_is_valid()
            && self.buyer_cancel_penalty_is_valid()
            && self.offer_fees_is_valid()
            && self.agent_id_is_valid()
            && self.exchange_token_is_valid()
            && self.finalized_date_is_valid()
            && self.condition_is_valid()
            && self.committed_date_is_valid()
            && self.redeemed_date_is_valid()
            && self.dispute_resolver_id_is_valid()
            && self.disputed_date_is_valid()
            && self.escalated_date_is_valid()
            && self.dispute_state_is_valid()
            && self.twin_receipts_is_valid()
    }
}

impl Canonical for Receipt {}

impl Wire for Receipt {
    fn to_wire(&self) -> Result<WireValue, WireError> {
        let twin_receipts = self
            .twin_receipts
            .iter()
            .map(TwinReceipt::to_wire)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WireValue::Tuple(vec![
            WireValue::uint_str(&self.exchange_id)?,
            WireValue::uint_str(&self.offer_id)?,
            WireValue::uint_str(&self.buyer_id)?,
            WireValue::uint_str(&self.seller_id)?,
            WireValue::uint_str(&self.price)?,
            WireValue::uint_str(&self.seller_deposit)?,
            WireValue::uint_str(&self.buyer_cancel_penalty)?,
            self.offer_fees.to_wire()?,
            WireValue::uint_str(&self.agent_id)?,
            WireValue::address_str(&self.exchange_token)?,
            WireValue::uint_str(&self.finalized_date)?,
            self.condition.to_wire()?,
            WireValue::uint_str(&self.committed_date)?,
            WireValue::uint_str(&self.redeemed_date)?,
            WireValue::Bool(self.voucher_expired),
            WireValue::uint_str(&self.dispute_resolver_id)?,
            WireValue::uint_str(&self.disputed_date)?,
            WireValue::uint_str(&self.escalated_date)?,
            WireValue::uint_code(self.dispute_state),
            WireValue::Array(twin_receipts),
        ]))
    }

    fn from_wire(value: WireValue) -> Result<Self, WireError> {
        let [exchange_id, offer_id, buyer_id, seller_id, price, seller_deposit, buyer_cancel_penalty, offer_fees, agent_id, exchange_token, finalized_date, condition, committed_date, redeemed_date, voucher_expired, dispute_resolver_id, disputed_date, escalated_date, dispute_state, twin_receipts] =
            value.into_tuple()?;
        let twin_receipts = twin_receipts
            .into_array()?
            .into_iter()
            .map(TwinReceipt::from_wire)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            exchange_id: exchange_id.into_uint_string()?,
            offer_id: offer_id.into_uint_string()?,
            buyer_id: buyer_id.into_uint_string()?,
            seller_id: seller_id.into_uint_string()?,
            price: price.into_uint_string()?,
            seller_deposit: seller_deposit.into_uint_string()?,
            buyer_cancel_penalty: buyer_cancel_penalty.into_uint_string()?,
            offer_fees: OfferFees::from_wire(offer_fees)?,
            agent_id: agent_id.into_uint_string()?,
            exchange_token: exchange_token.into_address_string()?,
            finalized_date: finalized_date.into_uint_string()?,
            condition: Condition::from_wire(condition)?,
            committed_date: committed_date.into_uint_string()?,
            redeemed_date: redeemed_date.into_uint_string()?,
            voucher_expired: voucher_expired.into_bool()?,
            dispute_resolver_id: dispute_resolver_id.into_uint_string()?,
            disputed_date: disputed_date.into_uint_string()?,
            escalated_date: escalated_date.into_uint_string()?,
            dispute_state: dispute_state.into_enum_code()?,
            twin_receipts,
        })
    }
}
