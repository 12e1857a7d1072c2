//! Domain entities for the commerce protocol.
//!
//! Each entity mirrors one Solidity struct: a plain record with public
//! fields, per-field validity predicates, and codecs between the in-memory
//! form, the positional wire tuple ([`bazaar_wire::Wire`]) and canonical
//! JSON ([`Canonical`]). Constructors never validate; deliberately invalid
//! instances are constructible and only [`Validity::is_valid`] decides.

mod auth_token;
mod condition;
mod dispute;
mod exchange;
mod funds;
mod meta_tx;
mod offer_fees;
mod receipt;
mod resolution;
mod twin_receipt;
mod voucher;

pub mod enums;
pub mod validation;

pub use auth_token::AuthToken;
pub use condition::Condition;
pub use dispute::Dispute;
pub use exchange::Exchange;
pub use funds::{Funds, FundsList};
pub use meta_tx::MetaTxExchangeDetails;
pub use offer_fees::OfferFees;
pub use receipt::Receipt;
pub use resolution::{Resolution, MAX_BUYER_PERCENT};
pub use twin_receipt::TwinReceipt;
pub use voucher::Voucher;

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Whole-entity validity: the AND of every per-field predicate.
///
/// Predicates are pure and never panic; the only outcomes are `true` and
/// `false`. Callers wanting to know which field failed probe the entity's
/// own `<field>_is_valid` methods.
pub trait Validity {
    fn is_valid(&self) -> bool;
}

pub fn all_valid<T: Validity>(items: &[T]) -> bool {
    items.iter().all(Validity::is_valid)
}

/// Canonical JSON forms of an entity.
///
/// The canonical string keys fields by their protocol camelCase names and
/// nests composite entities without flattening; it is what tests and logs
/// compare by.
pub trait Canonical: serde::Serialize + serde::de::DeserializeOwned {
    fn to_canonical_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn to_plain(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn from_plain(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}
