//! Wire-value model for the contract ABI boundary.
//!
//! Every domain entity crosses the contract boundary as a positional tuple
//! whose element order matches the Solidity struct's field declaration order.
//! `WireValue` models the value kinds those tuples contain; the `Wire` trait
//! is implemented by each entity to move between the in-memory record and
//! the tuple form.

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("expected tuple of {expected} elements, got {got}")]
    Arity { expected: usize, got: usize },

    #[error("expected {expected}, got {got}")]
    Kind {
        expected: &'static str,
        got: &'static str,
    },

    #[error("malformed uint string: {0:?}")]
    Uint(String),

    #[error("malformed address string: {0:?}")]
    Address(String),

    #[error("enum code out of range: {0}")]
    EnumCode(U256),
}

/// One element of a contract ABI tuple.
///
/// Unsigned integers of any Solidity width are carried as `U256`; nested
/// structs are `Tuple`, dynamic struct arrays are `Array`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    Uint(U256),
    Address(Address),
    Bool(bool),
    String(String),
    Tuple(Vec<WireValue>),
    Array(Vec<WireValue>),
}

impl WireValue {
    pub fn kind(&self) -> &'static str {
        match self {
            WireValue::Uint(_) => "uint",
            WireValue::Address(_) => "address",
            WireValue::Bool(_) => "bool",
            WireValue::String(_) => "string",
            WireValue::Tuple(_) => "tuple",
            WireValue::Array(_) => "array",
        }
    }

    /// Encode a decimal-digit string as a uint element.
    pub fn uint_str(value: &str) -> Result<Self, WireError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WireError::Uint(value.to_owned()));
        }
        U256::from_str_radix(value, 10)
            .map(WireValue::Uint)
            .map_err(|_| WireError::Uint(value.to_owned()))
    }

    /// Encode an optional decimal string; absence wires as zero.
    pub fn opt_uint_str(value: Option<&str>) -> Result<Self, WireError> {
        match value {
            Some(v) => Self::uint_str(v),
            None => Ok(WireValue::Uint(U256::ZERO)),
        }
    }

    pub fn uint_code(code: u8) -> Self {
        WireValue::Uint(U256::from(code))
    }

    pub fn address_str(value: &str) -> Result<Self, WireError> {
        Address::from_str(value)
            .map(WireValue::Address)
            .map_err(|_| WireError::Address(value.to_owned()))
    }

    /// Destructure a tuple of exactly `N` elements.
    pub fn into_tuple<const N: usize>(self) -> Result<[WireValue; N], WireError> {
        match self {
            WireValue::Tuple(items) => {
                let got = items.len();
                items
                    .try_into()
                    .map_err(|_| WireError::Arity { expected: N, got })
            }
            other => Err(WireError::Kind {
                expected: "tuple",
                got: other.kind(),
            }),
        }
    }

    pub fn into_array(self) -> Result<Vec<WireValue>, WireError> {
        match self {
            WireValue::Array(items) => Ok(items),
            other => Err(WireError::Kind {
                expected: "array",
                got: other.kind(),
            }),
        }
    }

    pub fn into_uint(self) -> Result<U256, WireError> {
        match self {
            WireValue::Uint(v) => Ok(v),
            other => Err(WireError::Kind {
                expected: "uint",
                got: other.kind(),
            }),
        }
    }

    /// Decode a uint element to its decimal-string form.
    pub fn into_uint_string(self) -> Result<String, WireError> {
        Ok(self.into_uint()?.to_string())
    }

    /// Decode a uint element treating zero as absence.
    pub fn into_opt_uint_string(self) -> Result<Option<String>, WireError> {
        let v = self.into_uint()?;
        if v.is_zero() {
            Ok(None)
        } else {
            Ok(Some(v.to_string()))
        }
    }

    pub fn into_enum_code(self) -> Result<u8, WireError> {
        let v = self.into_uint()?;
        u8::try_from(v).map_err(|_| WireError::EnumCode(v))
    }

    pub fn into_bool(self) -> Result<bool, WireError> {
        match self {
            WireValue::Bool(v) => Ok(v),
            other => Err(WireError::Kind {
                expected: "bool",
                got: other.kind(),
            }),
        }
    }

    pub fn into_string(self) -> Result<String, WireError> {
        match self {
            WireValue::String(v) => Ok(v),
            other => Err(WireError::Kind {
                expected: "string",
                got: other.kind(),
            }),
        }
    }

    /// Decode an address element to its EIP-55 checksummed string form.
    pub fn into_address_string(self) -> Result<String, WireError> {
        match self {
            WireValue::Address(v) => Ok(v.to_checksum(None)),
            other => Err(WireError::Kind {
                expected: "address",
                got: other.kind(),
            }),
        }
    }
}

/// Conversion between an entity and its positional tuple form.
///
/// `from_wire` is the exact inverse of `to_wire` for well-formed input. Both
/// directions surface structural problems (arity mismatch, wrong element
/// kind, unparseable uint) as `WireError`; neither performs domain
/// validation.
pub trait Wire: Sized {
    fn to_wire(&self) -> Result<WireValue, WireError>;
    fn from_wire(value: WireValue) -> Result<Self, WireError>;
}
