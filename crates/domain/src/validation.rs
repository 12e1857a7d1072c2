//! Field-level validation primitives.
//!
//! On-chain unsigned integers are carried in memory as decimal-digit
//! strings so that uint256 values survive JSON consumers without precision
//! loss; these predicates parse them with full 256-bit precision.

use alloy_primitives::{Address, U256};

fn parse_uint(value: &str) -> Option<U256> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(value, 10).ok()
}

/// Non-empty decimal-digit string that fits in a uint256.
pub fn uint_string(value: &str) -> bool {
    parse_uint(value).is_some()
}

/// Uint string strictly greater than zero. Protocol identifiers are never
/// zero, so `"0"` fails here even though it is a well-formed uint.
pub fn positive_uint_string(value: &str) -> bool {
    parse_uint(value).is_some_and(|v| !v.is_zero())
}

/// Uint string bounded above, inclusive.
pub fn uint_string_at_most(value: &str, max: u64) -> bool {
    parse_uint(value).is_some_and(|v| v <= U256::from(max))
}

/// Absence is itself valid; a present value must be a uint string.
pub fn optional_uint_string(value: Option<&str>) -> bool {
    value.map_or(true, uint_string)
}

/// EIP-55 checksummed 20-byte hex address.
pub fn address_string(value: &str) -> bool {
    Address::parse_checksummed(value, None).is_ok()
}
