//! # Gas Schedule
//!
//! Costs charged by the host for transactions and nested call frames.

use crate::domain::value_objects::U256;

// Transaction costs
/// Base transaction gas.
pub const TX_BASE: u64 = 21_000;
/// Gas per non-zero byte of calldata.
pub const TX_DATA_NON_ZERO: u64 = 16;
/// Gas per zero byte of calldata.
pub const TX_DATA_ZERO: u64 = 4;

// Call costs
/// Warm account access paid by every nested call.
pub const CALL: u64 = 100;
/// Surcharge for a nested call that moves value.
pub const CALL_VALUE: u64 = 9_000;
/// Entering contract logic.
pub const CONTRACT_ENTRY: u64 = 700;
/// Comparing the caller against an immutable identity.
pub const GUARD_CHECK: u64 = 100;

/// Intrinsic gas of a top-level transaction carrying `data`.
#[must_use]
pub fn intrinsic_gas(data: &[u8]) -> u64 {
    let data_gas: u64 = data
        .iter()
        .map(|&byte| if byte == 0 { TX_DATA_ZERO } else { TX_DATA_NON_ZERO })
        .sum();
    TX_BASE + data_gas
}

/// Cost of opening a nested frame that moves `value`.
#[must_use]
pub fn nested_call_cost(value: U256) -> u64 {
    if value.is_zero() {
        CALL
    } else {
        CALL + CALL_VALUE
    }
}
