//! # Domain Invariants
//!
//! Runtime checks that must hold around every transfer attempt.
//!
//! - Call depth never exceeds the configured maximum
//! - A rolled-back transfer leaves every observed balance untouched
//! - Value is only moved, never created or destroyed

use crate::domain::entities::{CallContext, TransferReceipt, VmConfig};
use crate::domain::value_objects::{Address, U256};

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Execution cannot nest deeper than `max_call_depth`.
#[must_use]
pub fn check_call_depth_invariant(ctx: &CallContext, config: &VmConfig) -> bool {
    ctx.depth <= config.max_call_depth
}

/// A failed transaction changes no observed balance.
///
/// `before` and `after` are balance snapshots of the same addresses, in the
/// same order.
#[must_use]
pub fn check_revert_rollback_invariant(
    receipt: &TransferReceipt,
    before: &[(Address, U256)],
    after: &[(Address, U256)],
) -> bool {
    receipt.success || before == after
}

/// The ledger total is the same before and after.
#[must_use]
pub fn check_conservation_invariant(supply_before: U256, supply_after: U256) -> bool {
    supply_before == supply_after
}

/// Check all transfer invariants at once.
#[must_use]
pub fn check_transfer_invariants(
    receipt: &TransferReceipt,
    before: &[(Address, U256)],
    after: &[(Address, U256)],
    supply_before: U256,
    supply_after: U256,
) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_revert_rollback_invariant(receipt, before, after) {
        let changed = before
            .iter()
            .zip(after)
            .filter(|(b, a)| b != a)
            .map(|((address, _), _)| *address)
            .collect();
        violations.push(InvariantViolation::StateNotRolledBack { changed });
    }

    if !check_conservation_invariant(supply_before, supply_after) {
        violations.push(InvariantViolation::SupplyChanged {
            before: supply_before,
            after: supply_after,
        });
    }

    InvariantCheckResult { violations }
}

// =============================================================================
// INVARIANT RESULT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, Default)]
pub struct InvariantCheckResult {
    /// List of violations found.
    pub violations: Vec<InvariantViolation>,
}

impl InvariantCheckResult {
    /// Returns true if all invariants passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A failed transfer left balances modified.
    StateNotRolledBack {
        /// Addresses whose balance differs.
        changed: Vec<Address>,
    },
    /// Value appeared or disappeared.
    SupplyChanged {
        /// Total before the transfer.
        before: U256,
        /// Total after the transfer.
        after: U256,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateNotRolledBack { changed } => {
                write!(f, "state not rolled back: {} balance(s) changed", changed.len())
            }
            Self::SupplyChanged { before, after } => {
                write!(f, "supply changed: {before} -> {after}")
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
