//! # Core Domain Entities
//!
//! Call frames, account records, receipts and the host configuration.

use crate::domain::value_objects::{Address, Bytes, U256};
use crate::errors::{ContractError, ExecutionError};
use serde::{Deserialize, Serialize};

// =============================================================================
// CALL CONTEXT
// =============================================================================

/// One transfer attempt as seen by the frame executing it.
///
/// `caller` is always the direct caller of this frame, never an upstream
/// originator; `origin` keeps the top-level sender.
#[derive(Clone, Debug)]
pub struct CallContext {
    /// Account that signed the top-level transaction.
    pub origin: Address,
    /// Direct caller of this frame.
    pub caller: Address,
    /// Account being called.
    pub address: Address,
    /// Value moved from `caller` to `address`.
    pub value: U256,
    /// Calldata; empty for a bare transfer.
    pub data: Bytes,
    /// Nesting depth, 0 for the top-level frame.
    pub depth: u16,
}

impl CallContext {
    /// Creates the context of a top-level transaction.
    #[must_use]
    pub fn new_transaction(origin: Address, to: Address, value: U256, data: Bytes) -> Self {
        Self {
            origin,
            caller: origin,
            address: to,
            value,
            data,
            depth: 0,
        }
    }

    /// Creates a child context for a nested call issued by this frame's contract.
    #[must_use]
    pub fn child_call(&self, address: Address, value: U256, data: Bytes) -> Self {
        Self {
            origin: self.origin,
            caller: self.address,
            address,
            value,
            data,
            depth: self.depth.saturating_add(1),
        }
    }

    /// Returns true if this frame carries no instruction payload.
    #[must_use]
    pub fn is_bare_transfer(&self) -> bool {
        self.data.is_empty()
    }
}

// =============================================================================
// ACCOUNT STATE
// =============================================================================

/// Ledger record for one address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Held native value.
    pub balance: U256,
    /// Number of contracts deployed from this account.
    pub nonce: u64,
}

impl AccountState {
    /// Creates an account with the given balance.
    #[must_use]
    pub fn with_balance(balance: U256) -> Self {
        Self { balance, nonce: 0 }
    }

    /// Returns true if the record carries nothing worth keeping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero() && self.nonce == 0
    }
}

// =============================================================================
// TRANSFER RECEIPT
// =============================================================================

/// Outcome of a top-level transaction.
#[derive(Clone, Debug, Default)]
pub struct TransferReceipt {
    /// Whether the transaction committed.
    pub success: bool,
    /// Gas consumed, including intrinsic cost.
    pub gas_used: u64,
    /// Return data on success, revert data on failure.
    pub output: Bytes,
    /// Failure that rolled the transaction back.
    pub error: Option<ExecutionError>,
}

impl TransferReceipt {
    /// Creates a committed receipt.
    #[must_use]
    pub fn success(output: Bytes, gas_used: u64) -> Self {
        Self {
            success: true,
            gas_used,
            output,
            error: None,
        }
    }

    /// Creates a rolled-back receipt.
    #[must_use]
    pub fn failure(error: ExecutionError, gas_used: u64) -> Self {
        Self {
            success: false,
            gas_used,
            output: error.revert_data(),
            error: Some(error),
        }
    }

    /// Named contract error behind a rollback, decoded from revert data.
    #[must_use]
    pub fn revert_error(&self) -> Option<ContractError> {
        if self.success {
            return None;
        }
        ContractError::decode_revert(self.output.as_slice())
    }

    /// Converts into `Result`, surfacing the rollback cause as the error.
    ///
    /// # Errors
    ///
    /// The `ExecutionError` that rolled the transaction back.
    pub fn into_result(self) -> Result<Self, ExecutionError> {
        match self.error.clone() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

// =============================================================================
// VM CONFIGURATION
// =============================================================================

/// Host limits.
#[derive(Clone, Debug)]
pub struct VmConfig {
    /// Maximum call depth (default: 1024).
    pub max_call_depth: u16,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_call_depth: 1024,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
