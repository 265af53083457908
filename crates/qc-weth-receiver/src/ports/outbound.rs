//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the host and contracts depend on:
//! - `StateAccess`: journaled account ledger
//! - `CallHost`: nested call primitive handed to contract logic
//!
//! Both are synchronous. A transfer attempt runs to completion inside one
//! execution unit; ordering across attempts is imposed by the service.

use crate::domain::entities::{AccountState, CallContext};
use crate::domain::value_objects::{Address, Bytes, GasCounter, U256};
use crate::errors::{ExecutionError, StateError};

// =============================================================================
// STATE ACCESS
// =============================================================================

/// Handle to an open ledger checkpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint(pub usize);

/// Interface for reading and mutating account balances.
///
/// ## Rollback Contract
///
/// Every mutation made after `checkpoint()` is undone by `revert_to()` on that
/// checkpoint. Checkpoints nest and must be closed innermost first, either by
/// `revert_to` or by `commit`.
pub trait StateAccess: Send + Sync {
    /// Get account state.
    ///
    /// * `None` - If the account was never touched
    fn account(&self, address: Address) -> Option<AccountState>;

    /// Add `amount` to the balance of `address`.
    ///
    /// # Errors
    ///
    /// `Overflow` if the balance would exceed 2^256 - 1.
    fn credit(&mut self, address: Address, amount: U256) -> Result<(), StateError>;

    /// Remove `amount` from the balance of `address`.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` if the balance is smaller than `amount`.
    fn debit(&mut self, address: Address, amount: U256) -> Result<(), StateError>;

    /// Bump the deployment nonce of `address`.
    ///
    /// # Errors
    ///
    /// `NonceOverflow` at `u64::MAX`.
    fn increment_nonce(&mut self, address: Address) -> Result<(), StateError>;

    /// Open a checkpoint.
    fn checkpoint(&mut self) -> Checkpoint;

    /// Undo everything since `checkpoint` and close it.
    ///
    /// # Errors
    ///
    /// `UnknownCheckpoint` if `checkpoint` is not the innermost open one.
    fn revert_to(&mut self, checkpoint: Checkpoint) -> Result<(), StateError>;

    /// Keep everything since `checkpoint` and close it.
    ///
    /// # Errors
    ///
    /// `UnknownCheckpoint` if `checkpoint` is not the innermost open one.
    fn commit(&mut self, checkpoint: Checkpoint) -> Result<(), StateError>;

    /// Get account balance.
    fn balance(&self, address: Address) -> U256 {
        self.account(address)
            .map(|account| account.balance)
            .unwrap_or_default()
    }

    /// Get deployment nonce.
    fn nonce(&self, address: Address) -> u64 {
        self.account(address)
            .map(|account| account.nonce)
            .unwrap_or_default()
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// A zero amount is a no-op. Not atomic on its own; callers wrap it in a
    /// checkpoint.
    ///
    /// # Errors
    ///
    /// Propagates `debit` and `credit` failures.
    fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<(), StateError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.debit(from, amount)?;
        self.credit(to, amount)
    }
}

// =============================================================================
// CALL HOST
// =============================================================================

/// Nested call primitive available to contract logic.
///
/// Implementations move `ctx.value` from `ctx.caller` to `ctx.address`, run the
/// target's entry point and roll the whole frame back on failure. The error is
/// returned unchanged so callers can re-raise it.
pub trait CallHost {
    /// Execute a call frame against `gas`.
    ///
    /// # Errors
    ///
    /// Whatever aborted the frame.
    fn call(&mut self, ctx: &CallContext, gas: &mut GasCounter) -> Result<Bytes, ExecutionError>;
}

// =============================================================================
// TESTS
// =============================================================================
