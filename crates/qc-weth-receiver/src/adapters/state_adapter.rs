//! # State Adapter
//!
//! Journaled in-memory ledger. Mutations made while a checkpoint is open are
//! recorded with the account's previous record so a revert restores it exactly.

use crate::domain::entities::AccountState;
use crate::domain::value_objects::{Address, U256};
use crate::errors::StateError;
use crate::ports::outbound::{Checkpoint, StateAccess};
use std::collections::HashMap;

/// Undo record for one account mutation.
#[derive(Clone, Debug)]
struct JournalEntry {
    address: Address,
    previous: Option<AccountState>,
}

/// In-memory ledger with nested checkpoints.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    /// Account states.
    accounts: HashMap<Address, AccountState>,
    /// Undo log, only written while a checkpoint is open.
    journal: Vec<JournalEntry>,
    /// Journal length at each open checkpoint, innermost last.
    checkpoints: Vec<usize>,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger seeded with balances.
    #[must_use]
    pub fn with_balances(balances: impl IntoIterator<Item = (Address, U256)>) -> Self {
        let accounts = balances
            .into_iter()
            .map(|(address, balance)| (address, AccountState::with_balance(balance)))
            .collect();
        Self {
            accounts,
            ..Self::default()
        }
    }

    /// Number of checkpoints still open.
    #[must_use]
    pub fn open_checkpoints(&self) -> usize {
        self.checkpoints.len()
    }

    /// Every known balance, ordered by address.
    #[must_use]
    pub fn balances(&self) -> Vec<(Address, U256)> {
        let mut balances: Vec<_> = self
            .accounts
            .iter()
            .map(|(address, account)| (*address, account.balance))
            .collect();
        balances.sort_by_key(|(address, _)| *address);
        balances
    }

    /// Sum of all balances.
    #[must_use]
    pub fn total_supply(&self) -> U256 {
        self.accounts
            .values()
            .fold(U256::zero(), |acc, account| acc.saturating_add(account.balance))
    }

    fn record(&mut self, address: Address) {
        if !self.checkpoints.is_empty() {
            let previous = self.accounts.get(&address).cloned();
            self.journal.push(JournalEntry { address, previous });
        }
    }

    fn close(&mut self, checkpoint: Checkpoint) -> Result<usize, StateError> {
        if checkpoint.0 + 1 != self.checkpoints.len() {
            return Err(StateError::UnknownCheckpoint(checkpoint.0));
        }
        self.checkpoints
            .pop()
            .ok_or(StateError::UnknownCheckpoint(checkpoint.0))
    }
}

impl StateAccess for InMemoryLedger {
    fn account(&self, address: Address) -> Option<AccountState> {
        self.accounts.get(&address).cloned()
    }

    fn credit(&mut self, address: Address, amount: U256) -> Result<(), StateError> {
        let current = self.balance(address);
        let updated = current
            .checked_add(amount)
            .ok_or(StateError::Overflow(address))?;
        self.record(address);
        self.accounts.entry(address).or_default().balance = updated;
        Ok(())
    }

    fn debit(&mut self, address: Address, amount: U256) -> Result<(), StateError> {
        let available = self.balance(address);
        let updated = available
            .checked_sub(amount)
            .ok_or(StateError::InsufficientBalance {
                required: amount,
                available,
            })?;
        self.record(address);
        self.accounts.entry(address).or_default().balance = updated;
        Ok(())
    }

    fn increment_nonce(&mut self, address: Address) -> Result<(), StateError> {
        let nonce = self
            .nonce(address)
            .checked_add(1)
            .ok_or(StateError::NonceOverflow(address))?;
        self.record(address);
        self.accounts.entry(address).or_default().nonce = nonce;
        Ok(())
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.checkpoints.push(self.journal.len());
        Checkpoint(self.checkpoints.len() - 1)
    }

    fn revert_to(&mut self, checkpoint: Checkpoint) -> Result<(), StateError> {
        let mark = self.close(checkpoint)?;
        while self.journal.len() > mark {
            let Some(entry) = self.journal.pop() else {
                break;
            };
            match entry.previous {
                Some(previous) => {
                    self.accounts.insert(entry.address, previous);
                }
                None => {
                    self.accounts.remove(&entry.address);
                }
            }
        }
        Ok(())
    }

    fn commit(&mut self, checkpoint: Checkpoint) -> Result<(), StateError> {
        self.close(checkpoint)?;
        // Outermost commit: nothing left that could be reverted
        if self.checkpoints.is_empty() {
            self.journal.clear();
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
