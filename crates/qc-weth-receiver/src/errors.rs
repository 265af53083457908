//! # Error Types
//!
//! Contract reverts, host execution failures, ledger failures and the
//! service-level wrapper around them.

use crate::domain::services::error_selector;
use crate::domain::value_objects::{Address, Bytes, Selector, U256};
use thiserror::Error;

// =============================================================================
// CONTRACT ERRORS
// =============================================================================

/// Reverts raised by contract logic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// A bare value transfer arrived from an address other than the authorized sender.
    #[error("EthDepositRejected")]
    EthDepositRejected,

    /// Calldata named a function the contract does not expose.
    #[error("unknown function selector: {0:?}")]
    UnknownSelector(Selector),

    /// Calldata was too short or carried a malformed argument word.
    #[error("invalid calldata: expected {expected} bytes, got {actual}")]
    InvalidCalldata {
        /// Bytes the decoder needed.
        expected: usize,
        /// Bytes present.
        actual: usize,
    },

    /// A bare transfer reached a contract without a receive handler.
    #[error("contract has no receive handler")]
    NoReceiveHandler,

    /// The guard was constructed with the zero address.
    #[error("authorized sender must not be the zero address")]
    ZeroAuthorizedSender,
}

impl ContractError {
    /// Custom-error signature, for the variants that carry one.
    #[must_use]
    pub fn signature(&self) -> Option<&'static str> {
        match self {
            Self::EthDepositRejected => Some("EthDepositRejected()"),
            Self::ZeroAuthorizedSender => Some("ZeroAuthorizedSender()"),
            Self::UnknownSelector(_) | Self::InvalidCalldata { .. } | Self::NoReceiveHandler => {
                None
            }
        }
    }

    /// Revert payload surfaced to the caller.
    ///
    /// Named errors revert with their 4-byte selector; dispatch failures revert
    /// with empty data.
    #[must_use]
    pub fn revert_data(&self) -> Bytes {
        match self.signature() {
            Some(signature) => Bytes::from_slice(error_selector(signature).as_bytes()),
            None => Bytes::new(),
        }
    }

    /// Recovers a named error from revert data.
    #[must_use]
    pub fn decode_revert(data: &[u8]) -> Option<Self> {
        if data.len() != 4 {
            return None;
        }
        let selector = Selector::from_calldata(data).ok()?;
        [Self::EthDepositRejected, Self::ZeroAuthorizedSender]
            .into_iter()
            .find(|candidate| candidate.revert_data().as_slice() == selector.as_bytes())
    }
}

// =============================================================================
// EXECUTION ERRORS
// =============================================================================

/// Errors that abort a call frame inside the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Contract logic reverted.
    #[error("reverted: {0}")]
    Reverted(#[from] ContractError),

    /// Sender cannot cover the transferred value.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount to move.
        required: U256,
        /// Balance held by the payer.
        available: U256,
    },

    /// Call depth exceeded maximum.
    #[error("call depth exceeded: {depth} > {max}")]
    CallDepthExceeded {
        /// Depth of the refused frame.
        depth: u16,
        /// Configured maximum.
        max: u16,
    },

    /// Execution ran out of gas.
    #[error("out of gas")]
    OutOfGas,

    /// Deployment targeted an address that already carries a contract.
    #[error("contract already exists at address: {0:?}")]
    ContractAlreadyExists(Address),

    /// Ledger failure.
    #[error("state error: {0}")]
    State(StateError),
}

impl ExecutionError {
    /// Returns true if the failure came from contract logic (a revert).
    #[must_use]
    pub fn is_revert(&self) -> bool {
        matches!(self, Self::Reverted(_))
    }

    /// Returns true if this error consumes all gas of the frame.
    #[must_use]
    pub fn consumes_all_gas(&self) -> bool {
        !matches!(
            self,
            Self::Reverted(_) | Self::InsufficientBalance { .. } | Self::CallDepthExceeded { .. }
        )
    }

    /// Revert payload carried back to the caller.
    #[must_use]
    pub fn revert_data(&self) -> Bytes {
        match self {
            Self::Reverted(err) => err.revert_data(),
            _ => Bytes::new(),
        }
    }

    /// The contract error behind a revert, if any.
    #[must_use]
    pub fn contract_error(&self) -> Option<&ContractError> {
        match self {
            Self::Reverted(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StateError> for ExecutionError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::InsufficientBalance {
                required,
                available,
            } => Self::InsufficientBalance {
                required,
                available,
            },
            other => Self::State(other),
        }
    }
}

// =============================================================================
// STATE ERRORS
// =============================================================================

/// Errors from ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Debit larger than the account balance.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Amount to move.
        required: U256,
        /// Balance held by the payer.
        available: U256,
    },

    /// Credit would overflow the 256-bit balance.
    #[error("balance overflow for address: {0:?}")]
    Overflow(Address),

    /// Nonce would overflow.
    #[error("nonce overflow for address: {0:?}")]
    NonceOverflow(Address),

    /// Checkpoint is not the innermost open checkpoint.
    #[error("unknown checkpoint: {0}")]
    UnknownCheckpoint(usize),
}

// =============================================================================
// SERVICE ERRORS
// =============================================================================

/// Errors surfaced by the transfer service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The transaction failed and was rolled back.
    #[error("execution failed: {0}")]
    Execution(#[from] ExecutionError),

    /// Contract construction refused its arguments.
    #[error("construction failed: {0}")]
    Construction(ContractError),

    /// Request failed validation before execution.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Request payload could not be decoded or encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ServiceError {
    /// The contract error behind a failed transaction, if any.
    #[must_use]
    pub fn contract_error(&self) -> Option<&ContractError> {
        match self {
            Self::Execution(err) => err.contract_error(),
            Self::Construction(err) => Some(err),
            _ => None,
        }
    }
}

// =============================================================================
// TELEMETRY ERRORS
// =============================================================================

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The log filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("subscriber init failed: {0}")]
    SubscriberInit(String),
}

// =============================================================================
// TESTS
// =============================================================================
