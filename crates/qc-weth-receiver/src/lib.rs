//! # QC Weth Receiver - Guarded Native-Value Receiver
//!
//! ## Purpose
//!
//! A receiver that accepts bare native-value transfers only from one authorized
//! sender bound at construction, and reverts every other direct transfer with
//! `EthDepositRejected`. A plain forwarding contract and a deterministic
//! transfer host complete the picture so both paths can be exercised end to end.
//!
//! ## Components
//!
//! | Component | Location | Purpose |
//! |-----------|----------|---------|
//! | `GuardedReceiver` | `contracts/guarded_receiver.rs` | Caller-identity deposit guard |
//! | `PlainSender` | `contracts/plain_sender.rs` | `transfer(address)` forwarder |
//! | `Executor` | `host/mod.rs` | Call frames, value moves, rollback |
//! | `InMemoryLedger` | `adapters/state_adapter.rs` | Journaled balances |
//! | `TransferService` | `service.rs` | Async, serialized entry point |
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Authorized sender is never zero | `GuardedReceiver::new()` |
//! | Rejected transfers leave no trace | `Executor` checkpoints, `check_revert_rollback_invariant()` |
//! | Value is conserved | `check_conservation_invariant()` |
//! | Call depth limit | `check_call_depth_invariant()` |
//!
//! ## Usage Example
//!
//! ```ignore
//! use qc_weth_receiver::prelude::*;
//!
//! let service = TransferService::default();
//! let sender = service.deploy_plain_sender(deployer).await?;
//! let receiver = service.deploy_guarded_receiver(deployer, sender).await?;
//!
//! service.forward_via(signer, sender, receiver, U256::from(100)).await?;
//! let err = service.send_value(signer, receiver, U256::from(100)).await.unwrap_err();
//! assert_eq!(err.contract_error(), Some(&ContractError::EthDepositRejected));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod contracts;
pub mod domain;
pub mod errors;
pub mod events;
pub mod host;
pub mod ports;
pub mod service;
pub mod telemetry;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::entities::{AccountState, CallContext, TransferReceipt, VmConfig};
    pub use crate::domain::invariants::{
        check_transfer_invariants, InvariantCheckResult, InvariantViolation,
    };
    pub use crate::domain::services::{compute_contract_address, function_selector, keccak256};
    pub use crate::domain::value_objects::{Address, Bytes, GasCounter, Selector, U256};

    // Contracts
    pub use crate::contracts::{Contract, GuardedReceiver, PlainSender};

    // Ports
    pub use crate::ports::inbound::TransferApi;
    pub use crate::ports::outbound::{CallHost, Checkpoint, StateAccess};

    // Host & adapters
    pub use crate::adapters::InMemoryLedger;
    pub use crate::host::Executor;

    // Requests
    pub use crate::events::{TransferRequestPayload, TransferResponsePayload};

    // Errors
    pub use crate::errors::{ContractError, ExecutionError, ServiceError, StateError};

    // Service
    pub use crate::config::ServiceConfig;
    pub use crate::service::{ServiceStats, TransferService};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
