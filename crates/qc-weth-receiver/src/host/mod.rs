//! # Transfer Host
//!
//! Deterministic executor for value transfers between accounts and native
//! contracts.
//!
//! ## Frame Semantics
//!
//! Every call frame, top-level or nested:
//! 1. Opens a ledger checkpoint
//! 2. Moves `value` from the caller to the callee
//! 3. Runs the callee's `receive` (empty calldata) or `call` entry point;
//!    accounts without contract logic accept anything
//! 4. Commits on success, reverts to the checkpoint on any error
//!
//! A failing frame therefore leaves no balance change behind, however deep the
//! failure occurred.

pub mod gas;

use crate::contracts::Contract;
use crate::domain::entities::{CallContext, TransferReceipt, VmConfig};
use crate::domain::invariants::check_call_depth_invariant;
use crate::domain::services::compute_contract_address;
use crate::domain::value_objects::{Address, Bytes, GasCounter, U256};
use crate::errors::{ExecutionError, StateError};
use crate::ports::outbound::{CallHost, StateAccess};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Executes transactions against a ledger and a registry of deployed contracts.
pub struct Executor<S: StateAccess> {
    state: S,
    contracts: HashMap<Address, Arc<dyn Contract>>,
    config: VmConfig,
}

impl<S: StateAccess> Executor<S> {
    /// Create an executor over `state`.
    pub fn new(state: S, config: VmConfig) -> Self {
        Self {
            state,
            contracts: HashMap::new(),
            config,
        }
    }

    /// Read access to the ledger.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Balance held by `address`.
    pub fn balance(&self, address: Address) -> U256 {
        self.state.balance(address)
    }

    /// Contract logic bound to `address`, if any.
    pub fn contract_at(&self, address: Address) -> Option<&Arc<dyn Contract>> {
        self.contracts.get(&address)
    }

    /// Credit `amount` to `address` outside any transaction.
    ///
    /// # Errors
    ///
    /// `Overflow` if the balance would exceed 2^256 - 1.
    pub fn fund(&mut self, address: Address, amount: U256) -> Result<(), StateError> {
        self.state.credit(address, amount)
    }

    /// Bind `contract` to the next address derived from `deployer`.
    ///
    /// # Errors
    ///
    /// `ContractAlreadyExists` if the derived address already carries logic.
    pub fn deploy(
        &mut self,
        deployer: Address,
        contract: Arc<dyn Contract>,
    ) -> Result<Address, ExecutionError> {
        let address = compute_contract_address(deployer, self.state.nonce(deployer));
        if self.contracts.contains_key(&address) {
            return Err(ExecutionError::ContractAlreadyExists(address));
        }
        self.state.increment_nonce(deployer)?;

        info!(
            contract = contract.name(),
            deployer = %deployer,
            address = %address,
            "Contract deployed"
        );
        self.contracts.insert(address, contract);
        Ok(address)
    }

    /// Execute a top-level transaction.
    ///
    /// Failures never escape as `Err`: they are reported in the receipt after
    /// the ledger has been rolled back.
    pub fn send_transaction(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
        data: Bytes,
        gas_limit: u64,
    ) -> TransferReceipt {
        let mut gas = GasCounter::new(gas_limit);
        if gas.charge(gas::intrinsic_gas(data.as_slice())).is_err() {
            debug!(from = %from, to = %to, gas_limit, "Intrinsic gas exceeds limit");
            return TransferReceipt::failure(ExecutionError::OutOfGas, gas_limit);
        }

        let ctx = CallContext::new_transaction(from, to, value, data);
        match self.call(&ctx, &mut gas) {
            Ok(output) => TransferReceipt::success(output, gas.used()),
            Err(err) => TransferReceipt::failure(err, gas.used()),
        }
    }

    fn execute_frame(
        &mut self,
        ctx: &CallContext,
        gas: &mut GasCounter,
    ) -> Result<Bytes, ExecutionError> {
        self.state.transfer(ctx.caller, ctx.address, ctx.value)?;

        let Some(contract) = self.contracts.get(&ctx.address).cloned() else {
            return Ok(Bytes::new());
        };
        gas.charge(gas::CONTRACT_ENTRY)?;

        if ctx.is_bare_transfer() {
            contract.receive(ctx, self, gas)?;
            Ok(Bytes::new())
        } else {
            contract.call(ctx, self, gas)
        }
    }
}

impl<S: StateAccess> CallHost for Executor<S> {
    fn call(&mut self, ctx: &CallContext, gas: &mut GasCounter) -> Result<Bytes, ExecutionError> {
        if !check_call_depth_invariant(ctx, &self.config) {
            return Err(ExecutionError::CallDepthExceeded {
                depth: ctx.depth,
                max: self.config.max_call_depth,
            });
        }

        let checkpoint = self.state.checkpoint();
        match self.execute_frame(ctx, gas) {
            Ok(output) => {
                self.state.commit(checkpoint)?;
                debug!(
                    caller = %ctx.caller,
                    callee = %ctx.address,
                    value = %ctx.value,
                    depth = ctx.depth,
                    "Frame committed"
                );
                Ok(output)
            }
            Err(err) => {
                if err.consumes_all_gas() {
                    gas.exhaust();
                }
                self.state.revert_to(checkpoint)?;
                debug!(
                    caller = %ctx.caller,
                    callee = %ctx.address,
                    depth = ctx.depth,
                    error = %err,
                    "Frame reverted"
                );
                Err(err)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
