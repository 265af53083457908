//! # Transfer Service
//!
//! Async front door to the executor. Requests are serialized behind one write
//! lock, so each transfer attempt runs to completion (commit or full rollback)
//! before the next one is observed.
//!
//! After every attempt the service re-checks the rollback and conservation
//! invariants against ledger snapshots taken around the attempt.

use crate::adapters::InMemoryLedger;
use crate::config::ServiceConfig;
use crate::contracts::{GuardedReceiver, PlainSender};
use crate::domain::entities::TransferReceipt;
use crate::domain::invariants::check_transfer_invariants;
use crate::domain::value_objects::{Address, Bytes, U256};
use crate::errors::{ContractError, ExecutionError, ServiceError};
use crate::events::{TransferRequestPayload, TransferResponsePayload};
use crate::host::Executor;
use crate::ports::inbound::TransferApi;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

/// Statistics for the transfer service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total transactions executed.
    pub transactions_executed: u64,
    /// Committed transactions.
    pub successful_transfers: u64,
    /// Rolled-back transactions.
    pub failed_transfers: u64,
    /// Rollbacks caused by `EthDepositRejected`.
    pub rejected_deposits: u64,
    /// Total gas consumed.
    pub total_gas_used: u64,
    /// Invariant violations detected after execution.
    pub invariant_violations: u64,
}

/// The transfer service.
pub struct TransferService {
    config: ServiceConfig,
    executor: Arc<RwLock<Executor<InMemoryLedger>>>,
    stats: Arc<RwLock<ServiceStats>>,
}

impl TransferService {
    /// Create a service over an empty ledger.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_ledger(InMemoryLedger::new(), config)
    }

    /// Create a service over an existing ledger.
    pub fn with_ledger(ledger: InMemoryLedger, config: ServiceConfig) -> Self {
        info!(
            default_gas_limit = config.default_gas_limit,
            max_call_depth = config.max_call_depth,
            "Transfer service initialised"
        );
        let executor = Executor::new(ledger, config.vm_config());
        Self {
            config,
            executor: Arc::new(RwLock::new(executor)),
            stats: Arc::new(RwLock::new(ServiceStats::default())),
        }
    }

    /// Service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    /// Deploy a guard that only accepts deposits from `authorized_sender`.
    ///
    /// # Errors
    ///
    /// `Construction(ZeroAuthorizedSender)` for the zero address.
    pub async fn deploy_guarded_receiver(
        &self,
        deployer: Address,
        authorized_sender: Address,
    ) -> Result<Address, ServiceError> {
        let guard = GuardedReceiver::new(authorized_sender).map_err(ServiceError::Construction)?;
        let address = self.executor.write().await.deploy(deployer, Arc::new(guard))?;
        Ok(address)
    }

    /// Deploy a plain value forwarder.
    ///
    /// # Errors
    ///
    /// `ContractAlreadyExists` if the derived address is taken.
    pub async fn deploy_plain_sender(&self, deployer: Address) -> Result<Address, ServiceError> {
        let address = self
            .executor
            .write()
            .await
            .deploy(deployer, Arc::new(PlainSender))?;
        Ok(address)
    }

    /// Credit `amount` to `address` outside any transaction.
    ///
    /// # Errors
    ///
    /// Balance overflow.
    pub async fn fund(&self, address: Address, amount: U256) -> Result<(), ServiceError> {
        self.executor
            .write()
            .await
            .fund(address, amount)
            .map_err(ExecutionError::from)?;
        Ok(())
    }

    /// Execute a transaction and return its receipt, committed or not.
    ///
    /// # Errors
    ///
    /// `Validation` if `gas_limit` exceeds the block gas limit.
    pub async fn execute(
        &self,
        from: Address,
        to: Address,
        value: U256,
        data: Bytes,
        gas_limit: Option<u64>,
    ) -> Result<TransferReceipt, ServiceError> {
        let gas_limit = gas_limit.unwrap_or(self.config.default_gas_limit);
        if gas_limit > self.config.block_gas_limit {
            return Err(ServiceError::Validation(format!(
                "gas limit {gas_limit} exceeds block gas limit {}",
                self.config.block_gas_limit
            )));
        }

        let receipt = {
            let mut executor = self.executor.write().await;
            let before = executor.state().balances();
            let supply_before = executor.state().total_supply();

            let receipt = executor.send_transaction(from, to, value, data, gas_limit);

            let after = executor.state().balances();
            let supply_after = executor.state().total_supply();
            let check =
                check_transfer_invariants(&receipt, &before, &after, supply_before, supply_after);
            if !check.is_ok() {
                for violation in &check.violations {
                    error!(from = %from, to = %to, %violation, "Invariant violated");
                }
                self.stats.write().await.invariant_violations += 1;
            }
            receipt
        };

        self.record(&receipt).await;

        debug!(
            from = %from,
            to = %to,
            value = %value,
            success = receipt.success,
            gas_used = receipt.gas_used,
            "Transfer completed"
        );
        Ok(receipt)
    }

    /// Handle a serialized transfer request.
    ///
    /// Rolled-back transfers are reported in the response, not as `Err`.
    ///
    /// # Errors
    ///
    /// `Validation` for requests that were never executed.
    #[instrument(skip(self, payload), fields(correlation_id = %payload.correlation_id))]
    pub async fn handle_transfer_request(
        &self,
        payload: TransferRequestPayload,
    ) -> Result<TransferResponsePayload, ServiceError> {
        let receipt = self
            .execute(
                payload.from,
                payload.to,
                payload.value,
                payload.data,
                payload.gas_limit,
            )
            .await?;
        Ok(TransferResponsePayload::from_receipt(
            payload.correlation_id,
            &receipt,
        ))
    }

    /// Handle a JSON transfer request and answer in JSON.
    ///
    /// # Errors
    ///
    /// `Serialization` for malformed documents, otherwise as
    /// [`Self::handle_transfer_request`].
    pub async fn handle_json_request(&self, raw: &str) -> Result<String, ServiceError> {
        let payload = TransferRequestPayload::from_json(raw)?;
        self.handle_transfer_request(payload).await?.to_json()
    }

    async fn record(&self, receipt: &TransferReceipt) {
        let mut stats = self.stats.write().await;
        stats.transactions_executed += 1;
        stats.total_gas_used = stats.total_gas_used.saturating_add(receipt.gas_used);
        if receipt.success {
            stats.successful_transfers += 1;
        } else {
            stats.failed_transfers += 1;
            if receipt.revert_error() == Some(ContractError::EthDepositRejected) {
                stats.rejected_deposits += 1;
            }
        }
    }
}

impl Default for TransferService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

#[async_trait]
impl TransferApi for TransferService {
    async fn call(
        &self,
        from: Address,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> Result<TransferReceipt, ServiceError> {
        let receipt = self.execute(from, to, value, data, None).await?;
        Ok(receipt.into_result()?)
    }

    async fn balance_of(&self, address: Address) -> U256 {
        self.executor.read().await.balance(address)
    }
}

// =============================================================================
// TESTS
// =============================================================================
