//! # Driving Ports (API - Inbound)
//!
//! The interface external initiators use to move value.

use crate::contracts::PlainSender;
use crate::domain::entities::TransferReceipt;
use crate::domain::value_objects::{Address, Bytes, U256};
use crate::errors::ServiceError;
use async_trait::async_trait;

/// Primary API for value transfers.
///
/// Every method returns `Err` when the transfer was rolled back; the ledger is
/// then exactly as it was before the call.
///
/// ## Usage
///
/// ```ignore
/// // Routed through the authorized forwarder: accepted
/// api.forward_via(signer, sender, receiver, U256::from(100)).await?;
///
/// // Direct: rejected with EthDepositRejected
/// let err = api.send_value(signer, receiver, U256::from(100)).await.unwrap_err();
/// ```
#[async_trait]
pub trait TransferApi: Send + Sync {
    /// Execute a call carrying `data` and `value`.
    async fn call(
        &self,
        from: Address,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> Result<TransferReceipt, ServiceError>;

    /// Balance held by `address`.
    async fn balance_of(&self, address: Address) -> U256;

    /// Bare transfer: value with no instruction payload.
    async fn send_value(
        &self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<TransferReceipt, ServiceError> {
        self.call(from, to, value, Bytes::new()).await
    }

    /// Invoke `PlainSender.transfer(target)` on `sender` with `value` attached.
    async fn forward_via(
        &self,
        from: Address,
        sender: Address,
        target: Address,
        value: U256,
    ) -> Result<TransferReceipt, ServiceError> {
        self.call(from, sender, value, PlainSender::transfer_calldata(target))
            .await
    }
}
