//! # Guarded Receiver Flows
//!
//! The two canonical paths plus the zero-value edge:
//!
//! 1. **Contract transfer**: signer → `PlainSender.transfer(receiver)` → receiver; accepted
//! 2. **Normal transfer**: signer → receiver directly; `EthDepositRejected`
//! 3. **Zero value from the authorized signer**: accepted as a no-op

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{deploy_mocks, signer, Authorized, SIGNER_BALANCE};
    use qc_weth_receiver::prelude::*;

    #[tokio::test]
    async fn test_contract_transfer() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        let receipt = mocks
            .service
            .forward_via(signer(1), mocks.sender, mocks.receiver, U256::from(100))
            .await
            .expect("forwarded deposit must be accepted");

        assert!(receipt.success);
        assert_eq!(
            mocks.service.balance_of(mocks.receiver).await,
            U256::from(100)
        );
        // Pure pass-through: nothing sticks to the forwarder
        assert_eq!(mocks.service.balance_of(mocks.sender).await, U256::zero());
        assert_eq!(
            mocks.service.balance_of(signer(1)).await,
            U256::from(SIGNER_BALANCE - 100)
        );
    }

    #[tokio::test]
    async fn test_normal_transfer() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        let err = mocks
            .service
            .send_value(signer(1), mocks.receiver, U256::from(100))
            .await
            .expect_err("direct deposit must be rejected");

        assert_eq!(
            err.contract_error(),
            Some(&ContractError::EthDepositRejected)
        );
        assert_eq!(mocks.service.balance_of(mocks.receiver).await, U256::zero());
        assert_eq!(
            mocks.service.balance_of(signer(1)).await,
            U256::from(SIGNER_BALANCE)
        );
    }

    #[tokio::test]
    async fn test_zero_value_from_authorized_signer() {
        let mocks = deploy_mocks(Authorized::Account(signer(1))).await;

        let receipt = mocks
            .service
            .send_value(signer(1), mocks.receiver, U256::zero())
            .await
            .expect("zero-value deposit from the authorized signer is a no-op");

        assert!(receipt.success);
        assert_eq!(mocks.service.balance_of(mocks.receiver).await, U256::zero());
    }

    #[tokio::test]
    async fn test_authorized_signer_deposits_directly() {
        let mocks = deploy_mocks(Authorized::Account(signer(2))).await;

        mocks
            .service
            .send_value(signer(2), mocks.receiver, U256::from(250))
            .await
            .unwrap();

        assert_eq!(
            mocks.service.balance_of(mocks.receiver).await,
            U256::from(250)
        );
    }

    #[tokio::test]
    async fn test_rejection_is_named_in_revert_data() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        let receipt = mocks
            .service
            .execute(signer(1), mocks.receiver, U256::from(100), Bytes::new(), None)
            .await
            .unwrap();

        assert!(!receipt.success);
        assert_eq!(
            receipt.output,
            ContractError::EthDepositRejected.revert_data()
        );
        assert_eq!(
            receipt.output.as_slice(),
            &function_selector("EthDepositRejected()").0
        );
    }

    #[tokio::test]
    async fn test_json_round_trip_rejection() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        let request = TransferRequestPayload::bare(signer(3), mocks.receiver, U256::from(42));
        let raw = serde_json::to_string(&request).unwrap();
        let answer = mocks.service.handle_json_request(&raw).await.unwrap();
        let response: TransferResponsePayload = serde_json::from_str(&answer).unwrap();

        assert_eq!(response.correlation_id, request.correlation_id);
        assert!(!response.success);
        assert_eq!(response.revert_error.as_deref(), Some("EthDepositRejected"));
    }

    #[tokio::test]
    async fn test_stats_track_both_paths() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        mocks
            .service
            .forward_via(signer(1), mocks.sender, mocks.receiver, U256::from(1))
            .await
            .unwrap();
        let _ = mocks
            .service
            .send_value(signer(1), mocks.receiver, U256::from(1))
            .await;

        let stats = mocks.service.stats().await;
        assert_eq!(stats.transactions_executed, 2);
        assert_eq!(stats.successful_transfers, 1);
        assert_eq!(stats.rejected_deposits, 1);
        assert_eq!(stats.invariant_violations, 0);
    }
}
