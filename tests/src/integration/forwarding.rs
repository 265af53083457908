//! # Direct-Caller Semantics
//!
//! The guard judges the frame's direct caller, never the transaction origin.
//! Routing value through a forwarder changes who the receiver sees.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{deploy_mocks, deployer, signer, Authorized, SIGNER_BALANCE};
    use qc_weth_receiver::prelude::*;

    #[tokio::test]
    async fn test_authorized_signer_cannot_deposit_through_forwarder() {
        // Receiver trusts signer 1, but the forwarder is the direct caller
        let mocks = deploy_mocks(Authorized::Account(signer(1))).await;

        let err = mocks
            .service
            .forward_via(signer(1), mocks.sender, mocks.receiver, U256::from(100))
            .await
            .unwrap_err();

        assert_eq!(
            err.contract_error(),
            Some(&ContractError::EthDepositRejected)
        );
    }

    #[tokio::test]
    async fn test_unrelated_forwarder_is_rejected() {
        let mocks = deploy_mocks(Authorized::Sender).await;
        let other_sender = mocks
            .service
            .deploy_plain_sender(deployer())
            .await
            .unwrap();

        let err = mocks
            .service
            .forward_via(signer(2), other_sender, mocks.receiver, U256::from(100))
            .await
            .unwrap_err();

        assert_eq!(
            err.contract_error(),
            Some(&ContractError::EthDepositRejected)
        );
        // The value credited to the forwarder is rolled back as well
        assert_eq!(mocks.service.balance_of(other_sender).await, U256::zero());
        assert_eq!(
            mocks.service.balance_of(signer(2)).await,
            U256::from(SIGNER_BALANCE)
        );
    }

    #[tokio::test]
    async fn test_forwarder_to_plain_account_succeeds() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        mocks
            .service
            .forward_via(signer(1), mocks.sender, signer(4), U256::from(10))
            .await
            .unwrap();

        assert_eq!(
            mocks.service.balance_of(signer(4)).await,
            U256::from(SIGNER_BALANCE + 10)
        );
    }

    #[tokio::test]
    async fn test_forwarder_refuses_bare_transfers() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        let err = mocks
            .service
            .send_value(signer(1), mocks.sender, U256::from(10))
            .await
            .unwrap_err();

        assert_eq!(err.contract_error(), Some(&ContractError::NoReceiveHandler));
    }

    #[tokio::test]
    async fn test_receiver_exposes_no_functions() {
        let mocks = deploy_mocks(Authorized::Sender).await;

        let err = mocks
            .service
            .call(
                signer(1),
                mocks.receiver,
                U256::zero(),
                PlainSender::transfer_calldata(signer(2)),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err.contract_error(),
            Some(ContractError::UnknownSelector(_))
        ));
    }

    #[tokio::test]
    async fn test_forwarding_out_of_gas_rolls_back() {
        let mocks = deploy_mocks(Authorized::Sender).await;
        let data = PlainSender::transfer_calldata(mocks.receiver);

        // Enough for the intrinsic cost and forwarder entry, not for the value call
        let receipt = mocks
            .service
            .execute(signer(1), mocks.sender, U256::from(100), data, Some(23_000))
            .await
            .unwrap();

        assert_eq!(receipt.error, Some(ExecutionError::OutOfGas));
        assert_eq!(receipt.gas_used, 23_000);
        assert_eq!(mocks.service.balance_of(mocks.receiver).await, U256::zero());
        assert_eq!(
            mocks.service.balance_of(signer(1)).await,
            U256::from(SIGNER_BALANCE)
        );
    }
}
