//! # Randomized Properties
//!
//! Seeded random sweeps over values and identities:
//!
//! - authorized deposits always land, by exactly the sent amount
//! - every other direct depositor is rejected and nothing moves
//! - a forwarder succeeds exactly when it is the authorized identity
//! - rejections leave every observed balance untouched

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::{deploy_mocks, deployer, signer, Authorized, SIGNER_BALANCE};
    use qc_weth_receiver::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const ROUNDS: usize = 64;

    fn random_value(rng: &mut StdRng) -> U256 {
        // Zero shows up often enough to be exercised
        if rng.gen_bool(0.1) {
            U256::zero()
        } else {
            U256::from(rng.gen_range(1..=SIGNER_BALANCE / 1_000))
        }
    }

    fn random_identity(rng: &mut StdRng, excluded: Address) -> Address {
        loop {
            let candidate = Address::new(rng.gen::<[u8; 20]>());
            if candidate != excluded && !candidate.is_zero() {
                return candidate;
            }
        }
    }

    #[tokio::test]
    async fn prop_authorized_deposits_are_accepted() {
        let mut rng = StdRng::seed_from_u64(0xA11CE);
        let mocks = deploy_mocks(Authorized::Account(signer(1))).await;
        let mut expected = U256::zero();

        for _ in 0..ROUNDS {
            let value = random_value(&mut rng);
            mocks
                .service
                .send_value(signer(1), mocks.receiver, value)
                .await
                .unwrap();
            expected += value;
            assert_eq!(mocks.service.balance_of(mocks.receiver).await, expected);
        }
    }

    #[tokio::test]
    async fn prop_unauthorized_deposits_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0xB0B);
        let mocks = deploy_mocks(Authorized::Sender).await;

        for _ in 0..ROUNDS {
            let intruder = random_identity(&mut rng, mocks.sender);
            mocks
                .service
                .fund(intruder, U256::from(SIGNER_BALANCE))
                .await
                .unwrap();
            let value = random_value(&mut rng);

            let watched = [intruder, mocks.receiver, mocks.sender];
            let before = mocks.balances(&watched).await;

            let err = mocks
                .service
                .send_value(intruder, mocks.receiver, value)
                .await
                .unwrap_err();

            assert_eq!(
                err.contract_error(),
                Some(&ContractError::EthDepositRejected)
            );
            assert_eq!(mocks.balances(&watched).await, before);
        }
        assert_eq!(mocks.service.stats().await.rejected_deposits, ROUNDS as u64);
    }

    #[tokio::test]
    async fn prop_forwarder_succeeds_iff_authorized() {
        let mut rng = StdRng::seed_from_u64(0xF0F0);
        let mocks = deploy_mocks(Authorized::Sender).await;
        // Same forwarder, but a receiver that trusts someone else
        let foreign = mocks
            .service
            .deploy_guarded_receiver(deployer(), signer(4))
            .await
            .unwrap();

        for _ in 0..ROUNDS {
            let value = random_value(&mut rng);
            let origin = signer(rng.gen_range(1..=3));

            let accepted = mocks
                .service
                .forward_via(origin, mocks.sender, mocks.receiver, value)
                .await;
            assert!(accepted.is_ok(), "{accepted:?}");

            let refused = mocks
                .service
                .forward_via(origin, mocks.sender, foreign, value)
                .await
                .unwrap_err();
            assert_eq!(
                refused.contract_error(),
                Some(&ContractError::EthDepositRejected)
            );
            assert_eq!(mocks.service.balance_of(mocks.sender).await, U256::zero());
            assert_eq!(mocks.service.balance_of(foreign).await, U256::zero());
        }
    }

    #[tokio::test]
    async fn prop_rejections_are_atomic() {
        let mut rng = StdRng::seed_from_u64(0xA70);
        let mocks = deploy_mocks(Authorized::Sender).await;
        let watched = [
            signer(1),
            signer(2),
            signer(3),
            signer(4),
            mocks.sender,
            mocks.receiver,
        ];

        for _ in 0..ROUNDS {
            let origin = signer(rng.gen_range(1..=4));
            let value = random_value(&mut rng);
            let before = mocks.balances(&watched).await;

            // Mix of accepted forwards and rejected direct deposits
            let result = if rng.gen_bool(0.5) {
                mocks
                    .service
                    .forward_via(origin, mocks.sender, mocks.receiver, value)
                    .await
            } else {
                mocks.service.send_value(origin, mocks.receiver, value).await
            };

            let after = mocks.balances(&watched).await;
            match result {
                Ok(_) => {
                    let total_before = before.iter().fold(U256::zero(), |acc, b| acc + *b);
                    let total_after = after.iter().fold(U256::zero(), |acc, b| acc + *b);
                    assert_eq!(total_before, total_after);
                }
                Err(_) => assert_eq!(after, before),
            }
        }

        let stats = mocks.service.stats().await;
        assert_eq!(stats.transactions_executed, ROUNDS as u64);
        assert_eq!(stats.invariant_violations, 0);
    }
}
