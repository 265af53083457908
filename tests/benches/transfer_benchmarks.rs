//! # Transfer Benchmarks
//!
//! | Path | What is measured |
//! |------|------------------|
//! | Forwarded deposit | Two frames, both committed |
//! | Direct deposit | One frame, guard rejection and rollback |
//! | Plain transfer | One frame, no contract logic |

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qc_weth_receiver::prelude::*;
use std::sync::Arc;

const GAS: u64 = 100_000;

fn signer() -> Address {
    Address::new([0x5A; 20])
}

fn deployer() -> Address {
    Address::new([0xDE; 20])
}

/// Executor with a funded signer, a forwarder and a receiver trusting it.
fn setup() -> (Executor<InMemoryLedger>, Address, Address) {
    let ledger = InMemoryLedger::with_balances([(signer(), U256::MAX / 2)]);
    let mut host = Executor::new(ledger, VmConfig::default());
    let sender = host
        .deploy(deployer(), Arc::new(PlainSender))
        .expect("deploy PlainSender");
    let guard = GuardedReceiver::new(sender).expect("non-zero sender");
    let receiver = host
        .deploy(deployer(), Arc::new(guard))
        .expect("deploy GuardedReceiver");
    (host, sender, receiver)
}

fn bench_deposits(c: &mut Criterion) {
    let mut group = c.benchmark_group("guarded-receiver");

    let (mut host, sender, receiver) = setup();
    let calldata = PlainSender::transfer_calldata(receiver);
    group.bench_function("forwarded_deposit", |b| {
        b.iter(|| {
            let receipt =
                host.send_transaction(signer(), sender, U256::one(), calldata.clone(), GAS);
            black_box(receipt.success)
        })
    });

    let (mut host, _, receiver) = setup();
    group.bench_function("direct_deposit_rejected", |b| {
        b.iter(|| {
            let receipt = host.send_transaction(signer(), receiver, U256::one(), Bytes::new(), GAS);
            black_box(receipt.success)
        })
    });

    let (mut host, _, _) = setup();
    group.bench_function("plain_transfer", |b| {
        b.iter(|| {
            let receipt =
                host.send_transaction(signer(), deployer(), U256::one(), Bytes::new(), GAS);
            black_box(receipt.success)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_deposits);
criterion_main!(benches);
