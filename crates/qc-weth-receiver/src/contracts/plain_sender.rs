//! # Plain Sender
//!
//! Stateless forwarder: `transfer(address)` passes the attached value on to the
//! target as a bare transfer, hands it all remaining gas and re-raises the
//! target's failure unchanged.

use super::Contract;
use crate::domain::entities::CallContext;
use crate::domain::services::{
    decode_address_word, encode_address_word, function_selector, WORD_SIZE,
};
use crate::domain::value_objects::{Address, Bytes, GasCounter, Selector};
use crate::errors::{ContractError, ExecutionError};
use crate::host::gas;
use crate::ports::outbound::CallHost;
use tracing::debug;

/// Value forwarder with no acceptance logic of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainSender;

impl PlainSender {
    /// Signature of the only callable function.
    pub const TRANSFER_SIGNATURE: &'static str = "transfer(address)";

    /// Selector of `transfer(address)`.
    #[must_use]
    pub fn transfer_selector() -> Selector {
        function_selector(Self::TRANSFER_SIGNATURE)
    }

    /// Calldata for `transfer(target)`.
    #[must_use]
    pub fn transfer_calldata(target: Address) -> Bytes {
        let mut data = Vec::with_capacity(4 + WORD_SIZE);
        data.extend_from_slice(Self::transfer_selector().as_bytes());
        data.extend_from_slice(&encode_address_word(target));
        Bytes::from(data)
    }

    fn decode_transfer(data: &[u8]) -> Result<Address, ContractError> {
        let selector = Selector::from_calldata(data)?;
        if selector != Self::transfer_selector() {
            return Err(ContractError::UnknownSelector(selector));
        }
        decode_address_word(&data[4..])
    }
}

impl Contract for PlainSender {
    fn name(&self) -> &'static str {
        "PlainSender"
    }

    fn receive(
        &self,
        _ctx: &CallContext,
        _host: &mut dyn CallHost,
        _gas: &mut GasCounter,
    ) -> Result<(), ExecutionError> {
        Err(ContractError::NoReceiveHandler.into())
    }

    fn call(
        &self,
        ctx: &CallContext,
        host: &mut dyn CallHost,
        gas: &mut GasCounter,
    ) -> Result<Bytes, ExecutionError> {
        let target = Self::decode_transfer(ctx.data.as_slice())?;
        gas.charge(gas::nested_call_cost(ctx.value))?;

        debug!(
            sender = %ctx.address,
            target = %target,
            value = %ctx.value,
            "Forwarding value"
        );

        let child = ctx.child_call(target, ctx.value, Bytes::new());
        let mut child_gas = gas.forward_all();
        let result = host.call(&child, &mut child_gas);
        // The child only ever spends what it was handed
        gas.consume(child_gas.used());

        result.map(|_| Bytes::new())
    }
}

// =============================================================================
// TESTS
// =============================================================================
