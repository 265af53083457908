//! # Guarded Receiver
//!
//! Accepts bare value transfers only from one authorized sender fixed at
//! construction. Every other direct transfer reverts with `EthDepositRejected`.
//!
//! The check compares against the direct caller of the frame. A transfer routed
//! through an intermediate contract is judged by that contract's address, not
//! by whoever started the transaction.

use super::Contract;
use crate::domain::entities::CallContext;
use crate::domain::value_objects::{Address, Bytes, GasCounter, Selector};
use crate::errors::{ContractError, ExecutionError};
use crate::host::gas;
use crate::ports::outbound::CallHost;
use tracing::{debug, warn};

/// Value receiver gated on a single authorized sender.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardedReceiver {
    authorized_sender: Address,
}

impl GuardedReceiver {
    /// Binds the authorized sender.
    ///
    /// # Errors
    ///
    /// `ZeroAuthorizedSender` if `authorized_sender` is the zero address.
    pub fn new(authorized_sender: Address) -> Result<Self, ContractError> {
        if authorized_sender.is_zero() {
            return Err(ContractError::ZeroAuthorizedSender);
        }
        Ok(Self { authorized_sender })
    }

    /// The only address allowed to deposit.
    #[must_use]
    pub const fn authorized_sender(&self) -> Address {
        self.authorized_sender
    }

    /// Decides a deposit from `caller`. Amount plays no part.
    ///
    /// # Errors
    ///
    /// `EthDepositRejected` if `caller` is not the authorized sender.
    pub fn check_deposit(&self, caller: Address) -> Result<(), ContractError> {
        if caller == self.authorized_sender {
            Ok(())
        } else {
            Err(ContractError::EthDepositRejected)
        }
    }
}

impl Contract for GuardedReceiver {
    fn name(&self) -> &'static str {
        "GuardedReceiver"
    }

    fn receive(
        &self,
        ctx: &CallContext,
        _host: &mut dyn CallHost,
        gas: &mut GasCounter,
    ) -> Result<(), ExecutionError> {
        gas.charge(gas::GUARD_CHECK)?;

        if let Err(err) = self.check_deposit(ctx.caller) {
            warn!(
                receiver = %ctx.address,
                caller = %ctx.caller,
                value = %ctx.value,
                "Deposit rejected: caller is not the authorized sender"
            );
            return Err(err.into());
        }

        debug!(receiver = %ctx.address, value = %ctx.value, "Deposit accepted");
        Ok(())
    }

    fn call(
        &self,
        ctx: &CallContext,
        _host: &mut dyn CallHost,
        _gas: &mut GasCounter,
    ) -> Result<Bytes, ExecutionError> {
        // No callable functions and no fallback
        let selector = Selector::from_calldata(ctx.data.as_slice())?;
        Err(ContractError::UnknownSelector(selector).into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
