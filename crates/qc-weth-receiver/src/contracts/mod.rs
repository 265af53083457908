//! # Contracts
//!
//! Native contract logic hosted by the executor.
//!
//! Every contract exposes two entry points: `receive` for bare transfers
//! (empty calldata) and `call` for payload-carrying calls. The host credits the
//! transferred value before either entry point runs and rolls the whole frame
//! back if the entry point fails.

pub mod guarded_receiver;
pub mod plain_sender;

pub use guarded_receiver::GuardedReceiver;
pub use plain_sender::PlainSender;

use crate::domain::entities::CallContext;
use crate::domain::value_objects::{Bytes, GasCounter};
use crate::errors::ExecutionError;
use crate::ports::outbound::CallHost;
use std::fmt;

/// Contract logic bound to an address inside the host.
pub trait Contract: Send + Sync + fmt::Debug {
    /// Human-readable contract name for logs.
    fn name(&self) -> &'static str;

    /// Bare-transfer entry point.
    ///
    /// # Errors
    ///
    /// Any error rolls back the transfer.
    fn receive(
        &self,
        ctx: &CallContext,
        host: &mut dyn CallHost,
        gas: &mut GasCounter,
    ) -> Result<(), ExecutionError>;

    /// Payload-carrying entry point.
    ///
    /// # Errors
    ///
    /// Any error rolls back the call, including value the call moved.
    fn call(
        &self,
        ctx: &CallContext,
        host: &mut dyn CallHost,
        gas: &mut GasCounter,
    ) -> Result<Bytes, ExecutionError>;
}
