//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Ports (Inbound)**: `TransferApi`
//! - **Driven Ports (Outbound)**: `StateAccess`, `CallHost`

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
