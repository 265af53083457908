//! # qc-weth-receiver Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs             # Deployment fixtures and signers
//!     ├── weth_receiver_flows.rs  # Contract vs. normal transfer scenarios
//!     ├── forwarding.rs           # Direct-caller semantics through forwarders
//!     └── properties.rs           # Randomized acceptance/rejection/atomicity
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p qc-tests
//! cargo test -p qc-tests integration::properties::
//! cargo bench -p qc-tests
//! ```

#![allow(dead_code)]
