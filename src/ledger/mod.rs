//! Ledger implementations
//!
//! Concrete balance stores satisfying the `BalanceLedger` capability
//! contract. Currently a single in-memory implementation backs both the
//! game and casino roles.

pub mod in_memory;

pub use in_memory::InMemoryLedger;
