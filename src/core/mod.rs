//! Core business logic module
//!
//! This module contains the transfer-orchestration components:
//! - `traits` - The ledger capability contract consumed by the core
//! - `orchestrator` - The two-leg transfer protocol with retries and
//!   compensating rollback

pub mod orchestrator;
pub mod traits;

pub use orchestrator::{LedgerPair, TransferOrchestrator};
pub use traits::BalanceLedger;
