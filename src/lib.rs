//! Transfer Engine Library
//! # Overview
//!
//! This library moves funds between two independently-owned balance ledgers
//! (a "game" ledger and a "casino" ledger) that cannot share an atomic
//! transaction, guaranteeing effectively-exactly-once transfers with no
//! lost money.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionId, TransferRequest, outcome codes)
//! - [`config`] - The retry policy loaded once at process start
//! - [`core`] - Business logic components:
//!   - [`core::traits`] - The ledger capability contract
//!   - [`core::orchestrator`] - The two-leg transfer protocol
//! - [`ledger`] - Concrete ledger implementations
//! - [`io`] - CSV input/output for the batch driver
//! - [`cli`] - CLI argument parsing
//! - [`runner`] - The batch transfer pipeline
//!
//! # Transfer protocol
//!
//! A transfer runs in two legs: decrease the source ledger, then increase
//! the destination ledger. Each ledger call may fail ambiguously; the
//! orchestrator disambiguates through the ledger's own transaction record
//! and retries within configured bounds. If the second leg fails after the
//! first was applied, the source ledger is compensated with a rollback —
//! the caller still receives the second leg's failure code.
//!
//! Every transfer carries a caller-supplied transaction id that both
//! ledgers track independently, making replays detectable and retries of
//! indeterminate transfers safe as long as the same id is reused.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod ledger;
pub mod runner;
pub mod types;

pub use config::RetryPolicy;
pub use self::core::{BalanceLedger, LedgerPair, TransferOrchestrator};
pub use ledger::InMemoryLedger;
pub use types::{
    LedgerRole, LedgerStatus, TransactionId, TransferDirection, TransferError, TransferOutcome,
    TransferRequest,
};
