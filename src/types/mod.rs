//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transfer`: Transaction ids, transfer requests, directions and roles
//! - `status`: Ledger statuses and transfer outcome codes
//! - `error`: Error types for the transfer engine

pub mod error;
pub mod status;
pub mod transfer;

pub use error::TransferError;
pub use status::{LedgerStatus, TransferOutcome};
pub use transfer::{LedgerRole, TransactionId, TransferDirection, TransferRequest};
