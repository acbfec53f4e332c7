//! Error types for the transfer engine
//!
//! [`TransferError`] covers the failures that are genuinely exceptional:
//! malformed input, file/CSV problems, and a ledger that cannot even be
//! read. Business rejections — insufficient funds, duplicate transaction
//! ids, exhausted retries — are NOT errors; they are ordinary
//! [`crate::types::TransferOutcome`] values returned to the caller.

use crate::types::LedgerRole;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the transfer engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    /// The transaction id was empty
    ///
    /// Transaction ids are caller-supplied idempotency keys and must be
    /// present on every transfer.
    #[error("Transaction id must not be empty")]
    EmptyTransactionId,

    /// The transaction id exceeded the maximum accepted length
    #[error("Transaction id '{id}' exceeds {max} characters")]
    TransactionIdTooLong {
        /// The rejected id
        id: String,
        /// Maximum accepted length
        max: usize,
    },

    /// The transfer amount was zero or negative
    #[error("Transfer amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Amount field is missing for a transfer record
    ///
    /// This is a recoverable error - the record is skipped and processing
    /// continues with the next one.
    #[error("{kind} transfer {tx} requires an amount")]
    MissingAmount {
        /// Transfer kind ("deposit" or "withdraw")
        kind: String,
        /// Transaction id of the record
        tx: String,
    },

    /// Invalid amount value (malformed decimal)
    ///
    /// This is a recoverable error - the record is skipped.
    #[error("Invalid amount '{amount}' for transfer {tx}")]
    InvalidAmount {
        /// The invalid amount string
        amount: String,
        /// Transaction id of the record
        tx: String,
    },

    /// Unrecognized transfer type in the input
    ///
    /// This is a recoverable error - the record is skipped.
    #[error("Invalid transfer type '{kind}' for transfer {tx}")]
    InvalidTransferType {
        /// The invalid transfer type string
        kind: String,
        /// Transaction id of the record
        tx: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A ledger could not serve a balance read
    ///
    /// Balance reads are not subject to the idempotency problem, so this is
    /// treated as fatal and propagated unchanged.
    #[error("The {role} ledger is unavailable: {message}")]
    LedgerUnavailable {
        /// Which ledger failed
        role: LedgerRole,
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for TransferError {
    fn from(error: std::io::Error) -> Self {
        TransferError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TransferError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        TransferError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl TransferError {
    /// Create a MissingAmount error
    pub fn missing_amount(kind: &str, tx: &str) -> Self {
        TransferError::MissingAmount {
            kind: kind.to_string(),
            tx: tx.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, tx: &str) -> Self {
        TransferError::InvalidAmount {
            amount: amount.to_string(),
            tx: tx.to_string(),
        }
    }

    /// Create an InvalidTransferType error
    pub fn invalid_transfer_type(kind: &str, tx: &str) -> Self {
        TransferError::InvalidTransferType {
            kind: kind.to_string(),
            tx: tx.to_string(),
        }
    }

    /// Create a LedgerUnavailable error
    pub fn ledger_unavailable(role: LedgerRole, message: &str) -> Self {
        TransferError::LedgerUnavailable {
            role,
            message: message.to_string(),
        }
    }
}
