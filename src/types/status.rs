//! Status and outcome taxonomy
//!
//! Two closed enumerations drive the transfer protocol:
//!
//! - [`LedgerStatus`] is what a single ledger call reports, including the
//!   ambiguous [`LedgerStatus::UnknownError`] where the call may or may not
//!   have taken effect.
//! - [`TransferOutcome`] is the final result of a whole transfer, returned
//!   once per request and never mutated after construction.
//!
//! Business rejections (insufficient funds, duplicate transaction) are
//! ordinary values of these enums, not errors — see `types::error` for the
//! distinction.

use std::fmt;

/// Result of a single ledger capability call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerStatus {
    /// The operation definitely took effect
    Success,
    /// Definite rejection: the balance cannot cover the requested decrease
    NotEnoughBalance,
    /// Ambiguous failure: the operation may or may not have taken effect.
    /// Only `check_transaction` can resolve this.
    UnknownError,
    /// The ledger has no record of the transaction id
    TransactionNotFound,
    /// The transaction was applied and later rolled back
    TransactionRollbacked,
}

impl LedgerStatus {
    /// Stable name of the status, used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            LedgerStatus::Success => "Success",
            LedgerStatus::NotEnoughBalance => "NotEnoughBalance",
            LedgerStatus::UnknownError => "UnknownError",
            LedgerStatus::TransactionNotFound => "TransactionNotFound",
            LedgerStatus::TransactionRollbacked => "TransactionRollbacked",
        }
    }
}

impl fmt::Display for LedgerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final outcome of a transfer
///
/// A closed set of result codes; exactly one is returned per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Both legs of the transfer were applied
    Success,
    /// The source ledger rejected the decrease for lack of funds
    NotEnoughBalance,
    /// A ledger reported a definite, non-retryable failure
    UnknownError,
    /// The retry budget ran out while the operation's effect was still
    /// undetermined. The transfer is in an indeterminate state: retry it
    /// later with the SAME transaction id (safe thanks to the per-ledger
    /// duplicate check), never with a fresh one.
    TransactionNotFound,
    /// The source ledger already has a record for this transaction id; no
    /// mutation was attempted
    DuplicateTransactionId,
    /// The transaction was rolled back
    TransactionRollbacked,
}

impl TransferOutcome {
    /// Stable name of the outcome, used in the output CSV
    pub fn as_str(self) -> &'static str {
        match self {
            TransferOutcome::Success => "Success",
            TransferOutcome::NotEnoughBalance => "NotEnoughBalance",
            TransferOutcome::UnknownError => "UnknownError",
            TransferOutcome::TransactionNotFound => "TransactionNotFound",
            TransferOutcome::DuplicateTransactionId => "DuplicateTransactionId",
            TransferOutcome::TransactionRollbacked => "TransactionRollbacked",
        }
    }
}

impl fmt::Display for TransferOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LedgerStatus> for TransferOutcome {
    fn from(status: LedgerStatus) -> Self {
        match status {
            LedgerStatus::Success => TransferOutcome::Success,
            LedgerStatus::NotEnoughBalance => TransferOutcome::NotEnoughBalance,
            LedgerStatus::UnknownError => TransferOutcome::UnknownError,
            LedgerStatus::TransactionNotFound => TransferOutcome::TransactionNotFound,
            LedgerStatus::TransactionRollbacked => TransferOutcome::TransactionRollbacked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::success(TransferOutcome::Success, "Success")]
    #[case::not_enough_balance(TransferOutcome::NotEnoughBalance, "NotEnoughBalance")]
    #[case::unknown_error(TransferOutcome::UnknownError, "UnknownError")]
    #[case::transaction_not_found(TransferOutcome::TransactionNotFound, "TransactionNotFound")]
    #[case::duplicate(TransferOutcome::DuplicateTransactionId, "DuplicateTransactionId")]
    #[case::rollbacked(TransferOutcome::TransactionRollbacked, "TransactionRollbacked")]
    fn test_outcome_display(#[case] outcome: TransferOutcome, #[case] expected: &str) {
        assert_eq!(outcome.to_string(), expected);
    }

    #[rstest]
    #[case(LedgerStatus::Success, TransferOutcome::Success)]
    #[case(LedgerStatus::NotEnoughBalance, TransferOutcome::NotEnoughBalance)]
    #[case(LedgerStatus::UnknownError, TransferOutcome::UnknownError)]
    #[case(LedgerStatus::TransactionNotFound, TransferOutcome::TransactionNotFound)]
    #[case(LedgerStatus::TransactionRollbacked, TransferOutcome::TransactionRollbacked)]
    fn test_status_to_outcome_conversion(
        #[case] status: LedgerStatus,
        #[case] expected: TransferOutcome,
    ) {
        assert_eq!(TransferOutcome::from(status), expected);
    }
}
