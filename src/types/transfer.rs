//! Transfer-related types for the transfer engine
//!
//! This module defines the transaction identifier, the immutable transfer
//! request, and the direction/role enumerations that select which ledger
//! plays source and which plays destination.

use crate::types::TransferError;
use rust_decimal::Decimal;
use std::fmt;

/// Caller-supplied idempotency key for a transfer
///
/// Each ledger tracks transaction ids independently and uses them to detect
/// and reject duplicate requests. Validated at construction: non-empty and
/// at most [`TransactionId::MAX_LEN`] characters. Once constructed the id
/// is immutable, so downstream code never needs to re-validate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    /// Maximum accepted length of a transaction id, in characters
    pub const MAX_LEN: usize = 16;

    /// Create a validated transaction id
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or longer than [`Self::MAX_LEN`].
    pub fn new(id: impl Into<String>) -> Result<Self, TransferError> {
        let id = id.into();

        if id.is_empty() {
            return Err(TransferError::EmptyTransactionId);
        }

        if id.chars().count() > Self::MAX_LEN {
            return Err(TransferError::TransactionIdTooLong {
                id,
                max: Self::MAX_LEN,
            });
        }

        Ok(TransactionId(id))
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single funds-transfer request
///
/// Immutable once constructed; created by the caller and consumed once by
/// the orchestrator. Construction enforces a strictly positive amount, so a
/// zero or negative amount can never reach the transfer algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    transaction_id: TransactionId,
    amount: Decimal,
}

impl TransferRequest {
    /// Create a validated transfer request
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or negative.
    pub fn new(transaction_id: TransactionId, amount: Decimal) -> Result<Self, TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::NonPositiveAmount { amount });
        }

        Ok(TransferRequest {
            transaction_id,
            amount,
        })
    }

    /// The idempotency key for this transfer
    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    /// The amount to move, always strictly positive
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// The role a ledger plays in the system
///
/// Exactly two ledgers exist; the orchestrator resolves each role once at
/// construction and never swaps them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerRole {
    /// The game balance ledger
    Game,
    /// The casino balance ledger
    Casino,
}

impl fmt::Display for LedgerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerRole::Game => f.write_str("game"),
            LedgerRole::Casino => f.write_str("casino"),
        }
    }
}

/// Direction of a transfer between the two ledgers
///
/// The direction selects which ledger is decreased first (the source) and
/// which is increased second (the destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    /// Move funds from the game ledger into the casino ledger
    Deposit,
    /// Move funds from the casino ledger back into the game ledger
    Withdraw,
}

impl TransferDirection {
    /// The ledger that is decreased in leg 1
    pub fn source(self) -> LedgerRole {
        match self {
            TransferDirection::Deposit => LedgerRole::Game,
            TransferDirection::Withdraw => LedgerRole::Casino,
        }
    }

    /// The ledger that is increased in leg 2
    pub fn destination(self) -> LedgerRole {
        match self {
            TransferDirection::Deposit => LedgerRole::Casino,
            TransferDirection::Withdraw => LedgerRole::Game,
        }
    }
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferDirection::Deposit => f.write_str("deposit"),
            TransferDirection::Withdraw => f.write_str("withdraw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single_char("1")]
    #[case::typical("12")]
    #[case::max_length("1234567890123456")]
    fn test_transaction_id_accepts_valid(#[case] id: &str) {
        let result = TransactionId::new(id);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), id);
    }

    #[rstest]
    #[case::empty("", TransferError::EmptyTransactionId)]
    #[case::too_long(
        "12345678901234567",
        TransferError::TransactionIdTooLong { id: "12345678901234567".to_string(), max: 16 }
    )]
    fn test_transaction_id_rejects_invalid(#[case] id: &str, #[case] expected: TransferError) {
        assert_eq!(TransactionId::new(id), Err(expected));
    }

    #[rstest]
    #[case::positive(Decimal::new(10100, 1), true)]
    #[case::one_cent(Decimal::new(1, 2), true)]
    #[case::zero(Decimal::ZERO, false)]
    #[case::negative(Decimal::new(-5, 0), false)]
    fn test_transfer_request_amount_validation(#[case] amount: Decimal, #[case] ok: bool) {
        let id = TransactionId::new("12").unwrap();
        assert_eq!(TransferRequest::new(id, amount).is_ok(), ok);
    }

    #[rstest]
    #[case::deposit(TransferDirection::Deposit, LedgerRole::Game, LedgerRole::Casino)]
    #[case::withdraw(TransferDirection::Withdraw, LedgerRole::Casino, LedgerRole::Game)]
    fn test_direction_role_selection(
        #[case] direction: TransferDirection,
        #[case] source: LedgerRole,
        #[case] destination: LedgerRole,
    ) {
        assert_eq!(direction.source(), source);
        assert_eq!(direction.destination(), destination);
    }
}
