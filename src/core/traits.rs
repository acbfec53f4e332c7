//! The ledger capability contract consumed by the transfer orchestrator
//!
//! Each of the two balance stores (game and casino) is an external
//! collaborator satisfying this small contract. The orchestrator never
//! reaches into ledger internals; every interaction goes through these five
//! operations.

use crate::types::{LedgerStatus, TransactionId, TransferError};
use rust_decimal::Decimal;

/// A single balance store supporting idempotent, compensable mutations
///
/// Contract:
///
/// - Every mutating operation may report the ambiguous
///   [`LedgerStatus::UnknownError`] — the operation may or may not have taken
///   effect (e.g. a timeout). `check_transaction` is the only way to resolve
///   that ambiguity and must be strongly consistent with prior mutating
///   calls on the same ledger.
/// - The ledger tracks transaction ids itself: a replayed mutation for a
///   known id must not apply twice.
/// - `rollback` must be safe to call repeatedly for the same id.
///
/// All methods take `&self`: one ledger instance serves many concurrent
/// transfer invocations, so implementations manage their own interior
/// synchronization.
pub trait BalanceLedger {
    /// Current balance of this ledger
    ///
    /// # Errors
    ///
    /// Returns an error if the balance cannot be read at all; balance reads
    /// have no ambiguity to resolve, so failures are fatal.
    fn balance(&self) -> Result<Decimal, TransferError>;

    /// Add `amount` to the balance, recorded under `transaction_id`
    fn increase(&self, amount: Decimal, transaction_id: &TransactionId) -> LedgerStatus;

    /// Subtract `amount` from the balance, recorded under `transaction_id`
    ///
    /// Reports [`LedgerStatus::NotEnoughBalance`] when the balance cannot
    /// cover the amount; nothing is recorded in that case.
    fn decrease(&self, amount: Decimal, transaction_id: &TransactionId) -> LedgerStatus;

    /// Report what this ledger knows about a transaction id
    ///
    /// [`LedgerStatus::TransactionNotFound`] if the id was never applied,
    /// [`LedgerStatus::Success`] if it was applied, and
    /// [`LedgerStatus::TransactionRollbacked`] if it was applied and later
    /// rolled back.
    fn check_transaction(&self, transaction_id: &TransactionId) -> LedgerStatus;

    /// Reverse a previously applied mutation for `transaction_id`
    ///
    /// Idempotent compensation: the first call reverses the movement and
    /// reports [`LedgerStatus::Success`]; repeat calls report
    /// [`LedgerStatus::TransactionRollbacked`].
    fn rollback(&self, transaction_id: &TransactionId) -> LedgerStatus;
}
