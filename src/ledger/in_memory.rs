//! In-memory ledger implementation
//!
//! A concurrent balance store satisfying the [`BalanceLedger`] capability
//! contract. The balance lives behind a mutex; the per-transaction-id
//! records live in a concurrent map so many transfers can consult and
//! mutate the ledger at once.
//!
//! Idempotency lives in the ledger, not in the orchestrator: a replayed
//! mutation for a known transaction id applies nothing and reports the
//! recorded status, and a rollback reverses an applied movement exactly
//! once no matter how often it is called.

use crate::core::traits::BalanceLedger;
use crate::types::{LedgerRole, LedgerStatus, TransactionId, TransferError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::Mutex;

/// Direction of an applied balance movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Movement {
    Increase,
    Decrease,
}

/// Lifecycle state of a recorded transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    Applied,
    RolledBack,
}

/// What the ledger remembers about one transaction id
#[derive(Debug, Clone)]
struct TransactionRecord {
    movement: Movement,
    amount: Decimal,
    state: RecordState,
}

impl TransactionRecord {
    fn applied(movement: Movement, amount: Decimal) -> Self {
        TransactionRecord {
            movement,
            amount,
            state: RecordState::Applied,
        }
    }

    fn status(&self) -> LedgerStatus {
        match self.state {
            RecordState::Applied => LedgerStatus::Success,
            RecordState::RolledBack => LedgerStatus::TransactionRollbacked,
        }
    }
}

/// A single in-memory balance ledger
///
/// One instance plays one role (game or casino). Safe for concurrent use:
/// the transaction table is a `DashMap` and the balance cell is
/// mutex-guarded, so `&self` methods can be called from many threads.
pub struct InMemoryLedger {
    role: LedgerRole,
    balance: Mutex<Decimal>,
    transactions: DashMap<String, TransactionRecord>,
}

impl InMemoryLedger {
    /// Create a ledger for the given role with an opening balance
    pub fn new(role: LedgerRole, opening_balance: Decimal) -> Self {
        InMemoryLedger {
            role,
            balance: Mutex::new(opening_balance),
            transactions: DashMap::new(),
        }
    }

    /// The role this ledger plays
    pub fn role(&self) -> LedgerRole {
        self.role
    }
}

impl BalanceLedger for InMemoryLedger {
    fn balance(&self) -> Result<Decimal, TransferError> {
        self.balance
            .lock()
            .map(|balance| *balance)
            .map_err(|_| TransferError::ledger_unavailable(self.role, "balance lock poisoned"))
    }

    fn increase(&self, amount: Decimal, transaction_id: &TransactionId) -> LedgerStatus {
        match self.transactions.entry(transaction_id.as_str().to_owned()) {
            // Replay of a known id: report its recorded status, apply nothing.
            Entry::Occupied(entry) => entry.get().status(),
            Entry::Vacant(entry) => {
                let Ok(mut balance) = self.balance.lock() else {
                    return LedgerStatus::UnknownError;
                };

                *balance += amount;
                entry.insert(TransactionRecord::applied(Movement::Increase, amount));
                LedgerStatus::Success
            }
        }
    }

    fn decrease(&self, amount: Decimal, transaction_id: &TransactionId) -> LedgerStatus {
        match self.transactions.entry(transaction_id.as_str().to_owned()) {
            Entry::Occupied(entry) => entry.get().status(),
            Entry::Vacant(entry) => {
                let Ok(mut balance) = self.balance.lock() else {
                    return LedgerStatus::UnknownError;
                };

                // A rejected decrease records nothing: the id stays unknown
                // and a later attempt with sufficient funds may succeed.
                if *balance < amount {
                    return LedgerStatus::NotEnoughBalance;
                }

                *balance -= amount;
                entry.insert(TransactionRecord::applied(Movement::Decrease, amount));
                LedgerStatus::Success
            }
        }
    }

    fn check_transaction(&self, transaction_id: &TransactionId) -> LedgerStatus {
        self.transactions
            .get(transaction_id.as_str())
            .map(|record| record.status())
            .unwrap_or(LedgerStatus::TransactionNotFound)
    }

    fn rollback(&self, transaction_id: &TransactionId) -> LedgerStatus {
        match self.transactions.entry(transaction_id.as_str().to_owned()) {
            Entry::Vacant(_) => LedgerStatus::TransactionNotFound,
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();

                if record.state == RecordState::RolledBack {
                    return LedgerStatus::TransactionRollbacked;
                }

                let Ok(mut balance) = self.balance.lock() else {
                    return LedgerStatus::UnknownError;
                };

                match record.movement {
                    Movement::Increase => *balance -= record.amount,
                    Movement::Decrease => *balance += record.amount,
                }
                record.state = RecordState::RolledBack;
                LedgerStatus::Success
            }
        }
    }
}
