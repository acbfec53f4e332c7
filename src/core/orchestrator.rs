//! Transfer orchestration
//!
//! This module provides the TransferOrchestrator that moves funds between
//! the game and casino ledgers even though the two stores cannot share an
//! atomic transaction. The protocol is:
//!
//! 1. Duplicate check on the source ledger (whole-transfer idempotency).
//! 2. Leg 1: decrease the source ledger, bounded retries.
//! 3. Leg 2: increase the destination ledger, bounded retries.
//! 4. Compensation: if leg 2 fails terminally, roll back leg 1.
//!
//! Every mutating call can come back ambiguous; the orchestrator resolves
//! ambiguity by re-reading the ledger's own transaction record
//! (`check_transaction`) and retries while the desired effect is confirmed
//! absent. Decrease, increase and rollback all share one retry helper,
//! [`settle_with_status_check`], each with its own notion of which
//! statuses end the loop.

use crate::config::RetryPolicy;
use crate::core::traits::BalanceLedger;
use crate::types::{
    LedgerRole, LedgerStatus, TransactionId, TransferDirection, TransferError, TransferOutcome,
    TransferRequest,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// The two ledgers, keyed by role
///
/// A plain two-field resolver: exactly two roles exist, fixed at
/// construction, so no registry is needed.
pub struct LedgerPair<L> {
    game: L,
    casino: L,
}

impl<L> LedgerPair<L> {
    /// Pair up the game and casino ledgers
    pub fn new(game: L, casino: L) -> Self {
        LedgerPair { game, casino }
    }

    /// The game ledger
    pub fn game(&self) -> &L {
        &self.game
    }

    /// The casino ledger
    pub fn casino(&self) -> &L {
        &self.casino
    }

    /// Resolve a ledger by role
    pub fn by_role(&self, role: LedgerRole) -> &L {
        match role {
            LedgerRole::Game => &self.game,
            LedgerRole::Casino => &self.casino,
        }
    }
}

/// Orchestrates two-leg transfers between the game and casino ledgers
///
/// Holds exactly one reference to each ledger and the read-only retry
/// policy, both fixed at construction. The orchestrator keeps no other
/// state, so a single instance safely serves concurrent transfers without
/// locking; all cross-ledger consistency rests on each ledger's own
/// per-transaction-id idempotency.
pub struct TransferOrchestrator<L> {
    ledgers: LedgerPair<L>,
    policy: RetryPolicy,
}

impl<L: BalanceLedger> TransferOrchestrator<L> {
    /// Create a new orchestrator over a resolved ledger pair
    pub fn new(ledgers: LedgerPair<L>, policy: RetryPolicy) -> Self {
        TransferOrchestrator { ledgers, policy }
    }

    /// The ledger pair this orchestrator operates on
    pub fn ledgers(&self) -> &LedgerPair<L> {
        &self.ledgers
    }

    /// Current balance of the casino ledger
    ///
    /// Balance reads are not subject to the idempotency problem: no retry,
    /// the ledger's own error propagates unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the casino ledger cannot serve the read.
    pub fn casino_balance(&self) -> Result<Decimal, TransferError> {
        self.ledgers.casino().balance()
    }

    /// Execute a two-leg transfer and return its outcome
    ///
    /// The direction selects source and destination:
    /// deposit = game→casino, withdraw = casino→game.
    ///
    /// Business rejections (duplicate id, insufficient funds) and exhausted
    /// retry budgets are ordinary [`TransferOutcome`] values, never panics
    /// or errors. When leg 2 fails after leg 1 was applied, the source
    /// ledger is compensated with a rollback; the rollback's own status is
    /// logged for observability but the caller always receives leg 2's
    /// failure code.
    pub fn transfer(
        &self,
        direction: TransferDirection,
        request: &TransferRequest,
    ) -> TransferOutcome {
        let source = self.ledgers.by_role(direction.source());
        let destination = self.ledgers.by_role(direction.destination());

        let leg1 = self.apply_leg(
            source,
            request.transaction_id(),
            self.policy.withdraw_retries,
            || source.decrease(request.amount(), request.transaction_id()),
        );
        info!(
            %direction,
            tx = %request.transaction_id(),
            amount = %request.amount(),
            status = %leg1,
            "decrease on {} ledger",
            direction.source()
        );

        if leg1 != TransferOutcome::Success {
            return leg1;
        }

        let leg2 = self.apply_leg(
            destination,
            request.transaction_id(),
            self.policy.deposit_retries,
            || destination.increase(request.amount(), request.transaction_id()),
        );
        info!(
            %direction,
            tx = %request.transaction_id(),
            amount = %request.amount(),
            status = %leg2,
            "increase on {} ledger",
            direction.destination()
        );

        if leg2 != TransferOutcome::Success {
            let rollback = self.compensate(source, request.transaction_id());
            warn!(
                %direction,
                tx = %request.transaction_id(),
                amount = %request.amount(),
                status = %rollback,
                "rollback on {} ledger after failed leg 2",
                direction.source()
            );
            return leg2;
        }

        TransferOutcome::Success
    }

    /// Run one leg of a transfer: duplicate check, then settle the mutation
    ///
    /// The duplicate check consults the leg's OWN ledger record, so the
    /// source and destination detect replays independently. Any status
    /// other than "not found" means this ledger has already seen the id and
    /// the leg must not mutate anything.
    fn apply_leg<F>(
        &self,
        ledger: &L,
        transaction_id: &TransactionId,
        retries: u32,
        mutate: F,
    ) -> TransferOutcome
    where
        F: FnMut() -> LedgerStatus,
    {
        if ledger.check_transaction(transaction_id) != LedgerStatus::TransactionNotFound {
            return TransferOutcome::DuplicateTransactionId;
        }

        let status = settle_with_status_check(
            retries,
            mutate,
            || ledger.check_transaction(transaction_id),
            |status| status != LedgerStatus::TransactionNotFound,
        );

        if status == LedgerStatus::TransactionNotFound {
            warn!(
                tx = %transaction_id,
                retries,
                "retry budget exhausted with the transaction still unresolved"
            );
        }

        status.into()
    }

    /// Undo an applied leg-1 decrease on the source ledger
    ///
    /// Uses the same settle loop as the legs, with its own terminal
    /// predicate: a status check reporting `Success` means the transaction
    /// is still applied and the rollback has NOT taken effect, so the loop
    /// keeps going until it sees `TransactionRollbacked` or a definite
    /// failure. A definite rollback success maps to `TransactionRollbacked`
    /// before the predicate runs, and there is no duplicate pre-check since
    /// the transaction must already exist on this ledger.
    fn compensate(&self, ledger: &L, transaction_id: &TransactionId) -> TransferOutcome {
        let status = settle_with_status_check(
            self.policy.rollback_retries,
            || match ledger.rollback(transaction_id) {
                LedgerStatus::Success => LedgerStatus::TransactionRollbacked,
                other => other,
            },
            || ledger.check_transaction(transaction_id),
            |status| {
                !matches!(
                    status,
                    LedgerStatus::TransactionNotFound | LedgerStatus::Success
                )
            },
        );

        if matches!(
            status,
            LedgerStatus::TransactionNotFound | LedgerStatus::Success
        ) {
            warn!(
                tx = %transaction_id,
                retries = self.policy.rollback_retries,
                "rollback budget exhausted with the compensation still unconfirmed"
            );
        }

        status.into()
    }
}

/// The shared check-then-retry loop
///
/// Repeats up to `retries` times:
/// 1. run the mutating call;
/// 2. if its status is ambiguous (`UnknownError`), disambiguate with the
///    status check and adopt that status instead;
/// 3. stop once `is_terminal` accepts the status.
///
/// The terminal predicate is what distinguishes the callers: for the two
/// transfer legs only "the effect is confirmed absent"
/// (`TransactionNotFound`) keeps the loop going, while for the rollback a
/// check reporting `Success` also keeps it going, since that confirms the
/// compensation has not taken effect yet. When the budget runs out the last
/// observed status is returned as-is, which may still be non-terminal.
fn settle_with_status_check<M, C, T>(
    retries: u32,
    mut mutate: M,
    mut check: C,
    is_terminal: T,
) -> LedgerStatus
where
    M: FnMut() -> LedgerStatus,
    C: FnMut() -> LedgerStatus,
    T: Fn(LedgerStatus) -> bool,
{
    let mut status = LedgerStatus::TransactionNotFound;

    for _ in 0..retries {
        status = mutate();

        if status == LedgerStatus::UnknownError {
            status = check();
        }

        if is_terminal(status) {
            break;
        }
    }

    status
}
