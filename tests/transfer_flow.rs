//! End-to-end integration tests
//!
//! These tests drive the complete pipeline: transfer commands in a CSV
//! file, through the orchestrator against real in-memory ledgers, out to
//! the outcome CSV. Each test asserts both the emitted outcomes and the
//! resulting ledger balances, so the no-lost-money property is checked end
//! to end.

use rstest::rstest;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use transfer_engine::{
    runner, BalanceLedger, InMemoryLedger, LedgerPair, LedgerRole, RetryPolicy, TransactionId,
    TransferDirection, TransferOrchestrator, TransferOutcome, TransferRequest,
};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

fn orchestrator(game: i64, casino: i64) -> TransferOrchestrator<InMemoryLedger> {
    TransferOrchestrator::new(
        LedgerPair::new(
            InMemoryLedger::new(LedgerRole::Game, Decimal::from(game)),
            InMemoryLedger::new(LedgerRole::Casino, Decimal::from(casino)),
        ),
        RetryPolicy::default(),
    )
}

/// Run a CSV of transfer commands and return the outcome CSV
fn run(sut: &TransferOrchestrator<InMemoryLedger>, input: &str) -> String {
    let file = create_temp_csv(input);
    let mut output = Vec::new();
    runner::process_transfers(sut, file.path(), &mut output).expect("pipeline failed");
    String::from_utf8(output).expect("output was not UTF-8")
}

fn balances(sut: &TransferOrchestrator<InMemoryLedger>) -> (Decimal, Decimal) {
    (
        sut.ledgers().game().balance().unwrap(),
        sut.ledgers().casino().balance().unwrap(),
    )
}

#[test]
fn test_deposit_moves_funds_from_game_to_casino() {
    let sut = orchestrator(9999, 9999);

    let output = run(&sut, "type,tx,amount\ndeposit,12,1010\n");

    assert_eq!(output, "tx,type,amount,outcome\n12,deposit,1010,Success\n");
    assert_eq!(balances(&sut), (Decimal::from(8989), Decimal::from(11009)));
}

#[test]
fn test_withdraw_moves_funds_from_casino_to_game() {
    let sut = orchestrator(9999, 9999);

    let output = run(&sut, "type,tx,amount\nwithdraw,55,2452\n");

    assert_eq!(output, "tx,type,amount,outcome\n55,withdraw,2452,Success\n");
    assert_eq!(balances(&sut), (Decimal::from(12451), Decimal::from(7547)));
}

#[test]
fn test_deposit_exceeding_balance_is_rejected_and_moves_nothing() {
    let sut = orchestrator(9999, 9999);

    let output = run(&sut, "type,tx,amount\ndeposit,12,10101\n");

    assert_eq!(
        output,
        "tx,type,amount,outcome\n12,deposit,10101,NotEnoughBalance\n"
    );
    assert_eq!(balances(&sut), (Decimal::from(9999), Decimal::from(9999)));
}

#[test]
fn test_replayed_transaction_id_is_rejected_after_a_success() {
    let sut = orchestrator(9999, 9999);

    let output = run(
        &sut,
        "type,tx,amount\ndeposit,12,1010\ndeposit,12,1010\n",
    );

    assert_eq!(
        output,
        "tx,type,amount,outcome\n\
         12,deposit,1010,Success\n\
         12,deposit,1010,DuplicateTransactionId\n"
    );
    // Only the first command moved money.
    assert_eq!(balances(&sut), (Decimal::from(8989), Decimal::from(11009)));
}

#[rstest]
#[case::deposit("deposit")]
#[case::withdraw("withdraw")]
fn test_replay_rejected_in_both_directions(#[case] kind: &str) {
    let sut = orchestrator(9999, 9999);

    let input = format!("type,tx,amount\n{kind},77,100\n{kind},77,100\n");
    let output = run(&sut, &input);

    assert!(output.contains(&format!("77,{kind},100,Success\n")));
    assert!(output.contains(&format!("77,{kind},100,DuplicateTransactionId\n")));
}

#[test]
fn test_mixed_batch_settles_every_command_independently() {
    let sut = orchestrator(9999, 9999);

    let output = run(
        &sut,
        "type,tx,amount\n\
         deposit,1,1000\n\
         withdraw,2,500\n\
         deposit,3,50000\n\
         deposit,4,250\n",
    );

    assert_eq!(
        output,
        "tx,type,amount,outcome\n\
         1,deposit,1000,Success\n\
         2,withdraw,500,Success\n\
         3,deposit,50000,NotEnoughBalance\n\
         4,deposit,250,Success\n"
    );
    // game: 9999 - 1000 + 500 - 250, casino: 9999 + 1000 - 500 + 250
    assert_eq!(balances(&sut), (Decimal::from(9249), Decimal::from(10749)));
}

#[test]
fn test_malformed_rows_are_skipped_without_touching_ledgers() {
    let sut = orchestrator(9999, 9999);

    let output = run(
        &sut,
        "type,tx,amount\n\
         payout,1,100\n\
         deposit,,100\n\
         deposit,2,0\n\
         deposit,12345678901234567,100\n\
         deposit,3,100\n",
    );

    assert_eq!(output, "tx,type,amount,outcome\n3,deposit,100,Success\n");
    assert_eq!(balances(&sut), (Decimal::from(9899), Decimal::from(10099)));
}

#[test]
fn test_fractional_amounts_round_trip() {
    let sut = orchestrator(9999, 9999);

    let output = run(&sut, "type,tx,amount\ndeposit,9,0.25\n");

    assert_eq!(output, "tx,type,amount,outcome\n9,deposit,0.25,Success\n");
    assert_eq!(
        balances(&sut),
        (Decimal::new(999875, 2), Decimal::new(999925, 2))
    );
}

/// One shared orchestrator serves concurrent transfers with distinct ids;
/// no locking beyond the ledgers' own, and no money is lost.
#[test]
fn test_concurrent_transfers_through_shared_orchestrator() {
    let sut = Arc::new(orchestrator(100_000, 100_000));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let sut = Arc::clone(&sut);
            std::thread::spawn(move || {
                let request = TransferRequest::new(
                    TransactionId::new(format!("tx-{i}")).unwrap(),
                    Decimal::from(100),
                )
                .unwrap();
                let direction = if i % 2 == 0 {
                    TransferDirection::Deposit
                } else {
                    TransferDirection::Withdraw
                };
                sut.transfer(direction, &request)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), TransferOutcome::Success);
    }

    // Four deposits and four withdrawals of equal size cancel out.
    assert_eq!(
        balances(&sut),
        (Decimal::from(100_000), Decimal::from(100_000))
    );
}
