//! Transfer Engine CLI
//!
//! Command-line interface for processing funds transfers between the game
//! and casino ledgers from a CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transfers.csv > outcomes.csv
//! cargo run -- --game-balance 9999 --casino-balance 9999 transfers.csv
//! cargo run -- --withdraw-retries 5 --deposit-retries 5 --rollback-retries 3 transfers.csv
//! ```
//!
//! The program reads transfer commands from the input CSV file, runs each
//! through the transfer orchestrator against two in-memory ledgers, and
//! writes one outcome row per command to stdout. Logs go to stderr; set
//! `RUST_LOG` to adjust verbosity.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use std::process;
use transfer_engine::cli;
use transfer_engine::runner;
use transfer_engine::{InMemoryLedger, LedgerPair, LedgerRole, TransferOrchestrator};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so the outcome CSV on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let ledgers = LedgerPair::new(
        InMemoryLedger::new(LedgerRole::Game, args.game_balance),
        InMemoryLedger::new(LedgerRole::Casino, args.casino_balance),
    );
    let orchestrator = TransferOrchestrator::new(ledgers, args.retry_policy());

    let mut output = std::io::stdout();
    if let Err(e) = runner::process_transfers(&orchestrator, &args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    match orchestrator.casino_balance() {
        Ok(balance) => tracing::info!(%balance, "final casino balance"),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
