use crate::config::RetryPolicy;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Move funds between the game and casino ledgers
#[derive(Parser, Debug)]
#[command(name = "transfer-engine")]
#[command(about = "Process funds transfers between the game and casino ledgers", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing transfer commands
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Opening balance of the game ledger
    #[arg(
        long = "game-balance",
        value_name = "AMOUNT",
        default_value = "9999",
        help = "Opening balance of the game ledger"
    )]
    pub game_balance: Decimal,

    /// Opening balance of the casino ledger
    #[arg(
        long = "casino-balance",
        value_name = "AMOUNT",
        default_value = "9999",
        help = "Opening balance of the casino ledger"
    )]
    pub casino_balance: Decimal,

    /// Retry budget for the source-ledger decrease (leg 1)
    #[arg(
        long = "withdraw-retries",
        value_name = "COUNT",
        help = "Retry budget for the source-ledger decrease (default: 3)"
    )]
    pub withdraw_retries: Option<u32>,

    /// Retry budget for the destination-ledger increase (leg 2)
    #[arg(
        long = "deposit-retries",
        value_name = "COUNT",
        help = "Retry budget for the destination-ledger increase (default: 3)"
    )]
    pub deposit_retries: Option<u32>,

    /// Retry budget for the compensating rollback
    #[arg(
        long = "rollback-retries",
        value_name = "COUNT",
        help = "Retry budget for the compensating rollback (default: 3)"
    )]
    pub rollback_retries: Option<u32>,
}

impl CliArgs {
    /// Create a RetryPolicy from CLI arguments
    ///
    /// Uses the provided counts where given and falls back to the policy
    /// defaults otherwise; zero counts are rejected by `RetryPolicy::new`
    /// and fall back too.
    pub fn retry_policy(&self) -> RetryPolicy {
        let default = RetryPolicy::default();
        RetryPolicy::new(
            self.withdraw_retries.unwrap_or(default.withdraw_retries),
            self.deposit_retries.unwrap_or(default.deposit_retries),
            self.rollback_retries.unwrap_or(default.rollback_retries),
        )
    }
}
