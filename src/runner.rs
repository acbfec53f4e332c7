//! Batch transfer pipeline
//!
//! Streams transfer commands from a CSV file through one shared
//! orchestrator and writes an outcome row per command. Recoverable
//! per-record problems (malformed rows, invalid ids or amounts) are logged
//! and skipped; only file-level failures abort the run.

use crate::core::{BalanceLedger, TransferOrchestrator};
use crate::io::csv_format::{write_outcome_header, write_outcome_row};
use crate::io::sync_reader::SyncReader;
use crate::types::TransferError;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Process every transfer command in `input_path`, writing outcomes as CSV
///
/// One outcome row is written per valid command, in input order. The
/// orchestrator is taken by shared reference: it keeps no per-request
/// state, so the same instance can serve this batch and any other callers
/// concurrently.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or the output
/// cannot be written. Per-record errors are logged, not returned.
pub fn process_transfers<L: BalanceLedger>(
    orchestrator: &TransferOrchestrator<L>,
    input_path: &Path,
    output: &mut dyn Write,
) -> Result<(), TransferError> {
    let reader = SyncReader::new(input_path)?;

    let mut writer = csv::Writer::from_writer(output);
    write_outcome_header(&mut writer)?;

    for result in reader {
        match result {
            Ok((direction, request)) => {
                let outcome = orchestrator.transfer(direction, &request);
                write_outcome_row(&mut writer, direction, &request, outcome)?;
            }
            Err(e) => {
                warn!("skipping transfer record: {e}");
            }
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::core::LedgerPair;
    use crate::ledger::InMemoryLedger;
    use crate::types::LedgerRole;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

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

    #[test]
    fn test_process_writes_one_outcome_per_command() {
        let file = create_temp_csv("type,tx,amount\ndeposit,12,1010\nwithdraw,55,100\n");
        let sut = orchestrator(9999, 9999);
        let mut output = Vec::new();

        process_transfers(&sut, file.path(), &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "tx,type,amount,outcome\n\
             12,deposit,1010,Success\n\
             55,withdraw,100,Success\n"
        );
    }

    #[test]
    fn test_process_skips_malformed_records() {
        let file = create_temp_csv(
            "type,tx,amount\n\
             deposit,12,1010\n\
             payout,13,50\n\
             deposit,14,not_a_number\n\
             withdraw,15,75\n",
        );
        let sut = orchestrator(9999, 9999);
        let mut output = Vec::new();

        process_transfers(&sut, file.path(), &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "tx,type,amount,outcome\n\
             12,deposit,1010,Success\n\
             15,withdraw,75,Success\n"
        );
    }

    #[test]
    fn test_process_fails_on_missing_file() {
        let sut = orchestrator(9999, 9999);
        let mut output = Vec::new();

        let result = process_transfers(&sut, Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(result, Err(TransferError::FileNotFound { .. })));
    }
}
