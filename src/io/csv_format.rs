//! CSV format handling for transfer commands and outcome output
//!
//! This module centralizes all CSV format concerns, providing:
//! - TransferCsvRecord structure for deserialization
//! - Conversion from CSV records to validated domain types
//! - Outcome output serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{TransactionId, TransferDirection, TransferError, TransferOutcome, TransferRequest};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, tx, amount.
/// Everything arrives as text; validation happens during conversion so a
/// malformed row can be skipped without aborting the run.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransferCsvRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub tx: String,
    pub amount: Option<String>,
}

/// Convert a TransferCsvRecord into a validated transfer command
///
/// This function:
/// - Parses the transfer type string into a TransferDirection
/// - Validates the transaction id (non-empty, bounded length)
/// - Parses the amount into a Decimal and enforces that it is positive
///
/// # Errors
///
/// Returns a recoverable error describing the first rule the record broke;
/// the caller is expected to log it and continue with the next record.
pub fn convert_transfer_record(
    record: TransferCsvRecord,
) -> Result<(TransferDirection, TransferRequest), TransferError> {
    let direction = match record.kind.to_lowercase().as_str() {
        "deposit" => TransferDirection::Deposit,
        "withdraw" => TransferDirection::Withdraw,
        _ => return Err(TransferError::invalid_transfer_type(&record.kind, &record.tx)),
    };

    let transaction_id = TransactionId::new(record.tx.trim())?;

    let amount = match record.amount.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Decimal::from_str(raw)
            .map_err(|_| TransferError::invalid_amount(raw, transaction_id.as_str()))?,
        _ => {
            return Err(TransferError::missing_amount(
                &record.kind,
                transaction_id.as_str(),
            ))
        }
    };

    let request = TransferRequest::new(transaction_id, amount)?;

    Ok((direction, request))
}

/// Write the outcome CSV header: tx, type, amount, outcome
///
/// # Errors
///
/// Returns an error if the header cannot be written.
pub fn write_outcome_header<W: Write>(writer: &mut csv::Writer<W>) -> Result<(), TransferError> {
    writer.write_record(["tx", "type", "amount", "outcome"])?;
    Ok(())
}

/// Write one outcome row, echoing the transfer command it belongs to
///
/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn write_outcome_row<W: Write>(
    writer: &mut csv::Writer<W>,
    direction: TransferDirection,
    request: &TransferRequest,
    outcome: TransferOutcome,
) -> Result<(), TransferError> {
    writer.write_record(&[
        request.transaction_id().to_string(),
        direction.to_string(),
        request.amount().to_string(),
        outcome.to_string(),
    ])?;
    Ok(())
}
