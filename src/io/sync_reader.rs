//! Streaming CSV reader for transfer commands
//!
//! Provides an iterator over validated transfer commands from a CSV file,
//! delegating format concerns to the `csv_format` module.
//!
//! Fatal errors (file not found) are returned from `new()`; individual
//! record problems are yielded as `Err` items with the line number attached
//! so the caller can log and continue. Records stream one at a time, so
//! memory stays constant regardless of file size.

use crate::io::csv_format::{convert_transfer_record, TransferCsvRecord};
use crate::types::{TransferDirection, TransferError, TransferRequest};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over transfer commands
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Open a CSV file of transfer commands
    ///
    /// The reader trims whitespace and tolerates a missing amount field so
    /// that a malformed row surfaces as a per-record error rather than a
    /// hard stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be opened.
    pub fn new(path: &Path) -> Result<Self, TransferError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TransferError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                TransferError::IoError {
                    message: format!("failed to open '{}': {}", path.display(), e),
                }
            }
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<(TransferDirection, TransferRequest), TransferError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<TransferCsvRecord>();

        match deserializer.next()? {
            Ok(csv_record) => {
                self.line_num += 1;
                // Attach the line number (header included) to conversion
                // errors so skipped rows are traceable.
                Some(convert_transfer_record(csv_record).map_err(|e| {
                    TransferError::ParseError {
                        line: Some(self.line_num + 1),
                        message: e.to_string(),
                    }
                }))
            }
            Err(e) => {
                self.line_num += 1;
                Some(Err(TransferError::ParseError {
                    line: Some(self.line_num + 1),
                    message: e.to_string(),
                }))
            }
        }
    }
}
