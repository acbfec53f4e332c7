//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, outcome serialization)
//! - `sync_reader` - Streaming CSV reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{
    convert_transfer_record, write_outcome_header, write_outcome_row, TransferCsvRecord,
};
pub use sync_reader::SyncReader;
