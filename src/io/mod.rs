//! I/O module
//!
//! Handles CSV parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{convert_csv_record, write_movements_csv, write_summary_csv, CsvRecord};
pub use sync_reader::SyncReader;
