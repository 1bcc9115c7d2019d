//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over movement records from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding
//! `Result<MovementRecord, LedgerError>` for each CSV row:
//!
//! ```no_run
//! use account_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("movements.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Applying: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record parsing errors are yielded as Err variants in the iterator
//! - Line numbers are included in errors for debugging

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, MovementRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous CSV reader
///
/// Reads one record at a time; memory use does not grow with file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
    record: StringRecord,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (for an omitted amount column)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if the path does not exist
    /// * `IoError` if the file cannot be opened for another reason
    /// * `ParseError` if the header row cannot be read
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::file_not_found(path.display().to_string()),
            _ => LedgerError::from(e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<MovementRecord, LedgerError>;

    /// Get the next movement record from the CSV file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(MovementRecord))` - Successfully parsed record
    /// * `Some(Err(LedgerError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map_or(0, |pos| pos.line());
                let parsed = self
                    .record
                    .deserialize::<CsvRecord>(Some(&self.headers))
                    .map_err(LedgerError::from)
                    .and_then(|csv_record| convert_csv_record(csv_record, line));
                Some(parsed.map_err(|e| with_line(e, line)))
            }
            Err(e) => Some(Err(LedgerError::from(e))),
        }
    }
}

fn with_line(error: LedgerError, line: u64) -> LedgerError {
    match error {
        LedgerError::ParseError { line: None, message } => LedgerError::ParseError {
            line: Some(line),
            message,
        },
        other => other,
    }
}
