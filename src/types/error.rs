//! Error types for the account ledger
//!
//! This module defines all error types that can occur while operating a ledger
//! or replaying operations into one. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: a malformed amount handed to deposit, withdraw or loan
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, unknown operation types, etc.
//!
//! The ledger itself only ever produces [`LedgerError::InvalidAmount`]. A loan
//! refused by the approval policy is not an error.

use thiserror::Error;

/// Main error type for the account ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The amount is not a well-formed number
    ///
    /// Returned by every mutating ledger operation. The movement log is left
    /// unchanged when this error is produced.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The rejected input, rendered as text
        input: String,
        /// Why the input was rejected
        reason: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown operation type in an input record
    #[error("Invalid movement type '{movement_type}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidMovementType {
        /// The unrecognised type string
        movement_type: String,
        /// Line number (if available)
        line: Option<u64>,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(input: impl Into<String>, reason: &str) -> Self {
        LedgerError::InvalidAmount {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        LedgerError::FileNotFound { path: path.into() }
    }

    /// Create an InvalidMovementType error
    pub fn invalid_movement_type(movement_type: &str, line: Option<u64>) -> Self {
        LedgerError::InvalidMovementType {
            movement_type: movement_type.to_string(),
            line,
        }
    }

    /// Whether this error concerns a single record rather than the whole run
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount { .. }
                | LedgerError::ParseError { .. }
                | LedgerError::InvalidMovementType { .. }
        )
    }
}
