//! CSV format handling for movement records and ledger reports
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Summary and movement report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::{AccountLedger, LoanPolicy};
use crate::types::{LedgerError, MovementKind, MovementRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, amount.
/// The amount is kept as text; the ledger decides whether it is a number.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub movement_type: String,
    #[serde(default)]
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a MovementRecord
///
/// Parses the type string (case-insensitive) and drops blank amounts.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `line` - Line number of the record in the source file
pub fn convert_csv_record(csv_record: CsvRecord, line: u64) -> Result<MovementRecord, LedgerError> {
    let kind = match csv_record.movement_type.to_lowercase().as_str() {
        "deposit" => MovementKind::Deposit,
        "withdrawal" => MovementKind::Withdrawal,
        "loan" => MovementKind::Loan,
        _ => {
            return Err(LedgerError::invalid_movement_type(
                &csv_record.movement_type,
                Some(line),
            ))
        }
    };

    let amount = csv_record
        .amount
        .filter(|amount| !amount.trim().is_empty());

    Ok(MovementRecord { kind, amount, line })
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// Write a one-row account summary
///
/// Columns: owner, currency, movements, incomes, outgoings, balance
pub fn write_summary_csv<P: LoanPolicy>(
    ledger: &AccountLedger<P>,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);
    let summary = ledger.summary();

    writer.write_record([
        "owner",
        "currency",
        "movements",
        "incomes",
        "outgoings",
        "balance",
    ])?;
    writer.write_record(&[
        ledger.owner().to_string(),
        ledger.currency().to_string(),
        ledger.len().to_string(),
        format_amount(summary.incomes),
        format_amount(summary.outgoings),
        format_amount(ledger.balance()),
    ])?;

    writer.flush()?;
    Ok(())
}

/// Write the movement log, one row per movement
///
/// Columns: index (1-based), amount
pub fn write_movements_csv<P: LoanPolicy>(
    ledger: &AccountLedger<P>,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["index", "amount"])?;
    for (index, movement) in ledger.movements().into_iter().enumerate() {
        writer.write_record(&[(index + 1).to_string(), format_amount(movement)])?;
    }

    writer.flush()?;
    Ok(())
}
