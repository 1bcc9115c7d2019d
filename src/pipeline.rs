//! Replay pipeline
//!
//! Streams movement records from a CSV file into an [`AccountLedger`] and
//! writes a report once the input is exhausted.
//!
//! # Error Handling
//!
//! Fatal errors (file not found, I/O errors, unwritable output) abort the run.
//! A record that cannot be parsed, or whose amount the ledger rejects, is
//! logged and skipped; processing continues with the next record. A loan
//! refused by the policy is counted but is not an error.

use crate::cli::ReportType;
use crate::core::{AccountLedger, LoanDecision, LoanPolicy};
use crate::io::csv_format::{write_movements_csv, write_summary_csv};
use crate::io::sync_reader::SyncReader;
use crate::types::{LedgerError, MovementKind, MovementRecord};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Counters describing one replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Records that added a movement to the log
    pub applied: usize,
    /// Records skipped because they were malformed
    pub skipped: usize,
    /// Loan requests refused by the policy
    pub loans_rejected: usize,
}

/// Apply a single record to the ledger
///
/// Returns the loan decision for loan records and `None` otherwise.
pub fn apply_record<P: LoanPolicy>(
    ledger: &mut AccountLedger<P>,
    record: &MovementRecord,
) -> Result<Option<LoanDecision>, LedgerError> {
    let amount = record.amount.as_ref();

    match record.kind {
        MovementKind::Deposit => {
            ledger.deposit(amount)?;
            Ok(None)
        }
        MovementKind::Withdrawal => {
            ledger.withdraw(amount)?;
            Ok(None)
        }
        MovementKind::Loan => ledger.try_loan(amount).map(Some),
    }
}

/// Apply every record from `records`, skipping and logging failures
pub fn replay<P, I>(ledger: &mut AccountLedger<P>, records: I) -> ReplayStats
where
    P: LoanPolicy,
    I: IntoIterator<Item = Result<MovementRecord, LedgerError>>,
{
    let mut stats = ReplayStats::default();

    for result in records {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping unreadable record");
                stats.skipped += 1;
                continue;
            }
        };

        match apply_record(ledger, &record) {
            Ok(Some(LoanDecision::Rejected(amount))) => {
                info!(line = record.line, %amount, "loan request rejected");
                stats.loans_rejected += 1;
            }
            Ok(_) => stats.applied += 1,
            Err(e) => {
                warn!(line = record.line, kind = %record.kind, error = %e, "skipping record");
                stats.skipped += 1;
            }
        }
    }

    stats
}

/// Replay the CSV file at `input_path` into `ledger` and write a report
///
/// # Errors
///
/// Returns an error only for fatal conditions: the input cannot be opened or
/// its header read, or the report cannot be written.
pub fn process<P: LoanPolicy>(
    input_path: &Path,
    ledger: &mut AccountLedger<P>,
    report: ReportType,
    output: &mut dyn Write,
) -> Result<ReplayStats, LedgerError> {
    let reader = SyncReader::new(input_path)?;
    let stats = replay(ledger, reader);

    info!(
        applied = stats.applied,
        skipped = stats.skipped,
        loans_rejected = stats.loans_rejected,
        balance = %ledger.balance(),
        "replay finished"
    );

    match report {
        ReportType::Summary => write_summary_csv(ledger, output)?,
        ReportType::Movements => write_movements_csv(ledger, output)?,
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DepositMultiple;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn record(kind: MovementKind, amount: Option<&str>) -> MovementRecord {
        MovementRecord {
            kind,
            amount: amount.map(|s| s.to_string()),
            line: 2,
        }
    }

    fn jonas() -> AccountLedger {
        AccountLedger::new("Jonas", "EUR", 1111, "en-US")
    }

    #[test]
    fn test_apply_record_dispatches_by_kind() -> Result<(), LedgerError> {
        let mut ledger = jonas();

        assert_eq!(
            apply_record(&mut ledger, &record(MovementKind::Deposit, Some("100")))?,
            None
        );
        assert_eq!(
            apply_record(&mut ledger, &record(MovementKind::Withdrawal, Some("30")))?,
            None
        );
        assert_eq!(
            apply_record(&mut ledger, &record(MovementKind::Loan, Some("500")))?,
            Some(LoanDecision::Approved(Decimal::from(500)))
        );

        assert_eq!(
            ledger.movements(),
            vec![Decimal::from(100), Decimal::from(-30), Decimal::from(500)]
        );
        Ok(())
    }

    #[test]
    fn test_apply_record_rejects_missing_amount() {
        let mut ledger = jonas();

        let result = apply_record(&mut ledger, &record(MovementKind::Deposit, None));

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_replay_counts_outcomes() {
        let mut ledger = AccountLedger::with_policy(
            "Jonas",
            "EUR",
            1111,
            "en-US",
            DepositMultiple::default(),
        );
        let records = vec![
            Ok(record(MovementKind::Deposit, Some("1000"))),
            Ok(record(MovementKind::Loan, Some("5000"))),
            Err(LedgerError::invalid_movement_type("refund", Some(4))),
            Ok(record(MovementKind::Withdrawal, Some("abc"))),
            Ok(record(MovementKind::Loan, Some("2500"))),
        ];

        let stats = replay(&mut ledger, records);

        assert_eq!(
            stats,
            ReplayStats {
                applied: 2,
                skipped: 2,
                loans_rejected: 1,
            }
        );
        assert_eq!(ledger.balance(), Decimal::from(3500));
    }

    #[test]
    fn test_process_writes_summary() -> Result<(), LedgerError> {
        let file = create_temp_csv(
            "type,amount\ndeposit,1500\nwithdrawal,1000\nloan,10000\nwithdrawal,5000\n",
        );
        let mut ledger = jonas();
        let mut output = Vec::new();

        let stats = process(file.path(), &mut ledger, ReportType::Summary, &mut output)?;

        assert_eq!(stats.applied, 4);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "owner,currency,movements,incomes,outgoings,balance\n\
             Jonas,EUR,4,11500.00,6000.00,5500.00\n"
        );
        Ok(())
    }

    #[test]
    fn test_process_writes_movements() -> Result<(), LedgerError> {
        let file = create_temp_csv("type,amount\ndeposit,1500\nwithdrawal,1000\n");
        let mut ledger = jonas();
        let mut output = Vec::new();

        process(file.path(), &mut ledger, ReportType::Movements, &mut output)?;

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "index,amount\n1,1500.00\n2,-1000.00\n"
        );
        Ok(())
    }

    #[test]
    fn test_process_continues_on_malformed_record() -> Result<(), LedgerError> {
        let file = create_temp_csv("type,amount\ndeposit,100.0\ndeposit,invalid\ndeposit,50.0\n");
        let mut ledger = jonas();
        let mut output = Vec::new();

        let stats = process(file.path(), &mut ledger, ReportType::Summary, &mut output)?;

        assert_eq!(stats.applied, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(ledger.balance(), Decimal::from(150));
        Ok(())
    }

    #[test]
    fn test_process_handles_missing_file() {
        let mut ledger = jonas();
        let mut output = Vec::new();

        let result = process(
            Path::new("nonexistent.csv"),
            &mut ledger,
            ReportType::Summary,
            &mut output,
        );

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
        assert!(output.is_empty());
    }
}
