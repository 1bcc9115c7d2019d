//! Benchmark suite for ledger operations
//!
//! Measures appending movements, taking snapshots and replaying CSV input,
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use account_ledger::cli::ReportType;
use account_ledger::pipeline::process;
use account_ledger::{AccountLedger, DepositMultiple};
use std::io::Write;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 100_000];

fn filled_ledger(len: usize) -> AccountLedger {
    let mut ledger = AccountLedger::new("Bench", "EUR", 1111, "en-US");
    for i in 0..len as i64 {
        let result = if i % 3 == 0 {
            ledger.withdraw(i)
        } else {
            ledger.deposit(i)
        };
        result.expect("Append failed");
    }
    ledger
}

/// Append deposits and withdrawals alternately
#[divan::bench(args = SIZES)]
fn append_movements(len: usize) -> AccountLedger {
    filled_ledger(len)
}

/// Copy the full movement log out of the ledger
#[divan::bench(args = SIZES)]
fn snapshot_movements(bencher: divan::Bencher, len: usize) {
    let ledger = filled_ledger(len);
    bencher.bench_local(|| ledger.movements());
}

/// Evaluate loans against a growing history under the deposit-multiple policy
#[divan::bench(args = SIZES)]
fn deposit_multiple_loans(bencher: divan::Bencher, len: usize) {
    bencher.bench_local(|| {
        let mut ledger =
            AccountLedger::with_policy("Bench", "EUR", 1111, "en-US", DepositMultiple::default());
        ledger.deposit(100).expect("Deposit failed");
        for _ in 0..len {
            let _ = ledger.try_loan(50).expect("Loan request failed");
        }
        ledger
    });
}

/// Replay a generated CSV file and write the summary report
#[divan::bench(args = SIZES)]
fn replay_csv(bencher: divan::Bencher, len: usize) {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "type,amount").expect("Write failed");
    for i in 0..len {
        let kind = match i % 3 {
            0 => "deposit",
            1 => "withdrawal",
            _ => "loan",
        };
        writeln!(file, "{},{}.25", kind, i).expect("Write failed");
    }
    file.flush().expect("Flush failed");

    bencher.bench_local(|| {
        let mut ledger = AccountLedger::new("Bench", "EUR", 1111, "en-US");
        let mut output = Vec::new();
        process(file.path(), &mut ledger, ReportType::Summary, &mut output)
            .expect("Processing failed");
        output
    });
}
