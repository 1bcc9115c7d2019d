//! Account Ledger CLI
//!
//! Replays deposit, withdrawal and loan records from a CSV file through a
//! single account ledger and prints a report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --owner Jonas --pin 1111 movements.csv > summary.csv
//! cargo run -- --owner Jonas --pin 1111 --report movements movements.csv
//! cargo run -- --owner Jonas --pin 1111 --loan-policy deposit-multiple --loan-multiplier 2 movements.csv
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=info` to see loan decisions.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use account_ledger::{cli, logging, pipeline, AccountLedger};
use std::process;

fn main() {
    logging::init();

    let args = cli::parse_args();

    let mut ledger = AccountLedger::with_policy(
        args.owner.as_str(),
        args.currency.as_str(),
        args.pin.as_str(),
        args.locale.as_str(),
        args.to_policy(),
    );

    let mut output = std::io::stdout();
    if let Err(e) = pipeline::process(&args.input_file, &mut ledger, args.report, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
