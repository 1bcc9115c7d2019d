use crate::core::{ApproveAll, BuiltinPolicy, DepositMultiple};
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay account movements through a ledger and report the result
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Replay account movements through a ledger and report the result", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing movement records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file (columns: type,amount)")]
    pub input_file: PathBuf,

    /// Display name of the account holder
    #[arg(long = "owner", value_name = "NAME")]
    pub owner: String,

    /// Currency code of the account
    #[arg(long = "currency", value_name = "CODE", default_value = "EUR")]
    pub currency: String,

    /// Account secret (PIN); stored in the ledger, never printed
    #[arg(long = "pin", value_name = "PIN")]
    pub pin: String,

    /// Locale tag carried by the account for presentation layers
    #[arg(long = "locale", value_name = "LOCALE", default_value = "en-US")]
    pub locale: String,

    /// Loan approval policy
    #[arg(
        long = "loan-policy",
        value_name = "POLICY",
        default_value = "approve-all",
        help = "Loan policy: 'approve-all' or 'deposit-multiple'"
    )]
    pub loan_policy: PolicyType,

    /// Multiplier for the deposit-multiple policy
    #[arg(
        long = "loan-multiplier",
        value_name = "N",
        help = "Largest-deposit multiplier for 'deposit-multiple' (default: 3)"
    )]
    pub loan_multiplier: Option<Decimal>,

    /// Report written to stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "summary",
        help = "Report: 'summary' for totals or 'movements' for the full log"
    )]
    pub report: ReportType,
}

/// Available loan approval policies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyType {
    ApproveAll,
    DepositMultiple,
}

/// Available output reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    Summary,
    Movements,
}

impl CliArgs {
    /// Build the loan policy selected on the command line
    ///
    /// A non-positive multiplier falls back to the default with a warning.
    /// The multiplier is ignored for `approve-all`.
    pub fn to_policy(&self) -> BuiltinPolicy {
        match self.loan_policy {
            PolicyType::ApproveAll => BuiltinPolicy::ApproveAll(ApproveAll),
            PolicyType::DepositMultiple => {
                let multiplier = match self.loan_multiplier {
                    Some(m) if m > Decimal::ZERO => m,
                    Some(m) => {
                        tracing::warn!(
                            multiplier = %m,
                            default = %DepositMultiple::DEFAULT_MULTIPLIER,
                            "loan multiplier must be positive, using default"
                        );
                        DepositMultiple::DEFAULT_MULTIPLIER
                    }
                    None => DepositMultiple::DEFAULT_MULTIPLIER,
                };
                BuiltinPolicy::DepositMultiple(DepositMultiple::new(multiplier))
            }
        }
    }
}
