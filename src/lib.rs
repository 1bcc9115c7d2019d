//! Account Ledger Library
//! # Overview
//!
//! This library provides a single-account ledger: an append-only log of signed
//! movements with deposit, withdraw and loan-request operations, a pluggable
//! loan approval policy, and a CSV replay front end.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Secret, AccountSummary, LedgerError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - The account ledger and its operations
//!   - [`core::policy`] - Loan approval policies
//! - [`io`] - CSV input parsing and report output
//! - [`pipeline`] - Replays a CSV file through a ledger
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup for the binary
//!
//! # Operations
//!
//! - **Deposit**: Append the amount to the log
//! - **Withdraw**: Append the negated amount (no balance floor)
//! - **Request loan**: Append the amount if the loan policy approves it
//!
//! Every operation returns the ledger for chaining, or
//! [`LedgerError::InvalidAmount`] if the amount is not a well-formed number.
//!
//! # Account State
//!
//! Each ledger holds:
//! - `owner`, `currency`, `locale`: fixed at construction
//! - `secret`: fixed at construction, never readable
//! - `movements`: the append-only log; the balance is always its sum

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use crate::core::{
    AccountLedger, ApproveAll, BuiltinPolicy, DepositMultiple, LoanDecision, LoanPolicy,
};
pub use types::{AccountSummary, IntoAmount, LedgerError, Movement, MovementKind, Secret};
