//! Core business logic module
//!
//! This module contains the ledger components:
//! - `ledger` - The account ledger and its operations
//! - `policy` - Loan approval policies consulted by the ledger

pub mod ledger;
pub mod policy;

pub use ledger::{AccountLedger, LoanDecision};
pub use policy::{ApproveAll, BuiltinPolicy, DepositMultiple, LoanPolicy};
