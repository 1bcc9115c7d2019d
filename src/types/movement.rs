//! Movement-related types for replaying operations into a ledger
//!
//! These types describe one requested operation as read from an input file,
//! before the ledger has validated its amount.

use std::fmt;

/// Operations a ledger accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    /// Credit the amount to the account
    Deposit,

    /// Debit the amount from the account (no balance floor)
    Withdrawal,

    /// Credit the amount if the approval policy accepts it
    Loan,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
            MovementKind::Loan => "loan",
        };
        f.write_str(name)
    }
}

/// A requested operation as read from input
///
/// The amount is kept as raw text: whether it is a well-formed number is the
/// ledger's decision, not the reader's.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementRecord {
    /// Which ledger operation to apply
    pub kind: MovementKind,

    /// The raw amount, if the column was present and non-empty
    pub amount: Option<String>,

    /// 1-based data line in the source file
    pub line: u64,
}
