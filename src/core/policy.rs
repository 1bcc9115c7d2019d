//! Loan approval policies
//!
//! A [`LoanPolicy`] decides whether a requested loan may be credited, given the
//! requested amount and the account's movements so far. The ledger consults it
//! on every loan request and never hard-codes a rule of its own.
//!
//! Any `Fn(Decimal, &[Decimal]) -> bool` closure is a policy, so callers can
//! substitute their own rule without defining a type.

use rust_decimal::Decimal;

/// Trait for deciding loan requests
pub trait LoanPolicy {
    /// Whether `amount` may be credited to an account with `movements`
    fn approve(&self, amount: Decimal, movements: &[Decimal]) -> bool;
}

impl<F> LoanPolicy for F
where
    F: Fn(Decimal, &[Decimal]) -> bool,
{
    fn approve(&self, amount: Decimal, movements: &[Decimal]) -> bool {
        self(amount, movements)
    }
}

/// Approves every well-formed amount
///
/// This is a placeholder, not an underwriting rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproveAll;

impl LoanPolicy for ApproveAll {
    fn approve(&self, _amount: Decimal, _movements: &[Decimal]) -> bool {
        true
    }
}

/// Approves positive amounts up to a multiple of the largest prior credit
///
/// A credit is any positive movement in the log. The log does not record
/// where a movement came from, so an approved loan counts as a credit just
/// like a deposit: borrowing 300 against a 100 deposit raises the next limit
/// to 900. Debits are ignored. An account with no credits is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositMultiple {
    multiplier: Decimal,
}

impl DepositMultiple {
    /// Default multiplier applied to the largest credit
    pub const DEFAULT_MULTIPLIER: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

    pub fn new(multiplier: Decimal) -> Self {
        DepositMultiple { multiplier }
    }

    pub fn multiplier(&self) -> Decimal {
        self.multiplier
    }
}

impl Default for DepositMultiple {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MULTIPLIER)
    }
}

impl LoanPolicy for DepositMultiple {
    fn approve(&self, amount: Decimal, movements: &[Decimal]) -> bool {
        if amount <= Decimal::ZERO {
            return false;
        }

        let Some(largest_credit) = movements
            .iter()
            .copied()
            .filter(|mov| *mov > Decimal::ZERO)
            .max()
        else {
            return false;
        };

        largest_credit
            .checked_mul(self.multiplier)
            .is_none_or(|limit| amount <= limit)
    }
}

/// The policies shipped with the crate, selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinPolicy {
    ApproveAll(ApproveAll),
    DepositMultiple(DepositMultiple),
}

impl Default for BuiltinPolicy {
    fn default() -> Self {
        BuiltinPolicy::ApproveAll(ApproveAll)
    }
}

impl LoanPolicy for BuiltinPolicy {
    fn approve(&self, amount: Decimal, movements: &[Decimal]) -> bool {
        match self {
            BuiltinPolicy::ApproveAll(policy) => policy.approve(amount, movements),
            BuiltinPolicy::DepositMultiple(policy) => policy.approve(amount, movements),
        }
    }
}
