//! Account ledger
//!
//! This module provides the `AccountLedger` struct, which owns a single
//! account's identity and its append-only log of movements.
//!
//! The AccountLedger is responsible for:
//! - Holding the owner, currency, locale and secret fixed at construction
//! - Appending deposits, withdrawals and approved loans to the movement log
//! - Consulting its [`LoanPolicy`] before crediting a loan
//! - Handing out read-only snapshots of the log and derived totals
//!
//! # Invalid input
//!
//! Every mutating operation returns `Err(LedgerError::InvalidAmount)` when the
//! amount is not a well-formed number, and leaves the log untouched. A loan
//! refused by the policy is not an error; use [`AccountLedger::try_loan`] to
//! observe the decision.
//!
//! # Chaining
//!
//! Operations return `&mut Self` so calls can be chained with `?`:
//!
//! ```
//! use account_ledger::AccountLedger;
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), account_ledger::LedgerError> {
//! let mut account = AccountLedger::new("Jonas", "EUR", 1111, "en-US");
//! account
//!     .deposit(1500)?
//!     .withdraw(1000)?
//!     .request_loan(10000)?
//!     .withdraw(5000)?;
//!
//! assert_eq!(account.balance(), Decimal::from(5500));
//! # Ok(())
//! # }
//! ```

use super::policy::{ApproveAll, LoanPolicy};
use crate::types::{AccountSummary, IntoAmount, LedgerError, Movement, Secret};
use rust_decimal::Decimal;
use tracing::debug;

/// Outcome of a loan request
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanDecision {
    /// The amount was credited to the account
    Approved(Decimal),

    /// The policy refused the amount; the log is unchanged
    Rejected(Decimal),
}

impl LoanDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, LoanDecision::Approved(_))
    }
}

/// A single account and its movement log
///
/// Fields are private: the movement log can only grow through the ledger's own
/// operations and is only ever read back as a copy.
#[derive(Debug)]
pub struct AccountLedger<P = ApproveAll> {
    owner: String,
    currency: String,
    locale: String,
    secret: Secret,
    movements: Vec<Movement>,
    /// Running totals of `movements`
    totals: AccountSummary,
    policy: P,
}

impl AccountLedger<ApproveAll> {
    /// Open an account with an empty log and the approve-all loan policy
    ///
    /// # Arguments
    ///
    /// * `owner` - Display name of the account holder
    /// * `currency` - Currency code (not validated here)
    /// * `secret` - Authentication token, stored but never disclosed
    /// * `locale` - Formatting tag for presentation layers, stored unexamined
    pub fn new(
        owner: impl Into<String>,
        currency: impl Into<String>,
        secret: impl Into<Secret>,
        locale: impl Into<String>,
    ) -> Self {
        Self::with_policy(owner, currency, secret, locale, ApproveAll)
    }
}

impl<P: LoanPolicy> AccountLedger<P> {
    /// Open an account with an empty log and a custom loan policy
    pub fn with_policy(
        owner: impl Into<String>,
        currency: impl Into<String>,
        secret: impl Into<Secret>,
        locale: impl Into<String>,
        policy: P,
    ) -> Self {
        AccountLedger {
            owner: owner.into(),
            currency: currency.into(),
            locale: locale.into(),
            secret: secret.into(),
            movements: Vec::new(),
            totals: AccountSummary::default(),
            policy,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Check a candidate against the account secret without revealing it
    ///
    /// None of the ledger's own operations call this.
    pub fn verify_secret(&self, candidate: &str) -> bool {
        self.secret.matches(candidate)
    }

    /// Snapshot of the movement log, oldest first
    ///
    /// The returned vector is a copy; changing it has no effect on the ledger.
    pub fn movements(&self) -> Vec<Movement> {
        self.movements.clone()
    }

    /// Most recent movement, if any
    pub fn latest(&self) -> Option<Movement> {
        self.movements.last().copied()
    }

    /// Number of movements recorded
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Net balance, always equal to the sum of the movement log
    ///
    /// May be negative: the ledger enforces no floor.
    pub fn balance(&self) -> Decimal {
        self.totals.balance
    }

    /// Credit and debit totals for the whole log
    pub fn summary(&self) -> AccountSummary {
        self.totals
    }

    /// Append a credit of `amount`
    ///
    /// The amount is recorded verbatim, so a negative deposit is a debit.
    /// Repeating a call records a second, distinct movement.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if `amount` is not a well-formed number, or if
    /// recording it would take the credit or debit total outside the
    /// representable range.
    pub fn deposit(&mut self, amount: impl IntoAmount) -> Result<&mut Self, LedgerError> {
        let amount = amount.into_amount()?;
        self.append(amount)?;
        Ok(self)
    }

    /// Append a debit of `amount`
    ///
    /// Exactly equivalent to `deposit(-amount)`. No balance check is made.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AccountLedger::deposit`].
    pub fn withdraw(&mut self, amount: impl IntoAmount) -> Result<&mut Self, LedgerError> {
        let amount = amount.into_amount()?;
        self.append(-amount)?;
        Ok(self)
    }

    /// Request a loan, crediting it only if the policy approves
    ///
    /// Returns the ledger whether or not the loan was approved.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AccountLedger::deposit`]. A rejected loan is not
    /// an error.
    pub fn request_loan(&mut self, amount: impl IntoAmount) -> Result<&mut Self, LedgerError> {
        let _ = self.try_loan(amount)?;
        Ok(self)
    }

    /// Request a loan and report the policy's decision
    ///
    /// # Errors
    ///
    /// Same conditions as [`AccountLedger::deposit`].
    pub fn try_loan(&mut self, amount: impl IntoAmount) -> Result<LoanDecision, LedgerError> {
        let amount = amount.into_amount()?;

        if !self.policy.approve(amount, &self.movements) {
            debug!(owner = %self.owner, %amount, "loan rejected by policy");
            return Ok(LoanDecision::Rejected(amount));
        }

        self.append(amount)?;
        Ok(LoanDecision::Approved(amount))
    }

    fn append(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        // Negated zero must be recorded the same as zero.
        let amount = if amount.is_zero() {
            Decimal::ZERO
        } else {
            amount
        };

        let totals = self
            .totals
            .with_movement(amount)
            .ok_or_else(|| LedgerError::invalid_amount(amount.to_string(), "balance overflow"))?;

        self.movements.push(amount);
        self.totals = totals;

        debug!(owner = %self.owner, %amount, balance = %totals.balance, "movement recorded");
        Ok(())
    }
}
