//! Amount conversion for ledger operations
//!
//! Every mutating ledger operation accepts anything implementing [`IntoAmount`].
//! This is the single place where "is this a well-formed number?" is decided:
//! non-finite floats, unparsable text and missing values are all rejected with
//! [`LedgerError::InvalidAmount`].
//!
//! Text amounts must be in plain decimal notation: an optional sign, digits,
//! and at most one `.` (`"1500"`, `"-99.50"`, `".5"`). Digit separators
//! (`"1_000"`, `"1,000"`) and exponents (`"1e3"`) are rejected.
//!
//! A non-zero float too small to be represented is rejected rather than
//! recorded as zero.

use super::error::LedgerError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A single signed entry in an account's movement log
///
/// Positive values are credits, negative values are debits.
pub type Movement = Decimal;

/// Conversion of caller-supplied values into a ledger amount
pub trait IntoAmount {
    /// Convert into a [`Decimal`], or fail with `InvalidAmount`
    fn into_amount(self) -> Result<Decimal, LedgerError>;
}

impl IntoAmount for Decimal {
    fn into_amount(self) -> Result<Decimal, LedgerError> {
        Ok(self)
    }
}

macro_rules! impl_into_amount_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoAmount for $t {
                fn into_amount(self) -> Result<Decimal, LedgerError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_amount_for_int!(i32, i64, u32, u64);

impl IntoAmount for f64 {
    fn into_amount(self) -> Result<Decimal, LedgerError> {
        if !self.is_finite() {
            return Err(LedgerError::invalid_amount(self.to_string(), "not finite"));
        }
        match Decimal::from_f64(self) {
            Some(amount) if !amount.is_zero() || self == 0.0 => Ok(amount),
            Some(_) => Err(LedgerError::invalid_amount(self.to_string(), "precision loss")),
            None if self.abs() < 1.0 => {
                Err(LedgerError::invalid_amount(self.to_string(), "precision loss"))
            }
            None => Err(LedgerError::invalid_amount(self.to_string(), "out of range")),
        }
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Decimal, LedgerError> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::invalid_amount(self, "empty"));
        }
        if !is_plain_decimal(trimmed) {
            return Err(LedgerError::invalid_amount(self, "not a number"));
        }
        Decimal::from_str(trimmed).map_err(|_| LedgerError::invalid_amount(self, "not a number"))
    }
}

/// Optional sign, then digits with at most one `.`, and at least one digit
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

impl IntoAmount for &String {
    fn into_amount(self) -> Result<Decimal, LedgerError> {
        self.as_str().into_amount()
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Decimal, LedgerError> {
        self.as_str().into_amount()
    }
}

impl<T: IntoAmount> IntoAmount for Option<T> {
    fn into_amount(self) -> Result<Decimal, LedgerError> {
        match self {
            Some(value) => value.into_amount(),
            None => Err(LedgerError::invalid_amount("<missing>", "no amount given")),
        }
    }
}
