//! Account-related types for the account ledger
//!
//! This module defines the opaque account secret and the derived summary
//! produced from a movement log.

use rust_decimal::Decimal;
use std::fmt;

/// Opaque authentication token held by an account (e.g. a PIN)
///
/// The value is never exposed: there is no accessor, `Debug` is redacted and
/// there is no `Display`. The only operation is an equality check against a
/// candidate, for use by an authentication layer outside the ledger.
pub struct Secret(String);

impl Secret {
    /// Whether `candidate` matches the stored secret
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Secret(value.to_string())
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret(value)
    }
}

macro_rules! impl_secret_from_pin {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Secret {
                fn from(value: $t) -> Self {
                    Secret(value.to_string())
                }
            }
        )*
    };
}

// Numeric PINs
impl_secret_from_pin!(i32, u16, u32, u64);

/// Totals derived from a movement log
///
/// `balance` is always `incomes - outgoings`. Both sides are kept within the
/// range of `Decimal`, so the balance never needs saturating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountSummary {
    /// Sum of all credits (positive movements)
    pub incomes: Decimal,

    /// Absolute sum of all debits (negative movements)
    pub outgoings: Decimal,

    /// Net balance: incomes - outgoings
    pub balance: Decimal,
}

impl AccountSummary {
    /// Totals after adding one more movement
    ///
    /// Returns `None` if either side's total would overflow.
    pub fn with_movement(self, movement: Decimal) -> Option<Self> {
        let (incomes, outgoings) = if movement.is_sign_negative() {
            (self.incomes, self.outgoings.checked_add(movement.abs())?)
        } else {
            (self.incomes.checked_add(movement)?, self.outgoings)
        };

        Some(AccountSummary {
            incomes,
            outgoings,
            balance: incomes.checked_sub(outgoings)?,
        })
    }

    /// Build a summary from a sequence of movements
    ///
    /// Returns `None` if either side's total would overflow.
    pub fn from_movements<'a>(movements: impl IntoIterator<Item = &'a Decimal>) -> Option<Self> {
        movements
            .into_iter()
            .try_fold(AccountSummary::default(), |summary, &mov| {
                summary.with_movement(mov)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::pin(Secret::from(1111), "1111", true)]
    #[case::wrong_pin(Secret::from(1111), "1112", false)]
    #[case::text(Secret::from("s3cret"), "s3cret", true)]
    #[case::owned(Secret::from(String::from("abc")), "ABC", false)]
    fn test_secret_matches(#[case] secret: Secret, #[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(secret.matches(candidate), expected);
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret::from(1111);
        let rendered = format!("{:?}", secret);
        assert_eq!(rendered, "Secret(***)");
        assert!(!rendered.contains("1111"));
    }

    #[rstest]
    #[case::empty(vec![], Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)]
    #[case::mixed(
        vec![Decimal::from(1500), Decimal::from(-1000), Decimal::from(10000), Decimal::from(-5000)],
        Decimal::from(11500),
        Decimal::from(6000),
        Decimal::from(5500)
    )]
    #[case::overdrawn(
        vec![Decimal::from(100), Decimal::from(-250)],
        Decimal::from(100),
        Decimal::from(250),
        Decimal::from(-150)
    )]
    fn test_summary_from_movements(
        #[case] movements: Vec<Decimal>,
        #[case] incomes: Decimal,
        #[case] outgoings: Decimal,
        #[case] balance: Decimal,
    ) {
        let summary = AccountSummary::from_movements(&movements);
        assert_eq!(
            summary,
            Some(AccountSummary {
                incomes,
                outgoings,
                balance
            })
        );
    }

    #[rstest]
    #[case::credit_side(vec![Decimal::MAX, Decimal::ONE])]
    #[case::debit_side(vec![Decimal::MIN, Decimal::NEGATIVE_ONE])]
    #[case::credits_after_matching_debit(vec![Decimal::MAX, Decimal::MIN, Decimal::MAX])]
    fn test_summary_refuses_side_overflow(#[case] movements: Vec<Decimal>) {
        assert_eq!(AccountSummary::from_movements(&movements), None);
    }

    #[test]
    fn test_with_movement_keeps_balance_consistent() {
        let summary = AccountSummary::default()
            .with_movement(Decimal::MAX)
            .and_then(|s| s.with_movement(Decimal::MIN))
            .unwrap();

        assert_eq!(summary.incomes, Decimal::MAX);
        assert_eq!(summary.outgoings, Decimal::MAX);
        assert_eq!(summary.balance, summary.incomes - summary.outgoings);
        assert_eq!(summary.balance, Decimal::ZERO);
    }
}
