//! Money with precise decimal arithmetic
//!
//! Claim estimates and repair cost lines are amounts owed, so `Money` is
//! non-negative by construction and fixed at cent precision. All amounts in
//! this system are USD; a currency dimension would be reintroduced at the
//! point a multi-market deployment needs it.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Negative amount: {0}")]
    Negative(Decimal),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A non-negative USD amount at cent precision
///
/// Serializes as a plain decimal string (`"2847.00"`), matching the wire
/// format the presentation layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding to cents
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Negative` for amounts below zero.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount.round_dp(2)))
    }

    /// Creates Money from an integer amount of cents
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::new(cents as i64, 2))
    }

    /// A zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Computes a labor-style amount from hours worked and an hourly rate
    pub fn from_hours(hours: Decimal, rate: Money) -> Result<Self, MoneyError> {
        if hours.is_sign_negative() {
            return Err(MoneyError::InvalidAmount(format!("negative hours: {hours}")));
        }
        Self::new(hours * rate.0)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition
    pub fn checked_add(&self, other: Money) -> Result<Money, MoneyError> {
        Self::new(self.0 + other.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Decimal {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    // Sums of non-negative cent amounts stay within Decimal's range
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(2847.00)).unwrap();
        assert_eq!(m.amount(), dec!(2847.00));
    }

    #[test]
    fn test_money_rounds_to_cents() {
        let m = Money::new(dec!(100.555)).unwrap();
        assert_eq!(m.amount(), dec!(100.56));
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            Money::new(dec!(-1.00)),
            Err(MoneyError::Negative(dec!(-1.00)))
        );
    }

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_hours() {
        let rate = Money::new(dec!(85.00)).unwrap();
        let labor = Money::from_hours(dec!(12), rate).unwrap();
        assert_eq!(labor.amount(), dec!(1020.00));
    }

    #[test]
    fn test_serde_decimal_string() {
        let m = Money::new(dec!(1263.50)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"1263.50\"");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_serde_rejects_negative() {
        let result: Result<Money, _> = serde_json::from_str("\"-5.00\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_sum() {
        let lines = vec![
            Money::new(dec!(1020.00)).unwrap(),
            Money::new(dec!(1485.00)).unwrap(),
            Money::new(dec!(285.00)).unwrap(),
            Money::new(dec!(57.00)).unwrap(),
        ];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total.amount(), dec!(2847.00));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_is_never_negative(cents in 0u64..1_000_000_000u64) {
            let money = Money::from_cents(cents);
            prop_assert!(money.amount() >= Decimal::ZERO);
        }

        #[test]
        fn money_addition_is_commutative(
            a in 0u64..1_000_000_000u64,
            b in 0u64..1_000_000_000u64
        ) {
            let ma = Money::from_cents(a);
            let mb = Money::from_cents(b);
            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn labor_amount_matches_hours_times_rate(
            hours_q in 0u32..200u32,
            rate_cents in 0u64..50_000u64
        ) {
            // quarter-hour increments, realistic shop rates
            let hours = Decimal::new(hours_q as i64, 0) / Decimal::new(4, 0);
            let rate = Money::from_cents(rate_cents);
            let labor = Money::from_hours(hours, rate).unwrap();
            prop_assert_eq!(labor.amount(), (hours * rate.amount()).round_dp(2));
        }
    }
}
