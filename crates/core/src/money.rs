//! Monetary amounts in the smallest currency unit.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Non-negative amount of BRL, stored as integer cents.
///
/// Keeping cents avoids float drift when summing cart lines; conversion from
/// the catalog's decimal prices happens once, at decode time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);


impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convert a decimal amount (e.g. `9.99`) to cents, rounding half away from zero.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation(format!("amount {amount} is not finite")));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!("amount {amount} is negative")));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation(format!("amount {amount} is too large")));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiply by a line quantity (saturating).
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// The two-decimal rendering with the separator dropped: `42.00` → `"4200"`,
    /// `0.50` → `"050"`.
    pub fn digits(&self) -> String {
        format!("{}{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Always two decimal places, `.` separator (`25.50`).
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(Money::from_cents(2550).to_string(), "25.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn digits_drop_the_separator() {
        assert_eq!(Money::from_cents(4200).digits(), "4200");
        assert_eq!(Money::from_cents(50).digits(), "050");
        assert_eq!(Money::from_cents(123_456).digits(), "123456");
    }

    #[test]
    fn from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(9.99).unwrap().cents(), 999);
        assert_eq!(Money::from_decimal(5.5).unwrap().cents(), 550);
        assert_eq!(Money::from_decimal(0.0).unwrap(), Money::ZERO);
        assert_eq!(Money::from_decimal(1.005).unwrap().cents(), 100);
    }

    #[test]
    fn from_decimal_rejects_negative_and_nan() {
        match Money::from_decimal(-1.0).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("negative")),
            _ => panic!("Expected Validation error for negative amount"),
        }
        assert!(Money::from_decimal(f64::NAN).is_err());
        assert!(Money::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn sum_of_empty_iterator_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: multiplying then summing matches integer arithmetic on cents.
        #[test]
        fn times_and_sum_match_cent_arithmetic(
            lines in prop::collection::vec((0u64..1_000_000u64, 1u32..100u32), 0..20)
        ) {
            let expected: u64 = lines.iter().map(|(c, q)| c * u64::from(*q)).sum();
            let total: Money = lines
                .iter()
                .map(|(c, q)| Money::from_cents(*c).times(*q))
                .sum();
            prop_assert_eq!(total.cents(), expected);
        }
    }
}
