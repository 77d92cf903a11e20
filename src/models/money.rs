//! Money type for representing currency amounts
//!
//! Amounts are stored as integer minor units (cents) to avoid floating-point
//! rounding drift. Every engine computation is exact integer arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// A monetary amount in minor units (hundredths of the currency unit)
///
/// Input records are required to be non-negative, but derived values such as
/// remaining headroom or a projected balance may go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest combined magnitude of a snapshot's amounts
    ///
    /// Keeping inputs under this bound leaves headroom for every derived
    /// sum, difference and percentage to stay exact in `i64`.
    pub const MAX_INPUT_TOTAL: Money = Money(i64::MAX / 200);

    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use payday::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole major units, truncated toward zero
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Minor-unit remainder (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Addition that reports overflow instead of wrapping
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Divide into `parts` equal shares, rounding toward negative infinity
    ///
    /// A non-positive `parts` is treated as one share.
    pub fn per_part(&self, parts: i64) -> Self {
        Self(self.0.div_euclid(parts.max(1)))
    }

    /// Integer percentage of `whole` this amount represents, floored
    ///
    /// Returns 0 for a zero amount and 100 when `whole` is zero but this
    /// amount is positive.
    pub fn percent_of(&self, whole: Money) -> i64 {
        if self.0 <= 0 {
            return 0;
        }
        if whole.0 <= 0 {
            return 100;
        }
        let percent = i128::from(self.0) * 100 / i128::from(whole.0);
        i64::try_from(percent).unwrap_or(i64::MAX)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5" and the
    /// empty string (zero). Digits past the second decimal are dropped. Only
    /// the leading `-` may carry a sign.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::zero());
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let s = s.strip_prefix('$').unwrap_or(s);

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (dollars, fraction) = s.split_once('.').unwrap_or((s, ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (dollars.is_empty() && fraction.is_empty()) || !all_digits(dollars) || !all_digits(fraction) {
            return Err(invalid());
        }

        let dollars: i64 = if dollars.is_empty() {
            0
        } else {
            dollars.parse().map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?
        };
        let fraction: String = format!("{}00", fraction).chars().take(2).collect();
        let fraction: i64 = fraction.parse().map_err(|_| invalid())?;
        let cents = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(fraction))
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Money amount out of range: {0}")]
    OutOfRange(String),
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(-5).format_with_symbol("€"), "-€0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("12.345").unwrap().cents(), 1234);
        assert_eq!(Money::parse(" ").unwrap().cents(), 0);
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("abc").is_err());
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_rejects_inner_signs() {
        assert!(Money::parse("1.-5").is_err());
        assert!(Money::parse("1.+5").is_err());
        assert!(Money::parse("+1.50").is_err());
        assert!(Money::parse("$-1").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            Money::parse("92233720368547758.07"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_checked_add() {
        let big = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(big.checked_add(big), None);
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
    }

    #[test]
    fn test_per_part_floors() {
        assert_eq!(Money::from_cents(1000).per_part(3).cents(), 333);
        assert_eq!(Money::from_cents(-1000).per_part(3).cents(), -334);
        assert_eq!(Money::from_cents(1000).per_part(0).cents(), 1000);
    }

    #[test]
    fn test_percent_of() {
        let limit = Money::from_cents(4000);
        assert_eq!(Money::from_cents(3200).percent_of(limit), 80);
        assert_eq!(Money::from_cents(5000).percent_of(limit), 125);
        assert_eq!(Money::zero().percent_of(Money::zero()), 0);
        assert_eq!(Money::from_cents(1).percent_of(Money::zero()), 100);
        assert_eq!(Money::MAX_INPUT_TOTAL.percent_of(Money::from_cents(1)), Money::MAX_INPUT_TOTAL.cents() * 100);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
