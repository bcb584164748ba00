//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point drift when
//! summing. On disk an amount is a plain JSON number in currency units
//! (`12.5`, `100`), which keeps ledgers interchangeable with hand-edited files.
//! Amounts are capped at `Money::MAX` so that number always reads back to the
//! exact same cents.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Currency prefixes accepted (and ignored) when parsing user input
const SYMBOL_PREFIXES: [&str; 3] = ["Rs.", "Rs", "$"];

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

/// Largest accepted magnitude in cents (10 trillion currency units)
const MAX_CENTS: i64 = 1_000_000_000_000_000;

impl Money {
    /// Largest amount `parse` and deserialization accept
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendr::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a decimal amount, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities, and values beyond `Money::MAX`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in currency units as a float
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "Rs.10.50", "$10.50", "10", "10.5".
    /// More than two decimal places, or a magnitude above `Money::MAX`, is an
    /// error.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };

        let rest = SYMBOL_PREFIXES
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix))
            .unwrap_or(rest)
            .trim_start();

        let (units_str, cents_str) = match rest.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (rest, ""),
        };

        if units_str.is_empty() || !units_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !cents_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if cents_str.len() > 2 {
            return Err(MoneyParseError::TooPrecise(input.to_string()));
        }

        let units: i64 = units_str.parse().map_err(|_| invalid())?;
        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cents_str.parse().map_err(|_| invalid())?,
        };

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .filter(|total| *total <= MAX_CENTS)
            .ok_or_else(|| MoneyParseError::OutOfRange(input.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Add two amounts, or `None` on i64 overflow
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, or `None` if the total overflows
    pub fn checked_sum(amounts: impl IntoIterator<Item = Money>) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.units().abs(), self.cents_part());
        // Pad as a unit so `{:<10}` column layouts work
        f.pad(&text)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.cents_part() == 0 {
            serializer.serialize_i64(self.units())
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    /// More than two decimal places
    TooPrecise(String),
    /// Magnitude above `Money::MAX`
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "Amount has more than two decimal places: '{}'", s)
            }
            MoneyParseError::OutOfRange(s) => {
                write!(f, "Amount exceeds {}: '{}'", Money::MAX, s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
