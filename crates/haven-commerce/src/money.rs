//! Money type for representing monetary values.
//!
//! Catalog prices are whole currency units with no minor unit, so amounts are
//! plain integers. Quantities may be any integer, which makes a line total
//! signed.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CommerceError::UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount.saturating_mul(factor), self.currency)
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.saturating_add(other.amount),
            self.currency,
        ))
    }

    /// Sum amounts into the given currency.
    pub fn sum(iter: impl IntoIterator<Item = Money>, currency: Currency) -> Money {
        let amount = iter
            .into_iter()
            .fold(0i64, |acc, m| acc.saturating_add(m.amount));
        Money::new(amount, currency)
    }

    /// Format with symbol and thousands separators (e.g., "₹1,000").
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            self.currency.symbol(),
            group_thousands(self.amount.unsigned_abs())
        )
    }

    /// Format without symbol (e.g., "1,000").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        format!("{}{}", sign, group_thousands(self.amount.unsigned_abs()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Insert a comma between every group of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(1000, Currency::INR).display(), "\u{20b9}1,000");
        assert_eq!(Money::new(699, Currency::USD).display(), "$699");
        assert_eq!(Money::new(-1200, Currency::INR).display(), "-\u{20b9}1,200");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(300, Currency::INR);
        assert_eq!(m.multiply(3).amount, 900);
        assert_eq!(m.multiply(-1).amount, -300);
        assert_eq!(Money::new(i64::MAX, Currency::INR).multiply(2).amount, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total = Money::sum(
            [Money::new(900, Currency::INR), Money::new(100, Currency::INR)],
            Currency::INR,
        );
        assert_eq!(total, Money::new(1000, Currency::INR));
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let inr = Money::new(100, Currency::INR);
        let usd = Money::new(100, Currency::USD);
        assert_eq!(inr.try_add(&usd), None);
        assert_eq!(inr.try_add(&inr).map(|m| m.amount), Some(200));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
