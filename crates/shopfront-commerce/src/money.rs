//! Money type for representing monetary values.
//!
//! Amounts are integer minor units (cents for USD). The catalog and shipping
//! feeds carry decimal numbers; they are converted once at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    AED,
    SAR,
    JPY,
}

impl Currency {
    /// ISO code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AED => "AED",
            Currency::SAR => "SAR",
            Currency::JPY => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::AED => "AED ",
            Currency::SAR => "SAR ",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of minor-unit digits.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn scale(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in minor units.
    pub minor_units: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Convert a decimal amount, rounding to the nearest minor unit.
    ///
    /// ```
    /// use shopfront_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(1299.99, Currency::USD);
    /// assert_eq!(price.minor_units, 129999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let minor_units = (amount * currency.scale() as f64).round() as i64;
        Self::new(minor_units, currency)
    }

    /// Like [`Money::from_decimal`], but `None` when the amount is not finite
    /// or does not fit in minor units.
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let minor = (amount * currency.scale() as f64).round();
        if !minor.is_finite() || minor.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(minor as i64, currency))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.minor_units == 0
    }

    pub fn to_decimal(&self) -> f64 {
        self.minor_units as f64 / self.currency.scale() as f64
    }

    /// Format with symbol and fixed decimals (e.g., "$522.50").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "522.50").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", self.to_decimal())
    }

    /// Add, failing on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.minor_units
            .checked_add(other.minor_units)
            .map(|minor| Money::new(minor, self.currency))
    }

    /// Multiply by a whole quantity, failing on overflow.
    pub fn try_multiply(&self, quantity: i64) -> Option<Money> {
        self.minor_units
            .checked_mul(quantity)
            .map(|minor| Money::new(minor, self.currency))
    }

    /// Multiply by a fractional factor (weights, tax rates), rounding to the
    /// nearest minor unit.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let minor = (self.minor_units as f64 * factor).round() as i64;
        Money::new(minor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
