//! Prices

use std::{fmt, ops::Deref, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{self, Currency};
use thiserror::Error;

/// Errors that can occur while parsing a price from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The text is not a number.
    #[error("Invalid price: {0}")]
    Invalid(String),

    /// The amount is below zero.
    #[error("Price cannot be negative: {0}")]
    Negative(String),

    /// The amount has a fractional part; prices are whole currency units.
    #[error("Price must be a whole amount: {0}")]
    Fractional(String),
}

/// Represents a unit price in whole currency units (e.g. rupees).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: u64,
}

impl Price {
    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Price multiplied by a quantity, saturating at `u64::MAX`.
    pub fn times(self, quantity: u32) -> u64 {
        self.value.saturating_mul(u64::from(quantity))
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Price::new(value)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let amount = trimmed
            .parse::<Decimal>()
            .map_err(|_err| PriceError::Invalid(s.to_string()))?;

        if amount < Decimal::ZERO {
            return Err(PriceError::Negative(s.to_string()));
        }

        if !amount.fract().is_zero() {
            return Err(PriceError::Fractional(s.to_string()));
        }

        amount
            .to_u64()
            .map(Price::new)
            .ok_or_else(|| PriceError::Invalid(s.to_string()))
    }
}

/// How whole-unit amounts are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayFormat {
    currency: &'static Currency,
}

impl DisplayFormat {
    /// Create a display format for the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self { currency }
    }

    /// Currency used for all displayed amounts.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Format a whole-unit amount, e.g. `₹280`.
    pub fn format(&self, amount: u64) -> String {
        match currency_symbol(self.currency.iso_alpha_code) {
            Some(symbol) => format!("{symbol}{amount}"),
            None => format!("{amount} {}", self.currency.iso_alpha_code),
        }
    }

    /// Format a price, e.g. `₹40`.
    pub fn price(&self, price: Price) -> String {
        self.format(*price)
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::new(iso::INR)
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.currency.iso_alpha_code)
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "INR" => Some("₹"),
        "GBP" => Some("£"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        _ => None,
    }
}
