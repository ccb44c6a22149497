//! Prices
//!
//! Prices are carried as minor units (`u64`) so store totals can be compared exactly. Raw prices
//! typed into the catalog are free text ("₹ 45.50", "45/-"), so parsing keeps only digits and the
//! decimal point before reading the amount.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, INR, USD},
};
use thiserror::Error;

/// Errors raised while reading prices and currencies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The price has no readable amount once stripped of non-numeric characters.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    /// The currency code is not one the storefront trades in.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Parse a free-text price into minor units.
///
/// Every character other than ASCII digits and `.` is discarded, the remainder is read as a
/// decimal amount and rounded to the nearest minor unit.
///
/// # Errors
///
/// Returns [`PriceError::InvalidPrice`] when nothing parsable remains.
pub fn parse_price(raw: &str) -> Result<u64, PriceError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let amount = cleaned
        .parse::<Decimal>()
        .map_err(|_err| PriceError::InvalidPrice(raw.to_string()))?;

    decimal_to_minor(amount).ok_or_else(|| PriceError::InvalidPrice(raw.to_string()))
}

/// Parse a free-text price, falling back to zero when it cannot be read.
pub fn price_or_zero(raw: &str) -> u64 {
    parse_price(raw).unwrap_or(0)
}

/// Convert a numeric (major unit) price into minor units, falling back to zero for negative,
/// non-finite or out of range values.
pub fn price_from_major(amount: f64) -> u64 {
    Decimal::try_from(amount)
        .ok()
        .and_then(decimal_to_minor)
        .unwrap_or(0)
}

/// Convert minor units back into a major unit amount, as stored in cart documents.
pub fn price_to_major(minor: u64) -> f64 {
    (Decimal::from(minor) / Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

fn decimal_to_minor(amount: Decimal) -> Option<u64> {
    if amount.is_sign_negative() {
        return None;
    }

    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_u64())
}

/// Look up a supported currency by its ISO code.
///
/// # Errors
///
/// Returns [`PriceError::UnknownCurrency`] for codes outside the supported set.
pub fn currency(code: &str) -> Result<&'static Currency, PriceError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "INR" => Ok(INR),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(PriceError::UnknownCurrency(other.to_string())),
    }
}

/// Format minor units as money in the given currency.
pub fn format_minor(amount: u64, currency: &'static Currency) -> String {
    Money::from_minor(i64::try_from(amount).unwrap_or(i64::MAX), currency).to_string()
}
