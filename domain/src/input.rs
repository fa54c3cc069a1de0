//! Parsing of raw form input: decimals, whole numbers, record ids and dates.
//!
//! Form state keeps what the user typed; these helpers decide whether the text
//! is usable and produce the canonical string the API expects.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::DisplayConfig;
use std::str::FromStr;
use thiserror::Error;

/// Fraction digits the API uses for every currency column
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Date format used in payloads and `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("value is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a whole number")]
    NotWhole(String),
    #[error("'{0}' is not a date (expected YYYY-MM-DD)")]
    NotADate(String),
}

/// Parse a plain decimal such as `"25"`, `"-3.5"` or `" 1000.00 "`.
///
/// Grouping separators, exponents and `NaN` are rejected.
pub fn parse_decimal(input: &str) -> Result<Decimal, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.contains(['_', ',']) {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    Decimal::from_str(trimmed).map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parse a non-negative whole count such as an item quantity
pub fn parse_whole(input: &str) -> Result<u32, InputError> {
    let value = parse_decimal(input)?;
    if !value.fract().is_zero() {
        return Err(InputError::NotWhole(input.trim().to_string()));
    }
    value.to_u32().ok_or_else(|| InputError::NotWhole(input.trim().to_string()))
}

/// Parse a referenced record id typed or selected in a form
pub fn parse_id(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| InputError::NotADate(trimmed.to_string()))
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input.trim())
}

/// Round half away from zero to exactly two fraction digits; `-0.00` becomes `0.00`
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Parse a currency amount and round it the way it will be sent.
///
/// Range checks run on this value so that `0.004` counts as zero.
pub fn parse_currency(input: &str) -> Result<Decimal, InputError> {
    parse_decimal(input).map(round_currency)
}

pub fn currency_string(value: Decimal) -> String {
    round_currency(value).to_string()
}

/// `"300"` → `Some("300.00")`; blank or unparseable input → `None`
pub fn normalize_currency(input: &str) -> Option<String> {
    parse_currency(input).ok().map(|value| value.to_string())
}

/// Like [`normalize_currency`] but keeps the precision the user typed
pub fn normalize_quantity(input: &str) -> Option<String> {
    parse_decimal(input).ok().map(|mut value| {
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        value.to_string()
    })
}

/// Canonical `YYYY-MM-DD`, or `None` when blank or not a date
pub fn normalize_date(input: &str) -> Option<String> {
    parse_date(input).ok().map(|date| date.format(DATE_FORMAT).to_string())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `$1,234.50`-style amount for display
pub fn format_currency(value: Decimal, config: &DisplayConfig) -> String {
    let mut rounded =
        value.round_dp_with_strategy(config.currency_decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(config.currency_decimal_places);
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, config.currency_symbol, grouped, fraction),
        None => format!("{}{}{}", sign, config.currency_symbol, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_normalization_pads_two_places() {
        assert_eq!(normalize_currency("300"), Some("300.00".to_string()));
        assert_eq!(normalize_currency(" 12.5 "), Some("12.50".to_string()));
        assert_eq!(normalize_currency("0.005"), Some("0.01".to_string()));
        assert_eq!(normalize_currency(""), None);
        assert_eq!(normalize_currency("abc"), None);
        assert_eq!(normalize_currency("NaN"), None);
        assert_eq!(normalize_currency("1,000"), None);
    }

    #[test]
    fn test_currency_parsing_rounds_before_range_checks() {
        assert_eq!(parse_currency("0.004"), Ok(Decimal::new(0, 2)));
        assert!(parse_currency("0.004").unwrap().is_zero());
        assert_eq!(parse_currency("999.999"), Ok(Decimal::new(100000, 2)));
        assert_eq!(normalize_currency("-0.001"), Some("0.00".to_string()));
        assert_eq!(parse_currency(" "), Err(InputError::Empty));
    }

    #[test]
    fn test_quantity_normalization_keeps_typed_precision() {
        assert_eq!(normalize_quantity("2.50"), Some("2.50".to_string()));
        assert_eq!(normalize_quantity("-3"), Some("-3".to_string()));
        assert_eq!(normalize_quantity("-0"), Some("0".to_string()));
        assert_eq!(normalize_quantity("many"), None);
    }

    #[test]
    fn test_parse_whole_rejects_fractions_and_negatives() {
        assert_eq!(parse_whole("40"), Ok(40));
        assert_eq!(parse_whole("3.0"), Ok(3));
        assert_eq!(parse_whole("0"), Ok(0));
        assert_eq!(parse_whole("2.5"), Err(InputError::NotWhole("2.5".to_string())));
        assert_eq!(parse_whole("-1"), Err(InputError::NotWhole("-1".to_string())));
        assert_eq!(parse_whole(""), Err(InputError::Empty));
    }

    #[test]
    fn test_ids_dates_and_emails() {
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("twelve"), None);

        assert_eq!(normalize_date("2024-02-29"), Some("2024-02-29".to_string()));
        assert_eq!(normalize_date("2023-02-29"), None);
        assert_eq!(normalize_date("06/01/2024"), None);

        assert!(is_valid_email("ada@example.org"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada lovelace@example.org"));
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        let config = DisplayConfig::default();
        assert_eq!(format_currency(Decimal::new(123450, 2), &config), "$1,234.50");
        assert_eq!(format_currency(Decimal::new(300, 0), &config), "$300.00");
        assert_eq!(format_currency(Decimal::new(-1000000, 0), &config), "-$1,000,000.00");
    }
}
