use std::fmt::Write;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::serde_utils::timestamp;

/// Placeholder for a transaction without a description.
pub const MISSING_DESCRIPTION: &str = "N/A";

/// Formats money with two decimals behind the currency symbol.
#[must_use]
pub fn format_amount(amount: Decimal, currency_symbol: &str) -> String {
    format!("{currency_symbol} {:.2}", amount.round_dp(2))
}

/// Formats a timestamp with a user supplied chrono pattern.
///
/// An invalid pattern falls back to the backend's own format.
#[must_use]
pub fn format_timestamp(date: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format(timestamp::FORMAT).to_string();
    }
    out
}
