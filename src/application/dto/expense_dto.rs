//! Raw form input and its validation.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{DATE_FORMAT, DateRange, TransactionKind};
use crate::domain::errors::LedgerError;
use crate::domain::ports::NewExpense;

/// Add-expense form contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub kind: TransactionKind,
    pub description: String,
}

impl ExpenseDraft {
    #[must_use]
    pub fn new(
        amount: impl Into<String>,
        kind: TransactionKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            kind,
            description: description.into(),
        }
    }

    /// Checks the draft before anything is sent.
    ///
    /// # Errors
    /// Returns `InvalidAmount` unless the amount parses as a positive number.
    pub fn validate(&self) -> Result<NewExpense, LedgerError> {
        let raw = self.amount.trim();
        if !is_plain_number(raw) {
            return Err(LedgerError::invalid_amount(raw));
        }
        let amount = Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .map_err(|_| LedgerError::invalid_amount(raw))?;

        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(raw));
        }

        Ok(NewExpense::new(
            amount.normalize(),
            self.kind,
            self.description.trim(),
        ))
    }
}

/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` and nothing else.
///
/// `Decimal::from_str` also takes `_` separators, which are not amounts.
fn is_plain_number(raw: &str) -> bool {
    fn digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let mantissa_ok = match mantissa.split_once('.') {
        Some((whole, fraction)) => digits(whole) && digits(fraction),
        None => digits(mantissa),
    };
    let exponent_ok = exponent.is_none_or(|e| digits(e.strip_prefix(['+', '-']).unwrap_or(e)));

    mantissa_ok && exponent_ok
}

/// Date range inputs as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeDraft {
    pub start: String,
    pub end: String,
}

impl DateRangeDraft {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Checks both bounds before anything is sent.
    ///
    /// # Errors
    /// Returns `MissingDateRange` if either bound is empty, `InvalidDate` if a
    /// bound is not `YYYY-MM-DD`, and `InvertedDateRange` if start is after end.
    pub fn validate(&self) -> Result<DateRange, LedgerError> {
        let start = self.start.trim();
        let end = self.end.trim();
        if start.is_empty() || end.is_empty() {
            return Err(LedgerError::MissingDateRange);
        }

        let parse = |value: &str| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map_err(|_| LedgerError::invalid_date(value))
        };
        let start_date = parse(start)?;
        let end_date = parse(end)?;

        DateRange::new(start_date, end_date).ok_or_else(|| LedgerError::InvertedDateRange {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

impl From<DateRange> for DateRangeDraft {
    fn from(range: DateRange) -> Self {
        Self::new(range.start_param(), range.end_param())
    }
}
