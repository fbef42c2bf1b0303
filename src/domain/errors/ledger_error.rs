//! Ledger error types.

use thiserror::Error;

/// Errors raised by ledger operations.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LedgerError {
    #[error("please enter a valid positive amount (got {input:?})")]
    InvalidAmount { input: String },

    #[error("please select both start and end dates")]
    MissingDateRange,

    #[error("invalid date {input:?}, use YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("start date {start} cannot be after end date {end}")]
    InvertedDateRange { start: String, end: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("failed to decode backend response: {message}")]
    Decode { message: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl LedgerError {
    /// Creates invalid amount error.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
        }
    }

    /// Creates invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates rejected error.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. }
                | Self::MissingDateRange
                | Self::InvalidDate { .. }
                | Self::InvertedDateRange { .. }
        )
    }
}
