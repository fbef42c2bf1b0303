//! Transaction entity.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{decimal_number, timestamp};

/// Server-assigned transaction identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for TransactionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money going out.
    #[default]
    Debit,
    /// Money coming in.
    Credit,
}

impl TransactionKind {
    /// Wire name used by the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }

    /// Returns the other kind.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Debit => Self::Credit,
            Self::Credit => Self::Debit,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded debit or credit as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    #[serde(with = "timestamp")]
    date: NaiveDateTime,
    #[serde(rename = "type")]
    kind: TransactionKind,
    #[serde(with = "decimal_number")]
    amount: Decimal,
    #[serde(default)]
    description: Option<String>,
}

impl Transaction {
    /// Field names in display and export order.
    pub const FIELD_NAMES: [&'static str; 5] = ["id", "date", "type", "amount", "description"];

    #[must_use]
    pub fn new(
        id: impl Into<TransactionId>,
        date: NaiveDateTime,
        kind: TransactionKind,
        amount: Decimal,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            kind,
            amount,
            description,
        }
    }

    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.id
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Calendar day the transaction was recorded on.
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    #[must_use]
    pub const fn kind(&self) -> TransactionKind {
        self.kind
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the description, treating a blank one as absent.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Effect of this transaction on the running balance.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }
}
