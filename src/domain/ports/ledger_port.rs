//! Ledger backend port definition.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::entities::{
    DateRange, MonthlySummary, Transaction, TransactionId, TransactionKind,
};
use crate::domain::errors::LedgerError;

/// A validated transaction ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub description: String,
}

impl NewExpense {
    #[must_use]
    pub fn new(amount: Decimal, kind: TransactionKind, description: impl Into<String>) -> Self {
        Self {
            amount,
            kind,
            description: description.into(),
        }
    }
}

/// Port for the expense tracker backend.
#[async_trait]
pub trait LedgerPort: Send + Sync {
    /// Fetches the current running balance.
    async fn fetch_balance(&self) -> Result<Decimal, LedgerError>;

    /// Fetches income and expenditure for the current month.
    async fn fetch_monthly_summary(&self) -> Result<MonthlySummary, LedgerError>;

    /// Records a new transaction.
    async fn add_expense(&self, expense: &NewExpense) -> Result<(), LedgerError>;

    /// Lists transactions recorded within the inclusive range, in server order.
    async fn fetch_transactions(&self, range: DateRange) -> Result<Vec<Transaction>, LedgerError>;

    /// Deletes a transaction.
    async fn delete_transaction(&self, id: TransactionId) -> Result<(), LedgerError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::{Datelike, NaiveDate, NaiveDateTime};
    use std::sync::Mutex;

    /// A call received by [`MockLedger`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LedgerCall {
        Balance,
        Summary,
        Add(NewExpense),
        Transactions(DateRange),
        Delete(TransactionId),
    }

    impl LedgerCall {
        /// Returns whether the call changes backend state.
        pub const fn is_mutation(&self) -> bool {
            matches!(self, Self::Add(_) | Self::Delete(_))
        }
    }

    #[derive(Default)]
    struct Inner {
        calls: Vec<LedgerCall>,
        rows: Vec<Transaction>,
        balance: Decimal,
        next_id: i64,
        offline: bool,
    }

    /// In-memory backend that records every call it receives.
    pub struct MockLedger {
        inner: Mutex<Inner>,
        now: NaiveDateTime,
    }

    impl MockLedger {
        /// Creates an empty ledger whose clock reads 2024-01-15 12:00:00.
        pub fn new() -> Self {
            let now = NaiveDate::from_ymd_opt(2024, 1, 15)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .unwrap();
            Self {
                inner: Mutex::new(Inner {
                    next_id: 1,
                    ..Inner::default()
                }),
                now,
            }
        }

        /// Creates a ledger pre-filled with rows, balance derived from them.
        pub fn with_rows(rows: Vec<Transaction>) -> Self {
            let ledger = Self::new();
            {
                let mut inner = ledger.inner.lock().unwrap();
                inner.balance = rows.iter().map(Transaction::signed_amount).sum();
                inner.next_id = rows.iter().map(|t| t.id().as_i64()).max().unwrap_or(0) + 1;
                inner.rows = rows;
            }
            ledger
        }

        /// Makes every subsequent call fail with a network error.
        pub fn set_offline(&self, offline: bool) {
            self.inner.lock().unwrap().offline = offline;
        }

        /// Returns and clears the recorded calls.
        pub fn take_calls(&self) -> Vec<LedgerCall> {
            std::mem::take(&mut self.inner.lock().unwrap().calls)
        }

        pub fn calls(&self) -> Vec<LedgerCall> {
            self.inner.lock().unwrap().calls.clone()
        }

        fn record(&self, call: LedgerCall) -> Result<std::sync::MutexGuard<'_, Inner>, LedgerError> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(call);
            if inner.offline {
                return Err(LedgerError::network("failed to connect to backend"));
            }
            Ok(inner)
        }
    }

    impl Default for MockLedger {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl LedgerPort for MockLedger {
        async fn fetch_balance(&self) -> Result<Decimal, LedgerError> {
            let inner = self.record(LedgerCall::Balance)?;
            Ok(inner.balance)
        }

        async fn fetch_monthly_summary(&self) -> Result<MonthlySummary, LedgerError> {
            let inner = self.record(LedgerCall::Summary)?;
            let this_month = |t: &&Transaction| {
                t.date().year() == self.now.year() && t.date().month() == self.now.month()
            };
            let sum = |kind: TransactionKind| -> Decimal {
                inner
                    .rows
                    .iter()
                    .filter(this_month)
                    .filter(|t| t.kind() == kind)
                    .map(Transaction::amount)
                    .sum()
            };
            Ok(MonthlySummary::new(
                sum(TransactionKind::Credit),
                sum(TransactionKind::Debit),
            ))
        }

        async fn add_expense(&self, expense: &NewExpense) -> Result<(), LedgerError> {
            let mut inner = self.record(LedgerCall::Add(expense.clone()))?;
            let id = inner.next_id;
            inner.next_id += 1;
            let description = Some(expense.description.clone()).filter(|d| !d.is_empty());
            let row = Transaction::new(id, self.now, expense.kind, expense.amount, description);
            inner.balance += row.signed_amount();
            inner.rows.push(row);
            Ok(())
        }

        async fn fetch_transactions(
            &self,
            range: DateRange,
        ) -> Result<Vec<Transaction>, LedgerError> {
            let inner = self.record(LedgerCall::Transactions(range))?;
            Ok(inner
                .rows
                .iter()
                .filter(|t| range.contains(t.day()))
                .cloned()
                .collect())
        }

        async fn delete_transaction(&self, id: TransactionId) -> Result<(), LedgerError> {
            let mut inner = self.record(LedgerCall::Delete(id))?;
            let Some(index) = inner.rows.iter().position(|t| t.id() == id) else {
                return Err(LedgerError::not_found("Expense not found"));
            };
            let row = inner.rows.remove(index);
            inner.balance -= row.signed_amount();
            Ok(())
        }
    }
}
