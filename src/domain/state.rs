//! Client-side view state and its transitions.

use rust_decimal::Decimal;

use super::entities::{DateRange, MonthlySummary, Transaction, TransactionId};

/// Result of a successful round trip, applied to [`LedgerState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateUpdate {
    BalanceLoaded(Decimal),
    SummaryLoaded(MonthlySummary),
    TransactionsLoaded {
        range: DateRange,
        transactions: Vec<Transaction>,
    },
}

/// Everything the screen displays about the ledger.
///
/// Values only change through [`LedgerState::apply`], and only after the
/// backend confirmed the request that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerState {
    balance: Decimal,
    summary: MonthlySummary,
    transactions: Vec<Transaction>,
    range: Option<DateRange>,
}

impl LedgerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a confirmed update. Each field is replaced wholesale.
    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::BalanceLoaded(balance) => self.balance = balance,
            StateUpdate::SummaryLoaded(summary) => self.summary = summary,
            StateUpdate::TransactionsLoaded {
                range,
                transactions,
            } => {
                self.range = Some(range);
                self.transactions = transactions;
            }
        }
    }

    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    #[must_use]
    pub const fn summary(&self) -> &MonthlySummary {
        &self.summary
    }

    /// Transactions in server order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Range the displayed list was fetched for.
    #[must_use]
    pub const fn range(&self) -> Option<DateRange> {
        self.range
    }

    #[must_use]
    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }
}
