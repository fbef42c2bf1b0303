//! Transaction listing use case.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::DateRangeDraft;
use crate::domain::entities::{DateRange, Transaction};
use crate::domain::errors::LedgerError;
use crate::domain::ports::LedgerPort;

/// Fetches the transactions recorded within a user-supplied range.
pub struct LoadTransactionsUseCase {
    ledger: Arc<dyn LedgerPort>,
}

impl LoadTransactionsUseCase {
    #[must_use]
    pub const fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self { ledger }
    }

    /// Validates the range inputs and fetches the matching transactions.
    ///
    /// # Errors
    /// Returns a validation error without contacting the backend if either
    /// date is missing or malformed, or the backend error otherwise.
    pub async fn execute(
        &self,
        draft: &DateRangeDraft,
    ) -> Result<(DateRange, Vec<Transaction>), LedgerError> {
        let range = draft.validate()?;
        let transactions = self.fetch(range).await?;
        Ok((range, transactions))
    }

    /// Fetches an already validated range.
    ///
    /// # Errors
    /// Returns the backend error.
    pub async fn fetch(&self, range: DateRange) -> Result<Vec<Transaction>, LedgerError> {
        debug!(range = %range, "Fetching transactions");

        match self.ledger.fetch_transactions(range).await {
            Ok(transactions) => {
                debug!(range = %range, count = transactions.len(), "Loaded transactions");
                Ok(transactions)
            }
            Err(e) => {
                warn!(range = %range, error = %e, "Failed to load transactions");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockLedger;

    #[tokio::test]
    async fn test_missing_date_short_circuits() {
        let ledger = Arc::new(MockLedger::new());
        let use_case = LoadTransactionsUseCase::new(ledger.clone());

        let result = use_case
            .execute(&DateRangeDraft::new("2024-01-01", ""))
            .await;

        assert!(matches!(result, Err(LedgerError::MissingDateRange)));
        assert!(ledger.calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_range_returns_rows() {
        let ledger = Arc::new(MockLedger::new());
        let use_case = LoadTransactionsUseCase::new(ledger.clone());

        let (range, rows) = use_case
            .execute(&DateRangeDraft::new("2024-01-01", "2024-01-31"))
            .await
            .unwrap();

        assert_eq!(range.end_param(), "2024-01-31");
        assert!(rows.is_empty());
        assert_eq!(ledger.calls().len(), 1);
    }
}
