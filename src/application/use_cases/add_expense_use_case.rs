//! Add expense use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ExpenseDraft;
use crate::domain::errors::LedgerError;
use crate::domain::ports::{LedgerPort, NewExpense};

/// Validates a draft and records it with the backend.
#[derive(Clone)]
pub struct AddExpenseUseCase {
    ledger: Arc<dyn LedgerPort>,
}

impl AddExpenseUseCase {
    #[must_use]
    pub const fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self { ledger }
    }

    /// Executes the add with the provided draft.
    ///
    /// # Errors
    /// Returns a validation error without contacting the backend if the
    /// amount is not a positive number, or the backend error otherwise.
    pub async fn execute(&self, draft: &ExpenseDraft) -> Result<NewExpense, LedgerError> {
        let expense = draft.validate().inspect_err(|e| {
            debug!(error = %e, "Rejected expense draft");
        })?;

        debug!(amount = %expense.amount, kind = %expense.kind, "Posting expense");

        self.ledger.add_expense(&expense).await.map_err(|e| {
            warn!(error = %e, "Failed to add expense");
            e
        })?;

        info!(amount = %expense.amount, kind = %expense.kind, "Expense added");
        Ok(expense)
    }
}
