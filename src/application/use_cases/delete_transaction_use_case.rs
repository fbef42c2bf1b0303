use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::TransactionId;
use crate::domain::errors::LedgerError;
use crate::domain::ports::LedgerPort;

/// Deletes a single transaction.
pub struct DeleteTransactionUseCase {
    ledger: Arc<dyn LedgerPort>,
}

impl DeleteTransactionUseCase {
    #[must_use]
    pub const fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self { ledger }
    }

    /// # Errors
    /// Returns the backend error, including `NotFound` for unknown ids.
    pub async fn execute(&self, id: TransactionId) -> Result<(), LedgerError> {
        match self.ledger.delete_transaction(id).await {
            Ok(()) => {
                info!(id = %id, "Transaction deleted");
                Ok(())
            }
            Err(e) => {
                error!(id = %id, error = %e, "Error deleting transaction");
                Err(e)
            }
        }
    }
}
