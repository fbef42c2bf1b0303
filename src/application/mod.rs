//! Application layer with use cases, DTOs and the ledger controller.

/// Data transfer objects.
pub mod dto;
/// Stateful services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{DateRangeDraft, ExpenseDraft};
pub use services::{LedgerController, NotificationManager};
pub use use_cases::{AddExpenseUseCase, DeleteTransactionUseCase, LoadTransactionsUseCase};
