//! Use case implementations.

mod add_expense_use_case;
mod delete_transaction_use_case;
mod load_transactions_use_case;

pub use add_expense_use_case::AddExpenseUseCase;
pub use delete_transaction_use_case::DeleteTransactionUseCase;
pub use load_transactions_use_case::LoadTransactionsUseCase;
