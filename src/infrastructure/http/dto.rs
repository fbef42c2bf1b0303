use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Transaction, TransactionId, TransactionKind};
use crate::domain::serde_utils::decimal_number;

/// `GET /current_balance` response.
#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    #[serde(with = "decimal_number")]
    pub current_balance: Decimal,
}

/// `POST /add_expense` request body.
#[derive(Debug, Serialize)]
pub struct AddExpenseRequest<'a> {
    #[serde(with = "decimal_number")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: &'a str,
}

/// `POST /transactions` request body.
#[derive(Debug, Serialize)]
pub struct TransactionsRequest {
    pub start_date: String,
    pub end_date: String,
}

/// `POST /transactions` response.
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// `DELETE /delete_expense` request body.
#[derive(Debug, Serialize)]
pub struct DeleteExpenseRequest {
    pub id: TransactionId,
}

/// Error body. The backend uses `error` on validation failures and
/// `message` on missing rows.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message).filter(|m| !m.trim().is_empty())
    }
}
