//! Expense tracker backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    AddExpenseRequest, BalanceResponse, DeleteExpenseRequest, ErrorResponse, TransactionsRequest,
    TransactionsResponse,
};
use crate::domain::entities::{DateRange, MonthlySummary, Transaction, TransactionId};
use crate::domain::errors::LedgerError;
use crate::domain::ports::{LedgerPort, NewExpense};

const USER_AGENT: &str = concat!("expense-tui/", env!("CARGO_PKG_VERSION"));

/// JSON client for the expense tracker backend.
pub struct LedgerHttpClient {
    client: Client,
    base_url: String,
}

impl LedgerHttpClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LedgerError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, LedgerError> {
        debug!(endpoint, "Sending backend request");

        let response = request.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "Backend request failed");
            if e.is_timeout() {
                LedgerError::network("request timed out")
            } else if e.is_connect() {
                LedgerError::network(format!("failed to connect to {}", self.base_url))
            } else {
                LedgerError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(endpoint, status = status.as_u16(), "Backend request succeeded");
            Ok(response)
        } else {
            Err(Self::handle_error_response(endpoint, status, response).await)
        }
    }

    async fn handle_error_response(
        endpoint: &'static str,
        status: StatusCode,
        response: Response,
    ) -> LedgerError {
        let message = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(ErrorResponse::into_message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        warn!(endpoint, status = status.as_u16(), %message, "Backend rejected request");

        match status {
            StatusCode::NOT_FOUND => LedgerError::not_found(message),
            _ => LedgerError::rejected(status.as_u16(), message),
        }
    }

    async fn read_json<T: DeserializeOwned>(
        endpoint: &'static str,
        response: Response,
    ) -> Result<T, LedgerError> {
        response.json::<T>().await.map_err(|e| {
            warn!(endpoint, error = %e, "Failed to parse backend response");
            LedgerError::decode(format!("failed to parse {endpoint} response: {e}"))
        })
    }
}

#[async_trait]
impl LedgerPort for LedgerHttpClient {
    async fn fetch_balance(&self) -> Result<Decimal, LedgerError> {
        const ENDPOINT: &str = "current_balance";
        let response = self
            .send(ENDPOINT, self.client.get(self.endpoint(ENDPOINT)))
            .await?;
        let body: BalanceResponse = Self::read_json(ENDPOINT, response).await?;
        Ok(body.current_balance)
    }

    async fn fetch_monthly_summary(&self) -> Result<MonthlySummary, LedgerError> {
        const ENDPOINT: &str = "monthly_summary";
        let response = self
            .send(ENDPOINT, self.client.get(self.endpoint(ENDPOINT)))
            .await?;
        Self::read_json(ENDPOINT, response).await
    }

    async fn add_expense(&self, expense: &NewExpense) -> Result<(), LedgerError> {
        const ENDPOINT: &str = "add_expense";
        let body = AddExpenseRequest {
            amount: expense.amount,
            kind: expense.kind,
            description: &expense.description,
        };
        self.send(ENDPOINT, self.client.post(self.endpoint(ENDPOINT)).json(&body))
            .await?;

        debug!(amount = %expense.amount, kind = %expense.kind, "Transaction recorded");
        Ok(())
    }

    async fn fetch_transactions(&self, range: DateRange) -> Result<Vec<Transaction>, LedgerError> {
        const ENDPOINT: &str = "transactions";
        let body = TransactionsRequest {
            start_date: range.start_param(),
            end_date: range.end_param(),
        };
        let response = self
            .send(ENDPOINT, self.client.post(self.endpoint(ENDPOINT)).json(&body))
            .await?;
        let body: TransactionsResponse = Self::read_json(ENDPOINT, response).await?;

        debug!(%range, count = body.transactions.len(), "Transactions loaded");
        Ok(body.transactions)
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), LedgerError> {
        const ENDPOINT: &str = "delete_expense";
        let body = DeleteExpenseRequest { id };
        self.send(
            ENDPOINT,
            self.client.delete(self.endpoint(ENDPOINT)).json(&body),
        )
        .await?;

        debug!(%id, "Transaction deleted");
        Ok(())
    }
}
