//! Command surface over the ledger view state.
//!
//! Every command talks to the backend first and only touches [`LedgerState`]
//! once the round trip succeeded. Mutating commands re-fetch whatever they may
//! have invalidated instead of patching the state locally:
//!
//! | Command | Refreshes on success |
//! |---|---|
//! | `add_expense` | balance, summary |
//! | `delete_transaction` | transactions (held range), balance, summary |
//!
//! Failures are reported through the [`NotificationManager`] and also returned
//! to the caller.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::application::dto::{DateRangeDraft, ExpenseDraft};
use crate::application::services::notification_manager::NotificationManager;
use crate::application::use_cases::{
    AddExpenseUseCase, DeleteTransactionUseCase, LoadTransactionsUseCase,
};
use crate::domain::entities::TransactionId;
use crate::domain::errors::{ExportError, LedgerError};
use crate::domain::ports::{ExportPort, LedgerPort};
use crate::domain::state::{LedgerState, StateUpdate};

const BALANCE_TITLE: &str = "Current Balance";
const SUMMARY_TITLE: &str = "Monthly Summary";
const ADD_TITLE: &str = "Add Expense";
const TRANSACTIONS_TITLE: &str = "View Transactions";
const DELETE_TITLE: &str = "Delete Transaction";
const EXPORT_TITLE: &str = "Export";

/// Owns the view state and issues every backend request.
pub struct LedgerController {
    state: LedgerState,
    ledger: Arc<dyn LedgerPort>,
    add_expense: AddExpenseUseCase,
    load_transactions: LoadTransactionsUseCase,
    delete_transaction: DeleteTransactionUseCase,
    exporter: Arc<dyn ExportPort>,
    export_path: PathBuf,
    notifications: NotificationManager,
}

impl LedgerController {
    #[must_use]
    pub fn new(
        ledger: Arc<dyn LedgerPort>,
        exporter: Arc<dyn ExportPort>,
        export_path: PathBuf,
        notification_duration: Duration,
    ) -> Self {
        Self {
            state: LedgerState::new(),
            add_expense: AddExpenseUseCase::new(ledger.clone()),
            load_transactions: LoadTransactionsUseCase::new(ledger.clone()),
            delete_transaction: DeleteTransactionUseCase::new(ledger.clone()),
            ledger,
            exporter,
            export_path,
            notifications: NotificationManager::new(notification_duration),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LedgerState {
        &self.state
    }

    #[must_use]
    pub const fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationManager {
        &mut self.notifications
    }

    /// Fetches the running balance.
    ///
    /// # Errors
    /// Returns the backend error after reporting it.
    pub async fn load_balance(&mut self) -> Result<(), LedgerError> {
        match self.ledger.fetch_balance().await {
            Ok(balance) => {
                debug!(balance = %balance, "Balance loaded");
                self.state.apply(StateUpdate::BalanceLoaded(balance));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load balance");
                self.notifications.report(BALANCE_TITLE, &e);
                Err(e)
            }
        }
    }

    /// Fetches this month's income and expenditure.
    ///
    /// # Errors
    /// Returns the backend error after reporting it.
    pub async fn load_summary(&mut self) -> Result<(), LedgerError> {
        match self.ledger.fetch_monthly_summary().await {
            Ok(summary) => {
                debug!(income = %summary.income, expenditure = %summary.expenditure, "Summary loaded");
                self.state.apply(StateUpdate::SummaryLoaded(summary));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load monthly summary");
                self.notifications.report(SUMMARY_TITLE, &e);
                Err(e)
            }
        }
    }

    /// Reloads balance and summary; failures are only reported.
    pub async fn refresh_overview(&mut self) {
        let _ = self.load_balance().await;
        let _ = self.load_summary().await;
    }

    /// Posts a new transaction, then refreshes balance and summary.
    ///
    /// # Errors
    /// Returns a validation error (nothing sent) or the backend error of the
    /// add request. Refresh failures do not fail the command.
    pub async fn add_expense(&mut self, draft: &ExpenseDraft) -> Result<(), LedgerError> {
        if let Err(e) = self.add_expense.execute(draft).await {
            self.notifications.report(ADD_TITLE, &e);
            return Err(e);
        }

        self.refresh_overview().await;
        Ok(())
    }

    /// Replaces the displayed list with the transactions in the given range.
    ///
    /// # Errors
    /// Returns a validation error (nothing sent) or the backend error.
    pub async fn load_transactions(&mut self, draft: &DateRangeDraft) -> Result<(), LedgerError> {
        match self.load_transactions.execute(draft).await {
            Ok((range, transactions)) => {
                self.state.apply(StateUpdate::TransactionsLoaded {
                    range,
                    transactions,
                });
                Ok(())
            }
            Err(e) => {
                self.notifications.report(TRANSACTIONS_TITLE, &e);
                Err(e)
            }
        }
    }

    /// Deletes a transaction, then re-fetches the list, balance and summary.
    ///
    /// # Errors
    /// Returns the backend error; nothing is refreshed in that case.
    pub async fn delete_transaction(&mut self, id: TransactionId) -> Result<(), LedgerError> {
        if let Err(e) = self.delete_transaction.execute(id).await {
            self.notifications
                .error(DELETE_TITLE, format!("Failed to delete transaction: {e}"));
            return Err(e);
        }

        self.notifications
            .info(DELETE_TITLE, "Transaction deleted successfully!");

        self.refresh_transactions().await;
        self.refresh_overview().await;
        Ok(())
    }

    async fn refresh_transactions(&mut self) {
        let Some(range) = self.state.range() else {
            debug!("No range loaded, skipping transaction refresh");
            return;
        };

        match self.load_transactions.fetch(range).await {
            Ok(transactions) => self.state.apply(StateUpdate::TransactionsLoaded {
                range,
                transactions,
            }),
            Err(e) => self.notifications.report(TRANSACTIONS_TITLE, &e),
        }
    }

    /// Writes the currently displayed transactions to the export path.
    ///
    /// # Errors
    /// Returns the exporter error after reporting it.
    pub fn export_current_list(&mut self) -> Result<PathBuf, ExportError> {
        let rows = self.state.transactions();
        debug!(count = rows.len(), path = %self.export_path.display(), "Exporting transactions");

        match self.exporter.export(rows, &self.export_path) {
            Ok(path) => {
                info!(count = rows.len(), path = %path.display(), "Transactions exported");
                self.notifications.info(
                    EXPORT_TITLE,
                    format!("Saved {} rows to {}", rows.len(), path.display()),
                );
                Ok(path)
            }
            Err(e) => {
                error!(error = %e, "Export failed");
                self.notifications
                    .error(EXPORT_TITLE, format!("Export failed: {e}"));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Transaction, TransactionKind};
    use crate::domain::notification::NotificationLevel;
    use crate::domain::ports::mocks::{LedgerCall, MockExportPort, MockLedger};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn row(id: i64, day: u32, kind: TransactionKind, amount: i64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Transaction::new(id, date, kind, Decimal::from(amount), None)
    }

    fn controller_with(ledger: Arc<MockLedger>, exporter: MockExportPort) -> LedgerController {
        LedgerController::new(
            ledger,
            Arc::new(exporter),
            PathBuf::from("transactions.xlsx"),
            Duration::from_secs(5),
        )
    }

    fn controller(ledger: Arc<MockLedger>) -> LedgerController {
        controller_with(ledger, MockExportPort::new())
    }

    fn january() -> DateRangeDraft {
        DateRangeDraft::new("2024-01-01", "2024-01-31")
    }

    fn current_level(controller: &LedgerController) -> Option<NotificationLevel> {
        controller
            .notifications()
            .current_notification()
            .map(|n| n.level)
    }

    #[tokio::test]
    async fn test_add_expense_posts_then_refreshes_balance_and_summary() {
        let ledger = Arc::new(MockLedger::new());
        let mut controller = controller(ledger.clone());

        let draft = ExpenseDraft::new("100", TransactionKind::Credit, "salary");
        controller.add_expense(&draft).await.unwrap();

        let calls = ledger.take_calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], LedgerCall::Add(_)));
        assert_eq!(calls[1], LedgerCall::Balance);
        assert_eq!(calls[2], LedgerCall::Summary);
        assert_eq!(calls.iter().filter(|c| c.is_mutation()).count(), 1);

        assert_eq!(controller.state().balance(), Decimal::from(100));
        assert_eq!(controller.state().summary().income, Decimal::from(100));
    }

    #[tokio::test]
    async fn test_add_expense_with_bad_amount_sends_nothing() {
        let ledger = Arc::new(MockLedger::new());
        let mut controller = controller(ledger.clone());

        for amount in ["", "abc"] {
            let draft = ExpenseDraft::new(amount, TransactionKind::Debit, "lunch");
            let result = controller.add_expense(&draft).await;
            assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        }

        assert!(ledger.calls().is_empty());
        assert_eq!(current_level(&controller), Some(NotificationLevel::Warn));
        assert_eq!(controller.notifications().len(), 2);
    }

    #[tokio::test]
    async fn test_add_expense_failure_skips_refresh() {
        let ledger = Arc::new(MockLedger::new());
        ledger.set_offline(true);
        let mut controller = controller(ledger.clone());

        let draft = ExpenseDraft::new("10", TransactionKind::Debit, "");
        assert!(controller.add_expense(&draft).await.is_err());

        assert_eq!(ledger.calls().len(), 1);
        assert_eq!(current_level(&controller), Some(NotificationLevel::Error));
    }

    #[tokio::test]
    async fn test_load_transactions_requires_both_dates() {
        let ledger = Arc::new(MockLedger::new());
        let mut controller = controller(ledger.clone());

        let result = controller
            .load_transactions(&DateRangeDraft::new("", "2024-01-31"))
            .await;

        assert!(matches!(result, Err(LedgerError::MissingDateRange)));
        assert!(ledger.calls().is_empty());
        assert_eq!(current_level(&controller), Some(NotificationLevel::Warn));
        assert!(controller.state().range().is_none());
    }

    #[tokio::test]
    async fn test_load_transactions_keeps_server_order() {
        let ledger = Arc::new(MockLedger::with_rows(vec![
            row(3, 20, TransactionKind::Debit, 5),
            row(1, 2, TransactionKind::Credit, 50),
            row(2, 10, TransactionKind::Debit, 7),
        ]));
        let mut controller = controller(ledger.clone());

        controller.load_transactions(&january()).await.unwrap();

        let ids: Vec<_> = controller
            .state()
            .transactions()
            .iter()
            .map(|t| t.id().as_i64())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(ledger.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_list() {
        let ledger = Arc::new(MockLedger::with_rows(vec![row(
            1,
            2,
            TransactionKind::Credit,
            50,
        )]));
        let mut controller = controller(ledger.clone());
        controller.load_transactions(&january()).await.unwrap();

        ledger.set_offline(true);
        assert!(controller.load_transactions(&january()).await.is_err());

        assert_eq!(controller.state().transactions().len(), 1);
        assert_eq!(current_level(&controller), Some(NotificationLevel::Error));
    }

    #[tokio::test]
    async fn test_delete_success_refreshes_three_views() {
        let ledger = Arc::new(MockLedger::with_rows(vec![
            row(1, 2, TransactionKind::Credit, 50),
            row(2, 3, TransactionKind::Debit, 20),
        ]));
        let mut controller = controller(ledger.clone());
        controller.load_transactions(&january()).await.unwrap();
        ledger.take_calls();

        controller
            .delete_transaction(TransactionId::new(2))
            .await
            .unwrap();

        let calls = ledger.take_calls();
        assert_eq!(calls[0], LedgerCall::Delete(TransactionId::new(2)));
        assert!(matches!(calls[1], LedgerCall::Transactions(_)));
        assert_eq!(calls[2..], [LedgerCall::Balance, LedgerCall::Summary]);
        assert_eq!(calls.len(), 4);

        assert_eq!(controller.state().transactions().len(), 1);
        assert_eq!(controller.state().balance(), Decimal::from(50));
        assert_eq!(current_level(&controller), Some(NotificationLevel::Info));
    }

    #[tokio::test]
    async fn test_delete_failure_refreshes_nothing() {
        let ledger = Arc::new(MockLedger::with_rows(vec![row(
            1,
            2,
            TransactionKind::Credit,
            50,
        )]));
        let mut controller = controller(ledger.clone());
        controller.load_transactions(&january()).await.unwrap();
        let before = controller.state().clone();
        ledger.take_calls();
        ledger.set_offline(true);

        let result = controller.delete_transaction(TransactionId::new(1)).await;

        assert!(result.is_err());
        assert_eq!(ledger.take_calls(), vec![LedgerCall::Delete(TransactionId::new(1))]);
        assert_eq!(*controller.state(), before);
        let prompt = controller.notifications().current_notification().unwrap();
        assert_eq!(prompt.level, NotificationLevel::Error);
        assert!(prompt.message.starts_with("Failed to delete transaction"));
    }

    #[tokio::test]
    async fn test_delete_without_range_refreshes_overview_only() {
        let ledger = Arc::new(MockLedger::with_rows(vec![row(
            1,
            2,
            TransactionKind::Credit,
            50,
        )]));
        let mut controller = controller(ledger.clone());

        controller
            .delete_transaction(TransactionId::new(1))
            .await
            .unwrap();

        assert_eq!(
            ledger.take_calls(),
            vec![
                LedgerCall::Delete(TransactionId::new(1)),
                LedgerCall::Balance,
                LedgerCall::Summary
            ]
        );
    }

    #[tokio::test]
    async fn test_overview_failure_is_reported_not_silent() {
        let ledger = Arc::new(MockLedger::new());
        ledger.set_offline(true);
        let mut controller = controller(ledger.clone());

        controller.refresh_overview().await;

        assert_eq!(controller.notifications().len(), 2);
        assert!(controller.notifications().is_blocking());
        assert_eq!(controller.state().balance(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_export_hands_current_list_to_exporter() {
        let ledger = Arc::new(MockLedger::with_rows(vec![
            row(1, 2, TransactionKind::Credit, 50),
            row(2, 3, TransactionKind::Debit, 20),
        ]));
        let mut exporter = MockExportPort::new();
        exporter
            .expect_export()
            .times(2)
            .returning(|rows, path| {
                assert_eq!(rows.len(), 2);
                Ok(path.to_path_buf())
            });
        let mut controller = controller_with(ledger.clone(), exporter);
        controller.load_transactions(&january()).await.unwrap();
        ledger.take_calls();

        let first = controller.export_current_list().unwrap();
        let second = controller.export_current_list().unwrap();

        assert_eq!(first, PathBuf::from("transactions.xlsx"));
        assert_eq!(first, second);
        assert!(ledger.calls().is_empty());
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let mut exporter = MockExportPort::new();
        exporter
            .expect_export()
            .returning(|_, _| Err(ExportError::Workbook("disk full".to_string())));
        let mut controller = controller_with(Arc::new(MockLedger::new()), exporter);

        assert!(controller.export_current_list().is_err());
        assert_eq!(current_level(&controller), Some(NotificationLevel::Error));
    }

    #[tokio::test]
    async fn test_add_list_delete_scenario() {
        let ledger = Arc::new(MockLedger::new());
        let mut controller = controller(ledger.clone());

        controller
            .add_expense(&ExpenseDraft::new("100", TransactionKind::Credit, "salary"))
            .await
            .unwrap();
        assert_eq!(controller.state().balance(), Decimal::from(100));

        controller.load_transactions(&january()).await.unwrap();
        let added = controller
            .state()
            .transactions()
            .iter()
            .find(|t| t.description() == Some("salary"))
            .map(Transaction::id)
            .expect("added transaction listed");

        controller.delete_transaction(added).await.unwrap();
        controller.load_transactions(&january()).await.unwrap();

        assert!(controller.state().find(added).is_none());
        assert_eq!(controller.state().balance(), Decimal::ZERO);
        assert_eq!(controller.state().summary().income, Decimal::ZERO);
    }
}
