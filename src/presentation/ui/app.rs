//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures_util::StreamExt;
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Frame, Terminal};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::{DateRangeDraft, ExpenseDraft};
use crate::application::services::LedgerController;
use crate::domain::entities::TransactionId;
use crate::infrastructure::config::{StateConfig, StorageManager, UiConfig};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{
    LedgerKeyResult, LedgerScreen, LedgerScreenState, NotificationPopup,
};

const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    controller: LedgerController,
    screen: LedgerScreenState,
    storage: StorageManager,
    ui: UiConfig,
}

impl App {
    #[must_use]
    pub fn new(controller: LedgerController, storage: StorageManager, ui: UiConfig) -> Self {
        let mut screen = LedgerScreenState::new();

        match storage.load_state() {
            Ok(StateConfig {
                last_start_date: Some(start),
                last_end_date: Some(end),
            }) => {
                debug!(%start, %end, "Restoring last date range");
                screen.set_range_inputs(start, end);
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to load session state"),
        }

        Self {
            state: AppState::Running,
            controller,
            screen,
            storage,
            ui,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.show_overview(terminal).await?;

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    /// Draws the empty screen, then fetches balance and summary.
    async fn show_overview<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), B::Error> {
        terminal.draw(|frame| self.render(frame))?;
        self.controller.refresh_overview().await;
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut notification_interval = interval(NOTIFICATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event).await == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Terminal event stream error");
                        }
                        None => {
                            self.state = AppState::Exiting;
                        }
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = notification_interval.tick() => {
                    if self.controller.notifications().has_notifications() {
                        self.controller.notifications_mut().tick();
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key).await,
            _ => EventResult::Continue,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let screen = LedgerScreen::new(
            self.controller.state(),
            &self.ui.currency_symbol,
            &self.ui.date_format,
        );
        frame.render_stateful_widget(screen, area, &mut self.screen);

        if let Some(notification) = self.controller.notifications().current_notification() {
            frame.render_widget(NotificationPopup::new(notification), area);
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        let force_quit =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if force_quit {
            return EventResult::Exit;
        }

        // A warning or error stays up until acknowledged; the key that
        // dismisses it does nothing else.
        if self.controller.notifications().is_blocking() {
            self.controller.notifications_mut().dismiss();
            return EventResult::Consumed;
        }

        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        let result = self
            .screen
            .handle_key(key, self.controller.state().transactions());

        match result {
            LedgerKeyResult::Quit => return EventResult::Exit,
            LedgerKeyResult::SubmitExpense(draft) => self.submit_expense(&draft).await,
            LedgerKeyResult::LoadTransactions(draft) => self.load_transactions(&draft).await,
            LedgerKeyResult::DeleteTransaction(id) => self.delete_transaction(id).await,
            LedgerKeyResult::Export => {
                let _ = self.controller.export_current_list();
            }
            LedgerKeyResult::Consumed => return EventResult::Consumed,
            LedgerKeyResult::Ignored => return EventResult::Continue,
        }

        EventResult::Consumed
    }

    async fn submit_expense(&mut self, draft: &ExpenseDraft) {
        if self.controller.add_expense(draft).await.is_ok() {
            self.screen.clear_expense_inputs();
        }
    }

    async fn load_transactions(&mut self, draft: &DateRangeDraft) {
        if self.controller.load_transactions(draft).await.is_err() {
            return;
        }

        if let Some(range) = self.controller.state().range() {
            self.screen
                .sync_selection(self.controller.state().transactions().len());
            if let Err(e) = self.storage.save_state(&StateConfig::with_range(range)) {
                warn!(error = %e, "Failed to persist date range");
            }
        }
    }

    async fn delete_transaction(&mut self, id: TransactionId) {
        let _ = self.controller.delete_transaction(id).await;
        self.screen
            .sync_selection(self.controller.state().transactions().len());
    }
}
