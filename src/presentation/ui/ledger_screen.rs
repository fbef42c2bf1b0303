//! The single ledger screen: add form, overview, range inputs and table.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, TableState, Widget},
};

use super::utils::format_amount;
use crate::application::dto::{DateRangeDraft, ExpenseDraft};
use crate::domain::entities::{Transaction, TransactionId, TransactionKind};
use crate::domain::state::LedgerState;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{KeyHint, StatusBar, TextInput, TransactionTable};
use crate::{NAME, VERSION};

const FORM_HEIGHT: u16 = 9;
const INPUT_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFocus {
    Amount,
    Kind,
    Description,
    StartDate,
    EndDate,
    Transactions,
}

impl LedgerFocus {
    const fn next(self) -> Self {
        match self {
            Self::Amount => Self::Kind,
            Self::Kind => Self::Description,
            Self::Description => Self::StartDate,
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::Transactions,
            Self::Transactions => Self::Amount,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Amount => Self::Transactions,
            Self::Kind => Self::Amount,
            Self::Description => Self::Kind,
            Self::StartDate => Self::Description,
            Self::EndDate => Self::StartDate,
            Self::Transactions => Self::EndDate,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Amount => "AMOUNT",
            Self::Kind => "TYPE",
            Self::Description => "DESCRIPTION",
            Self::StartDate => "START",
            Self::EndDate => "END",
            Self::Transactions => "TABLE",
        }
    }

    const fn hints(self) -> &'static [KeyHint] {
        match self {
            Self::Amount | Self::Description => &[
                ("Enter", "add"),
                ("Tab", "next"),
                ("C-e", "export"),
                ("Esc", "quit"),
            ],
            Self::Kind => &[
                ("Space", "toggle"),
                ("Enter", "add"),
                ("Tab", "next"),
                ("q", "quit"),
            ],
            Self::StartDate | Self::EndDate => &[
                ("Enter", "load"),
                ("Tab", "next"),
                ("C-e", "export"),
                ("Esc", "quit"),
            ],
            Self::Transactions => &[
                ("↑↓", "select"),
                ("d", "delete"),
                ("x", "export"),
                ("Tab", "next"),
                ("q", "quit"),
            ],
        }
    }
}

/// What the app should do after a key reached the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerKeyResult {
    Quit,
    SubmitExpense(ExpenseDraft),
    LoadTransactions(DateRangeDraft),
    DeleteTransaction(TransactionId),
    Export,
    Consumed,
    Ignored,
}

pub struct LedgerScreenState {
    focus: LedgerFocus,
    amount: TextInput,
    kind: TransactionKind,
    description: TextInput,
    start_date: TextInput,
    end_date: TextInput,
    table: TableState,
}

impl LedgerScreenState {
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            focus: LedgerFocus::Amount,
            amount: TextInput::new(" Amount ").placeholder("0.00"),
            kind: TransactionKind::default(),
            description: TextInput::new(" Description ").placeholder("optional"),
            start_date: TextInput::new(" Start date ").placeholder("YYYY-MM-DD"),
            end_date: TextInput::new(" End date ").placeholder("YYYY-MM-DD"),
            table: TableState::default(),
        };
        state.set_focus(LedgerFocus::Amount);
        state
    }

    /// Pre-fills the range inputs, e.g. with the range used last session.
    pub fn set_range_inputs(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.start_date.set_value(start);
        self.end_date.set_value(end);
    }

    #[must_use]
    pub const fn focus(&self) -> LedgerFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    pub fn set_focus(&mut self, focus: LedgerFocus) {
        self.focus = focus;
        self.amount.set_focused(focus == LedgerFocus::Amount);
        self.description
            .set_focused(focus == LedgerFocus::Description);
        self.start_date.set_focused(focus == LedgerFocus::StartDate);
        self.end_date.set_focused(focus == LedgerFocus::EndDate);
    }

    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggled();
    }

    #[must_use]
    pub fn expense_draft(&self) -> ExpenseDraft {
        ExpenseDraft::new(self.amount.value(), self.kind, self.description.value())
    }

    #[must_use]
    pub fn range_draft(&self) -> DateRangeDraft {
        DateRangeDraft::new(self.start_date.value(), self.end_date.value())
    }

    /// Empties amount and description after a successful add.
    pub fn clear_expense_inputs(&mut self) {
        self.amount.clear();
        self.description.clear();
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.table.selected()
    }

    /// Keeps the selection inside a list of `len` rows.
    pub fn sync_selection(&mut self, len: usize) {
        let selected = match (self.table.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.table.select(selected);
    }

    pub fn handle_key(&mut self, key: KeyEvent, rows: &[Transaction]) -> LedgerKeyResult {
        if EventHandler::is_export_event(&key) {
            return LedgerKeyResult::Export;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return LedgerKeyResult::Consumed;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return LedgerKeyResult::Consumed;
            }
            _ => {}
        }

        match self.focus {
            LedgerFocus::Amount | LedgerFocus::Description => {
                if EventHandler::is_submit_event(&key) {
                    return LedgerKeyResult::SubmitExpense(self.expense_draft());
                }
                let input = if self.focus == LedgerFocus::Amount {
                    &mut self.amount
                } else {
                    &mut self.description
                };
                edited(input.handle_key(key))
            }
            LedgerFocus::StartDate | LedgerFocus::EndDate => {
                if EventHandler::is_submit_event(&key) {
                    return LedgerKeyResult::LoadTransactions(self.range_draft());
                }
                let input = if self.focus == LedgerFocus::StartDate {
                    &mut self.start_date
                } else {
                    &mut self.end_date
                };
                edited(input.handle_key(key))
            }
            LedgerFocus::Kind => self.handle_kind_key(key),
            LedgerFocus::Transactions => self.handle_table_key(key, rows),
        }
    }

    fn handle_kind_key(&mut self, key: KeyEvent) -> LedgerKeyResult {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                self.toggle_kind();
                LedgerKeyResult::Consumed
            }
            KeyCode::Enter => LedgerKeyResult::SubmitExpense(self.expense_draft()),
            KeyCode::Char('q') => LedgerKeyResult::Quit,
            _ => LedgerKeyResult::Ignored,
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent, rows: &[Transaction]) -> LedgerKeyResult {
        self.sync_selection(rows.len());

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.table.select_previous();
                self.sync_selection(rows.len());
                LedgerKeyResult::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.table.select_next();
                self.sync_selection(rows.len());
                LedgerKeyResult::Consumed
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.table.select_first();
                self.sync_selection(rows.len());
                LedgerKeyResult::Consumed
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.table.select_last();
                self.sync_selection(rows.len());
                LedgerKeyResult::Consumed
            }
            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_index()
                .and_then(|i| rows.get(i))
                .map_or(LedgerKeyResult::Consumed, |row| {
                    LedgerKeyResult::DeleteTransaction(row.id())
                }),
            KeyCode::Char('x') => LedgerKeyResult::Export,
            KeyCode::Char('q') => LedgerKeyResult::Quit,
            _ => LedgerKeyResult::Ignored,
        }
    }
}

impl Default for LedgerScreenState {
    fn default() -> Self {
        Self::new()
    }
}

const fn edited(handled: bool) -> LedgerKeyResult {
    if handled {
        LedgerKeyResult::Consumed
    } else {
        LedgerKeyResult::Ignored
    }
}

/// Renders [`LedgerScreenState`] against the current [`LedgerState`].
pub struct LedgerScreen<'a> {
    ledger: &'a LedgerState,
    currency_symbol: &'a str,
    date_format: &'a str,
}

impl<'a> LedgerScreen<'a> {
    #[must_use]
    pub const fn new(
        ledger: &'a LedgerState,
        currency_symbol: &'a str,
        date_format: &'a str,
    ) -> Self {
        Self {
            ledger,
            currency_symbol,
            date_format,
        }
    }

    fn money(&self, amount: rust_decimal::Decimal) -> String {
        format_amount(amount, self.currency_symbol)
    }
}

impl StatefulWidget for LedgerScreen<'_> {
    type State = LedgerScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, top_area, range_area, table_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(header_area, buf);

        let [form_area, overview_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(top_area);
        render_form(state, form_area, buf);
        self.render_overview(overview_area, buf);

        render_range_inputs(state, range_area, buf);
        self.render_table(state, table_area, buf);
        self.render_footer(state, footer_area, buf);
    }
}

impl LedgerScreen<'_> {
    fn render_overview(&self, area: Rect, buf: &mut Buffer) {
        let summary = self.ledger.summary();
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::styled("Current balance  ", label),
                Span::styled(self.money(self.ledger.balance()), value),
            ]),
            Line::default(),
            Line::from(Span::styled("This month", Style::default().fg(Color::Cyan))),
            Line::from(vec![
                Span::styled("Income           ", label),
                Span::styled(self.money(summary.income), value.fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::styled("Expenditure      ", label),
                Span::styled(self.money(summary.expenditure), value.fg(Color::Red)),
            ]),
            Line::from(vec![
                Span::styled("Net              ", label),
                Span::styled(self.money(summary.net()), value),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray))
            .title(" Overview ");
        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_table(&self, state: &mut LedgerScreenState, area: Rect, buf: &mut Buffer) {
        let rows = self.ledger.transactions();
        state.sync_selection(rows.len());

        let title = self.ledger.range().map_or_else(
            || " Transactions ".to_string(),
            |range| format!(" Transactions {range} "),
        );

        TransactionTable::new(rows, self.currency_symbol, self.date_format)
            .title(title)
            .focused(state.focus == LedgerFocus::Transactions)
            .render(area, buf, &mut state.table);
    }

    fn render_footer(&self, state: &LedgerScreenState, area: Rect, buf: &mut Buffer) {
        let count = self.ledger.transactions().len();
        let info = match count {
            0 => None,
            1 => Some("1 row".to_string()),
            n => Some(format!("{n} rows")),
        };

        StatusBar::new(state.focus.display_name(), state.focus.hints())
            .right_info(info.as_deref())
            .render(area, buf);
    }
}

fn render_header(area: Rect, buf: &mut Buffer) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {NAME} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{VERSION}"), Style::default().fg(Color::DarkGray)),
    ]);
    Paragraph::new(line).render(area, buf);
}

fn render_form(state: &LedgerScreenState, area: Rect, buf: &mut Buffer) {
    let [amount_area, kind_area, description_area] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
    ])
    .areas(area);

    state.amount.render(amount_area, buf);
    render_kind_toggle(state, kind_area, buf);
    state.description.render(description_area, buf);
}

fn render_kind_toggle(state: &LedgerScreenState, area: Rect, buf: &mut Buffer) {
    let focused = state.focus == LedgerFocus::Kind;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let option = |kind: TransactionKind| {
        let selected = state.kind == kind;
        let marker = if selected { "(•) " } else { "( ) " };
        let style = if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!("{marker}{kind}"), style)
    };

    let line = Line::from(vec![
        option(TransactionKind::Debit),
        Span::raw("   "),
        option(TransactionKind::Credit),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Type ");
    Paragraph::new(line).block(block).render(area, buf);
}

fn render_range_inputs(state: &LedgerScreenState, area: Rect, buf: &mut Buffer) {
    let [start_area, end_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    state.start_date.render(start_area, buf);
    state.end_date.render(end_area, buf);
}
