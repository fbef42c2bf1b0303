//! Table of the loaded transactions.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::domain::entities::{Transaction, TransactionKind};
use crate::presentation::ui::utils::{MISSING_DESCRIPTION, format_amount, format_timestamp};

const HEADER: [&str; 4] = ["Date", "Type", "Amount", "Description"];

pub struct TransactionTable<'a> {
    transactions: &'a [Transaction],
    currency_symbol: &'a str,
    date_format: &'a str,
    title: String,
    focused: bool,
}

impl<'a> TransactionTable<'a> {
    #[must_use]
    pub fn new(
        transactions: &'a [Transaction],
        currency_symbol: &'a str,
        date_format: &'a str,
    ) -> Self {
        Self {
            transactions,
            currency_symbol,
            date_format,
            title: " Transactions ".to_string(),
            focused: false,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn row(&self, transaction: &Transaction) -> Row<'a> {
        let kind_style = match transaction.kind() {
            TransactionKind::Credit => Style::default().fg(Color::Green),
            TransactionKind::Debit => Style::default().fg(Color::Red),
        };

        Row::new(vec![
            Cell::from(format_timestamp(transaction.date(), self.date_format)),
            Cell::from(transaction.kind().as_str()).style(kind_style),
            Cell::from(
                Line::from(format_amount(transaction.amount(), self.currency_symbol))
                    .right_aligned(),
            ),
            Cell::from(
                transaction
                    .description()
                    .unwrap_or(MISSING_DESCRIPTION)
                    .to_string(),
            ),
        ])
    }
}

impl StatefulWidget for TransactionTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title.clone());

        if self.transactions.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Line::from("No transactions loaded")
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .render(inner, buf);
            return;
        }

        let header = Row::new(HEADER)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);
        let rows: Vec<Row> = self.transactions.iter().map(|t| self.row(t)).collect();
        let widths = [
            Constraint::Length(17),
            Constraint::Length(7),
            Constraint::Length(14),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, state);
    }
}
