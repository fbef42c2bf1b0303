//! Row layout of the exported sheet.

use rust_decimal::prelude::ToPrimitive;

use crate::domain::entities::Transaction;
use crate::domain::serde_utils::timestamp;

/// A single cell of the exported sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportCell {
    Integer(i64),
    /// Money, written with two decimals.
    Amount(f64),
    Text(String),
}

/// Header plus one row per transaction, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    header: Vec<&'static str>,
    rows: Vec<Vec<ExportCell>>,
}

impl ExportTable {
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let rows = transactions
            .iter()
            .map(|transaction| {
                vec![
                    ExportCell::Integer(transaction.id().as_i64()),
                    ExportCell::Text(transaction.date().format(timestamp::FORMAT).to_string()),
                    ExportCell::Text(transaction.kind().as_str().to_string()),
                    ExportCell::Amount(transaction.amount().to_f64().unwrap_or_default()),
                    ExportCell::Text(transaction.description().unwrap_or_default().to_string()),
                ]
            })
            .collect();

        Self {
            header: Transaction::FIELD_NAMES.to_vec(),
            rows,
        }
    }

    #[must_use]
    pub fn header(&self) -> &[&'static str] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<ExportCell>] {
        &self.rows
    }

    /// Number of sheet rows including the header.
    #[must_use]
    pub fn sheet_rows(&self) -> usize {
        self.rows.len() + 1
    }
}
