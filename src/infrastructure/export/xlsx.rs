//! Spreadsheet writer.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::debug;

use super::table::{ExportCell, ExportTable};
use crate::domain::entities::Transaction;
use crate::domain::errors::ExportError;
use crate::domain::ports::ExportPort;

const DATE_COLUMN_WIDTH: f64 = 20.0;
const DESCRIPTION_COLUMN_WIDTH: f64 = 40.0;

/// Writes transactions to a single-sheet `.xlsx` workbook.
pub struct XlsxExporter {
    sheet_name: String,
}

impl XlsxExporter {
    #[must_use]
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    fn build_workbook(&self, table: &ExportTable) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let amount_format = Format::new().set_num_format("0.00");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;
        worksheet.set_column_width(1, DATE_COLUMN_WIDTH)?;
        worksheet.set_column_width(4, DESCRIPTION_COLUMN_WIDTH)?;

        for (col, name) in (0u16..).zip(table.header()) {
            worksheet.write_string_with_format(0, col, *name, &header_format)?;
        }

        for (row, cells) in (1u32..).zip(table.rows()) {
            for (col, cell) in (0u16..).zip(cells) {
                match cell {
                    // Ids stay well inside f64's exact integer range.
                    #[allow(clippy::cast_precision_loss)]
                    ExportCell::Integer(value) => {
                        worksheet.write_number(row, col, *value as f64)?;
                    }
                    ExportCell::Amount(value) => {
                        worksheet.write_number_with_format(row, col, *value, &amount_format)?;
                    }
                    ExportCell::Text(value) => {
                        worksheet.write_string(row, col, value)?;
                    }
                }
            }
        }

        Ok(workbook)
    }
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self::new("Transactions")
    }
}

impl ExportPort for XlsxExporter {
    fn export(
        &self,
        transactions: &[Transaction],
        destination: &Path,
    ) -> Result<PathBuf, ExportError> {
        if let Some(parent) = destination.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let table = ExportTable::from_transactions(transactions);
        let mut workbook = self
            .build_workbook(&table)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;
        workbook
            .save(destination)
            .map_err(|e| ExportError::Workbook(e.to_string()))?;

        debug!(
            rows = table.sheet_rows(),
            sheet = %self.sheet_name,
            path = %destination.display(),
            "Workbook written"
        );

        Ok(destination.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TransactionKind;
    use calamine::{Data, Reader, Xlsx, open_workbook};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    fn transaction(id: i64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Transaction::new(id, date, TransactionKind::Debit, Decimal::new(999, 2), None)
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("transactions.xlsx");

        let written = XlsxExporter::default()
            .export(&[transaction(1), transaction(2)], &path)
            .unwrap();

        assert_eq!(written, path);
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"), "xlsx is a zip container");
    }

    #[test]
    fn test_written_sheet_holds_header_and_one_row_per_transaction() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("transactions.xlsx");
        let date = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let rows = [
            transaction(3),
            Transaction::new(
                7_i64,
                date,
                TransactionKind::Credit,
                Decimal::new(150_050, 2),
                Some("salary".to_string()),
            ),
            transaction(1),
        ];

        XlsxExporter::default().export(&rows, &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Transactions".to_string()]);

        let range = workbook.worksheet_range("Transactions").unwrap();
        assert_eq!(range.height(), rows.len() + 1);
        assert_eq!(range.width(), 5);

        let header: Vec<_> = (0..5).map(|col| range.get_value((0, col)).cloned()).collect();
        assert_eq!(
            header,
            ["id", "date", "type", "amount", "description"]
                .map(|name| Some(Data::String(name.to_string())))
        );

        assert_eq!(range.get_value((1, 0)), Some(&Data::Float(3.0)));
        assert_eq!(range.get_value((2, 0)), Some(&Data::Float(7.0)));
        assert_eq!(
            range.get_value((2, 1)),
            Some(&Data::String("2024-03-05 12:30:00".to_string()))
        );
        assert_eq!(
            range.get_value((2, 2)),
            Some(&Data::String("credit".to_string()))
        );
        assert_eq!(range.get_value((2, 3)), Some(&Data::Float(1500.5)));
        assert_eq!(
            range.get_value((2, 4)),
            Some(&Data::String("salary".to_string()))
        );
        assert_eq!(range.get_value((3, 0)), Some(&Data::Float(1.0)));
    }

    #[test]
    fn test_export_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        XlsxExporter::default().export(&[], &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Transactions").unwrap();
        assert_eq!(range.height(), 1);
    }

    #[test]
    fn test_invalid_sheet_name_is_workbook_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");

        let err = XlsxExporter::new("bad/name")
            .export(&[transaction(1)], &path)
            .unwrap_err();

        assert!(matches!(err, ExportError::Workbook(_)));
        assert!(!path.exists());
    }
}
