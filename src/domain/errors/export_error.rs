//! Export error types.

use thiserror::Error;

/// Spreadsheet export error variants.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to prepare export location: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build workbook: {0}")]
    Workbook(String),
}
