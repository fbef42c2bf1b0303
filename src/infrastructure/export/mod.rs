//! Spreadsheet export adapter.

mod table;
mod xlsx;

pub use table::{ExportCell, ExportTable};
pub use xlsx::XlsxExporter;
