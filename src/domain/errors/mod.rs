//! Domain error types.

mod export_error;
mod ledger_error;

pub use export_error::ExportError;
pub use ledger_error::LedgerError;
