mod export_port;
mod ledger_port;

pub use export_port::ExportPort;
pub use ledger_port::{LedgerPort, NewExpense};
