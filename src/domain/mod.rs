//! Domain layer with core ledger entities, view state and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// User-visible prompts.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// View state container.
pub mod state;

pub use entities::{DateRange, MonthlySummary, Transaction, TransactionId, TransactionKind};
pub use errors::{ExportError, LedgerError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{ExportPort, LedgerPort, NewExpense};
pub use state::{LedgerState, StateUpdate};
