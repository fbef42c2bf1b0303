//! Domain entity definitions.

mod date_range;
mod summary;
mod transaction;

pub use date_range::{DATE_FORMAT, DateRange};
pub use summary::MonthlySummary;
pub use transaction::{Transaction, TransactionId, TransactionKind};
