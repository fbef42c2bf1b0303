//! Data transfer objects for the application layer.

mod expense_dto;

pub use expense_dto::{DateRangeDraft, ExpenseDraft};
