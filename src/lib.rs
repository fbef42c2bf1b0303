//! expense-tui - A terminal client for a personal expense tracker.
//!
//! This crate shows the running balance and this month's summary, records
//! debits and credits, lists transactions for a date range and exports the
//! displayed list to an `.xlsx` workbook.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the controller, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "expense-tui";
