//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Spreadsheet export.
pub mod export;
/// Backend HTTP client.
pub mod http;

pub use config::{AppConfig, CliArgs, LogLevel, StateConfig, StorageManager};
pub use export::XlsxExporter;
pub use http::LedgerHttpClient;
