//! Application configuration.

use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

pub(super) const APP_NAME: &str = "expense-tui";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "expense-tracker";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Backend connection.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Spreadsheet export.
    #[serde(default)]
    pub export: ExportConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL the endpoint paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// A zero reqwest timeout fails every request.
const MIN_TIMEOUT_SECS: u64 = 1;

impl BackendConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.effective_timeout_secs())
    }

    const fn effective_timeout_secs(&self) -> u64 {
        if self.timeout_secs < MIN_TIMEOUT_SECS {
            MIN_TIMEOUT_SECS
        } else {
            self.timeout_secs
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Target directory. Defaults to the user's download directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// File name of the workbook.
    #[serde(default = "default_export_file_name")]
    pub file_name: String,

    /// Name of the single worksheet.
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

impl ExportConfig {
    /// Full path the workbook is written to.
    #[must_use]
    pub fn effective_path(&self) -> PathBuf {
        let directory = self
            .directory
            .clone()
            .or_else(default_export_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        directory.join(&self.file_name)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_export_file_name(),
            sheet_name: default_sheet_name(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Symbol printed before amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,

    /// Timestamp format string (chrono format) for the transaction table.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl UiConfig {
    #[must_use]
    pub const fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_duration)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            notification_duration: default_notification_duration(),
            date_format: default_date_format(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_export_file_name() -> String {
    "transactions.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "Transactions".to_string()
}

fn default_currency_symbol() -> String {
    "₨".to_string()
}

fn default_notification_duration() -> u64 {
    5
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_export_dir() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.download_dir().map(std::path::Path::to_path_buf))
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = args.base_url {
            self.backend.base_url = base_url;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.backend.timeout_secs = timeout_secs;
        }
        self.backend.timeout_secs = self.backend.effective_timeout_secs();
        if let Some(export_dir) = args.export_dir {
            self.export.directory = Some(export_dir);
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("expense-tui.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            backend: BackendConfig::default(),
            export: ExportConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [backend]
            base_url = "http://10.0.0.2:8080"

            [export]
            directory = "/tmp/reports"
            file_name = "january.xlsx"

            [ui]
            currency_symbol = "$"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.backend.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.export.sheet_name, "Transactions");
        assert_eq!(
            config.export.effective_path(),
            PathBuf::from("/tmp/reports/january.xlsx")
        );
        assert_eq!(config.ui.currency_symbol, "$");
        assert_eq!(config.ui.notification_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.backend.base_url, "http://localhost:5000");
        assert_eq!(config.export.file_name, "transactions.xlsx");
        assert!(config.export.effective_path().ends_with("transactions.xlsx"));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            [backend]
            base_url = "http://from-file:5000"
            timeout_secs = 10
            "#,
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "expense-tui",
            "--base-url",
            "http://from-cli:5000",
            "--export-dir",
            "/srv/out",
            "--log-level",
            "warn",
        ]);
        config.merge_with_args(args);

        assert_eq!(config.backend.base_url, "http://from-cli:5000");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.export.directory, Some(PathBuf::from("/srv/out")));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_zero_timeout_is_raised_to_one_second() {
        let mut from_file: AppConfig = toml::from_str(
            r#"
            [backend]
            timeout_secs = 0
            "#,
        )
        .unwrap();
        assert_eq!(from_file.backend.timeout(), Duration::from_secs(1));

        from_file.merge_with_args(CliArgs::parse_from(["expense-tui"]));
        assert_eq!(from_file.backend.timeout_secs, 1);

        let mut from_cli = AppConfig::default();
        from_cli.merge_with_args(CliArgs::parse_from(["expense-tui", "--timeout-secs", "0"]));
        assert_eq!(from_cli.backend.timeout_secs, 1);
    }
}
