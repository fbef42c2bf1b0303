use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "expense-tui",
    version,
    about = "A terminal client for a personal expense tracker",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Backend base URL.
    #[arg(long, value_name = "URL", env = "EXPENSE_TUI_BASE_URL")]
    pub base_url: Option<String>,

    /// Backend request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Directory the spreadsheet export is written to.
    #[arg(long, value_name = "DIR", env = "EXPENSE_TUI_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
}
