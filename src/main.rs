use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use expense_tui::application::LedgerController;
use expense_tui::infrastructure::{
    AppConfig, CliArgs, LedgerHttpClient, StorageManager, XlsxExporter,
};
use expense_tui::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    // The terminal belongs to the TUI, so without a file nothing is logged.
    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let config = storage.load_with_args(args)?;

    init_logging(&config)?;

    info!(
        version = expense_tui::VERSION,
        base_url = %config.backend.base_url,
        "Starting expense-tui"
    );

    let ledger = Arc::new(LedgerHttpClient::new(
        config.backend.base_url.clone(),
        config.backend.timeout(),
    )?);
    let exporter = Arc::new(XlsxExporter::new(config.export.sheet_name.clone()));
    let export_path = config.export.effective_path();
    info!(path = %export_path.display(), "Export target");

    let controller = LedgerController::new(
        ledger,
        exporter,
        export_path,
        config.ui.notification_duration(),
    );

    Ok(App::new(controller, storage, config.ui))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
