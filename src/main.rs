use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mistri::infrastructure::{
    AppConfig, CliArgs, SeedMarketData, SimulatedEnrollmentService, SimulatedOtpGateway,
    StorageManager, StubMediaPicker,
};
use mistri::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

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

fn load_config() -> AppConfig {
    let args = CliArgs::parse();

    let mut config = StorageManager::new()
        .and_then(|storage| storage.load_config(args.config.as_deref()))
        .unwrap_or_default();

    config.merge_with_args(args);
    config
}

fn create_app() -> Result<App> {
    let config = load_config();

    init_logging(&config)?;

    info!(version = mistri::VERSION, "Starting Mistri");

    let latency = Duration::from_millis(config.simulation.latency_ms);

    let market_data = Arc::new(SeedMarketData::new()?);
    let otp_gateway = Arc::new(SimulatedOtpGateway::new(latency));
    let enrollment = Arc::new(SimulatedEnrollmentService::new(latency));
    let media_picker = Arc::new(StubMediaPicker::new());

    Ok(App::new(
        config,
        market_data,
        otp_gateway,
        enrollment,
        media_picker,
    ))
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
