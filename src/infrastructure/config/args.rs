use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mistri",
    version,
    about = "A terminal client for booking local gig workers",
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

    /// Preselected language code (en, hi, mr, ...).
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,

    /// Base latency for simulated operations, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Enable splash and transition animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,
}
