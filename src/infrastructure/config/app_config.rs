//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::Language;

const APP_NAME: &str = "mistri";
const APP_QUALIFIER: &str = "in";
const APP_ORGANIZATION: &str = "mistri-app";

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

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
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

/// Application configuration, `config.toml` merged with CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

    /// Preselected language on the language grid, if any.
    #[serde(default)]
    pub language: Option<Language>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Simulated-network configuration.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable splash and transition animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
        }
    }
}

/// Knobs for the simulated network edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Base latency for simulated operations, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// The four-digit code a customer reads out to start a job.
    #[serde(default = "default_start_code")]
    pub start_code: String,

    /// Seconds until the tracked worker "reaches" the customer.
    #[serde(default = "default_travel_secs")]
    pub travel_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            start_code: default_start_code(),
            travel_secs: default_travel_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_start_code() -> String {
    "4812".to_string()
}

fn default_travel_secs() -> u64 {
    10
}

use super::args::CliArgs;

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
        if let Some(language) = args.language.as_deref().and_then(Language::from_code) {
            self.language = Some(language);
        }
        if let Some(latency_ms) = args.latency_ms {
            self.simulation.latency_ms = latency_ms;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("mistri.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
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
            language: None,
            ui: UiConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"
            language = "hi"

            [ui]
            enable_animations = false

            [simulation]
            latency_ms = 250
            start_code = "9999"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.language, Some(Language::Hi));
        assert!(!config.ui.enable_animations);
        assert_eq!(config.simulation.latency_ms, 250);
        assert_eq!(config.simulation.start_code, "9999");
        assert_eq!(config.simulation.travel_secs, 10); // default
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.language, None);
        assert!(config.ui.enable_animations);
        assert_eq!(config.simulation.latency_ms, 1000);
        assert_eq!(config.simulation.start_code, "4812");
    }

    #[test]
    fn test_cli_language_overrides_config() {
        let mut config = AppConfig {
            language: Some(Language::Hi),
            ..AppConfig::default()
        };
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: None,
            language: Some("ta".to_string()),
            latency_ms: Some(100),
            enable_animations: None,
        };

        config.merge_with_args(args);
        assert_eq!(config.language, Some(Language::Ta));
        assert_eq!(config.simulation.latency_ms, 100);
    }
}
