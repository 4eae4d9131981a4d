// In crates/app-config/src/types.rs

use journal::EntrySettings;
use risk::RiskThresholds;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,

    /// How the "add trade" form turns input into trades.
    #[serde(default)]
    pub entry: EntrySettings,

    /// Risk band boundaries used for coloring and the summary.
    #[serde(default)]
    pub risk: RiskThresholds,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

/// Helper functions for serde defaults
fn default_environment() -> String { "development".to_string() }
fn default_log_level() -> String { "warn".to_string() }
