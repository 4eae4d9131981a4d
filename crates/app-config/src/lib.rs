// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, Settings};

/// Loads the application settings from `config_dir` and the process environment.
///
/// The environment name comes from `APP_ENVIRONMENT` and defaults to "development".
pub fn load_settings(config_dir: &Path) -> Result<Settings> {
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());
    load_settings_from(config_dir, &environment, environment_source())
}

/// The environment-variable layer (e.g., `APP_ENTRY__DEFAULT_TICKER=...`).
/// The prefix is `APP`, nested keys are separated by `__`.
pub fn environment_source() -> Environment {
    Environment::with_prefix("APP").prefix_separator("_").separator("__")
}

/// Loads the application settings from `config_dir`.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file, if present.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`), if present.
/// 3. Merges settings from the given environment-variable source.
///
/// Anything left unset falls back to the built-in defaults. The risk thresholds
/// are validated before the settings are returned.
pub fn load_settings_from(config_dir: &Path, environment: &str, variables: Environment) -> Result<Settings> {
    let settings = Config::builder()
        .set_default("app.environment", environment)?
        // 1. Load the base configuration file.
        .add_source(File::from(config_dir.join("base")).required(false))
        // 2. Load the environment-specific configuration file.
        .add_source(File::from(config_dir.join(environment)).required(false))
        // 3. Load settings from environment variables.
        .add_source(variables)
        .build()?;

    // Deserialize the configuration into our `Settings` struct.
    let settings: Settings = settings.try_deserialize()?;
    settings.risk.validate()?;

    Ok(settings)
}
