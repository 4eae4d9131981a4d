// In app/src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use risk::{RiskClassifier, ThresholdClassifier};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

mod render;
mod session;

use crate::session::Session;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A personal trade-risk journal. Type `help` once it is running.")]
struct Cli {
    /// Directory holding `base.toml` and the per-environment overrides.
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Also print every journal change as a JSON line.
    #[arg(long)]
    json: bool,

    /// Disable colored risk output.
    #[arg(long)]
    no_color: bool,
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings(&cli.config_dir)
        .with_context(|| format!("loading settings from {}", cli.config_dir.display()))?;

    // --- Tracing Setup ---
    let level: tracing::Level = settings
        .app
        .log_level
        .parse()
        .with_context(|| format!("invalid log level {:?}", settings.app.log_level))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    let classifier = ThresholdClassifier::new(settings.risk)?;
    tracing::info!(
        environment = %settings.app.environment,
        classifier = classifier.name(),
        "Starting trade journal session"
    );

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let mut session = Session::new(settings.entry, classifier, color);
    if cli.json {
        session = session.with_json_events();
    }

    session.run(std::io::stdin().lock(), std::io::stdout().lock())?;

    tracing::info!(
        trades = session.store().len(),
        "Trade journal session ended; all trades are discarded"
    );

    Ok(())
}
