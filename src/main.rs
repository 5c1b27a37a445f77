use anyhow::{Context, Result};
use clap::Parser;
use comp_analyzer::cli::{handle_command, Cli};
use comp_analyzer::core::ConfigManager;
use std::fs::OpenOptions;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigManager::load_from(path)?,
        None => ConfigManager::load()?,
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .context("Invalid log level in configuration")?;

    match &config.logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }

    match &config.source {
        Some(path) => info!(
            "Configuration loaded from {} (environment: {})",
            path.display(),
            config.environment
        ),
        None => info!(
            "No configuration file found, using defaults (environment: {})",
            config.environment
        ),
    }
    handle_command(cli, config).await
}
