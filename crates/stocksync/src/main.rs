//! stocksync - Shopify inventory to S3 export job

use anyhow::Result;
use clap::Parser;
use stocksync::{config::Config, pipeline};
use stocksync_common::logging::{init_logging, LogConfig, LogLevel};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "stocksync")]
#[command(author, version, about = "Export Shopify inventory levels to S3")]
struct Cli {
    /// Local CSV export file name
    #[arg(short, long, default_value = "inventory.csv")]
    output: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging from the environment; the verbose flag raises the
    // level unless LOG_LEVEL is set explicitly
    let mut log_config = LogConfig::from_env()?;
    if cli.verbose && std::env::var("LOG_LEVEL").is_err() {
        log_config = log_config.with_level(LogLevel::Debug);
    }

    init_logging(&log_config)?;

    let mut config = Config::load()?;
    config.export_file = cli.output;

    if let Err(err) = pipeline::run(&config).await {
        error!(error = %err, "Inventory sync failed");
        return Err(err.into());
    }

    Ok(())
}
