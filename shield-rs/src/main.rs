//! shield-rs: Fraud scoring API server

use clap::Parser;
use shield_rs::api::ApiServer;
use shield_rs::scoring::Analyzer;
use shield_rs::ShieldConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shield-rs")]
#[command(about = "Fraud risk scoring API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ShieldConfig::load(cli.config.as_deref())?;
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting shield-rs v{}", env!("CARGO_PKG_VERSION"));
    match &cli.config {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No config file specified, using defaults and environment"),
    }
    info!(
        "Thresholds: message={} phone={} url={}",
        config.thresholds.message, config.thresholds.phone, config.thresholds.url
    );

    let analyzer = Analyzer::new(config.rules.clone(), config.thresholds);
    let server = ApiServer::new(analyzer, config.server.listen_addr.clone());

    server.run().await?;

    Ok(())
}
