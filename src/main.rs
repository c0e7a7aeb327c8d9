use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Use the library instead of redeclaring modules
use svg_fallback::{
    assets::PlaceholderAssets, config::Config, fallback::FallbackPipeline, web::WebServer,
};

#[derive(Parser)]
#[command(name = "svg-fallback")]
#[command(version = "0.1.0")]
#[command(about = "A fallback asset server that answers missing resources with placeholder SVGs")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = format!("svg_fallback={},tower_http=info", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting svg-fallback v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    // Placeholders are mandatory; a missing payload aborts startup here.
    let assets = Arc::new(PlaceholderAssets::load(&config.placeholders)?);
    info!("Placeholder assets loaded");

    info!(
        "Serving static files from: {}",
        config.storage.static_root.display()
    );

    let pipeline = FallbackPipeline::new(assets);
    let web_server = WebServer::new(config, pipeline)?;

    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );
    web_server.serve().await?;

    Ok(())
}
