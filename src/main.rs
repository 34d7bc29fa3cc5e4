//! GameVerse Nexus API server.
//!
//! Parses command line arguments, loads configuration, initializes tracing,
//! builds the Axum router and serves it until a shutdown signal arrives.

use clap::Parser;

use gameverse_nexus::config::AppConfig;
use gameverse_nexus::{create_router, logging, start_server, Error};

/// GameVerse Nexus: status API for the GameVerse portal
#[derive(Parser, Debug)]
#[command(name = "gameverse-nexus", version, about)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "gameverse_nexus=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listening port, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.http.port = port;
        config.validate()?;
    }

    logging::init(&logging::resolve_filter(args.log_level), &config.logging)?;

    tracing::info!(
        config = ?args.config,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    if config.cors.allows_any_origin() {
        tracing::info!("CORS: allowing any origin");
    } else {
        tracing::info!(origins = ?config.cors.allowed_origins, "CORS: restricted origins");
    }

    let app = create_router(&config);
    start_server(app, &config).await?;

    Ok(())
}
