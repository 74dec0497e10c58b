//! Payroll Engine HTTP service entry point.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

/// Serve the payroll computation API.
#[derive(Debug, Parser)]
#[command(name = "payroll-engine", version, about)]
struct Cli {
    /// Directory holding jurisdiction.yaml and rates/.
    #[arg(long, env = "PAYROLL_CONFIG_DIR", default_value = "./config/us_default")]
    config_dir: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "PAYROLL_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(&cli.config_dir)?;
    tracing::info!(
        jurisdiction = %config.jurisdiction().code,
        config_dir = %cli.config_dir.display(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!(addr = %cli.bind, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
