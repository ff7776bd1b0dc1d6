//! Escalate web server binary.

use std::path::PathBuf;

use clap::Parser;
use escalate_lease::EscalateConfig;
use escalate_web::{server::run_server, state::AppState};
use tracing_subscriber::EnvFilter;

/// Lease rent escalation calculator, served over HTTP
#[derive(Parser, Debug)]
#[command(name = "escalate-web")]
#[command(version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// TOML file with lease defaults and solver settings
    #[arg(short, long, env = "ESCALATE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            EscalateConfig::from_file(path)?
        }
        None => EscalateConfig::default(),
    };
    tracing::info!(
        base_rental = config.lease.base_rental,
        term_years = config.lease.term_years,
        cycle_years = config.lease.cycle_years,
        "default lease"
    );

    run_server(AppState::new(config), &args.host, args.port).await
}
