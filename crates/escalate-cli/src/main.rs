//! Escalate CLI - convert between rent escalation rates and lease budgets.
//!
//! # Usage
//!
//! ```bash
//! # Budget implied by a 5% per-cycle escalation
//! escalate r2b 0.05 220 15 3
//!
//! # Escalation rate that exhausts a budget of 4000
//! escalate b2r 4000 220 15 3
//!
//! # Table output with defaults from a config file
//! escalate --format table --config escalate.toml b2r 4000
//! ```
//!
//! Exits with 0 on success and `EX_USAGE` (64) on missing arguments or any
//! validation or calculation error.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod convert;
mod error;
mod output;

use cli::Cli;
use error::CliError;

/// `sysexits.h` command line usage error.
const EX_USAGE: u8 = 64;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match convert::execute(&cli) {
        Ok(conversion) => {
            output::print_conversion(&conversion, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(CliError::Usage) => {
            // A broken config still gets the synopsis, computed with defaults.
            let config = convert::load_config(cli.config.as_deref()).unwrap_or_default();
            output::print_usage(&config);
            Ok(ExitCode::from(EX_USAGE))
        }
        Err(err) => {
            tracing::debug!(error = ?err, "conversion failed");
            output::print_error(&err.to_string());
            Ok(ExitCode::from(EX_USAGE))
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
