//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Escalate - convert between rent escalation rates and lease budgets
///
/// Positionals are kept as text and parsed after clap, so a malformed number
/// is reported like any other input error.
#[derive(Parser, Debug)]
#[command(name = "escalate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation: r2b (rate to budget) or b2r (budget to rate)
    pub op: Option<String>,

    /// Escalation rate as a fraction (r2b, e.g. 0.05) or total budget (b2r)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// First-year rental (v)
    #[arg(allow_negative_numbers = true)]
    pub base_rental: Option<String>,

    /// Lease term in years (y)
    #[arg(allow_negative_numbers = true)]
    pub term_years: Option<String>,

    /// Years per escalation cycle (d)
    #[arg(allow_negative_numbers = true)]
    pub cycle_years: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "minimal")]
    pub format: OutputFormat,

    /// TOML file with default lease and solver settings
    #[arg(short, long, env = "ESCALATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Just the computed value
    #[default]
    Minimal,
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
}
