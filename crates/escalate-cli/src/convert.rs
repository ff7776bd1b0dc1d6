//! Conversion command implementation.
//!
//! Turns the raw positionals into a [`ConversionRequest`], filling any
//! omitted lease parameter from the configuration, and runs it.

use std::path::Path;

use escalate_lease::{Conversion, ConversionRequest, EscalateConfig, Operation};

use crate::cli::Cli;
use crate::error::{CliError, CliResult};

/// Loads the configuration file if one was given, else the built-in defaults.
pub fn load_config(path: Option<&Path>) -> CliResult<EscalateConfig> {
    match path {
        Some(path) => Ok(EscalateConfig::from_file(path)?),
        None => Ok(EscalateConfig::default()),
    }
}

/// Builds the request described by the positionals.
pub fn build_request(cli: &Cli, config: &EscalateConfig) -> CliResult<ConversionRequest> {
    let (Some(op), Some(value)) = (cli.op.as_deref(), cli.value.as_deref()) else {
        return Err(CliError::Usage);
    };

    let operation: Operation = op.parse()?;
    let value = parse_f64("value", value)?;

    let mut params = config.lease;
    if let Some(v) = cli.base_rental.as_deref() {
        params.base_rental = parse_f64("first year rental", v)?;
    }
    if let Some(y) = cli.term_years.as_deref() {
        params.term_years = parse_u32("rental years", y)?;
    }
    if let Some(d) = cli.cycle_years.as_deref() {
        params.cycle_years = parse_u32("years per cycle", d)?;
    }

    Ok(ConversionRequest::new(operation, value, params))
}

/// Execute the conversion command.
///
/// Missing positionals are reported before the configuration is read.
pub fn execute(cli: &Cli) -> CliResult<Conversion> {
    if cli.op.is_none() || cli.value.is_none() {
        return Err(CliError::Usage);
    }
    let config = load_config(cli.config.as_deref())?;
    let request = build_request(cli, &config)?;
    tracing::debug!(?request, "running conversion");
    Ok(config.execute(&request)?)
}

fn parse_f64(name: &'static str, raw: &str) -> CliResult<f64> {
    raw.trim().parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: raw.to_string(),
        kind: "number",
    })
}

fn parse_u32(name: &'static str, raw: &str) -> CliResult<u32> {
    raw.trim().parse().map_err(|_| CliError::InvalidNumber {
        name,
        value: raw.to_string(),
        kind: "whole number",
    })
}
