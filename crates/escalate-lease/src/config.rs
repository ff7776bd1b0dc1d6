//! Calculator configuration.
//!
//! Defaults for the lease and the solver, optionally loaded from a TOML file.
//! Every field may be omitted:
//!
//! ```toml
//! [lease]
//! base_rental = 220.0
//! term_years = 15
//! cycle_years = 3
//!
//! [solver]
//! initial_guess = 1.05
//! tolerance = 1e-6
//! max_iterations = 1000
//! ```

use std::path::Path;

use escalate_math::solvers::{
    SolverConfig, DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use serde::{Deserialize, Serialize};

use crate::converter::RentalConverter;
use crate::error::{LeaseError, LeaseResult};
use crate::params::LeaseParameters;
use crate::request::{Conversion, ConversionRequest};

/// Newton-Raphson settings used for budget → rate conversions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    /// Starting escalation multiplier.
    pub initial_guess: f64,
    /// Convergence threshold on the Newton step.
    pub tolerance: f64,
    /// Iteration cap.
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverSettings {
    /// Tolerance and iteration cap as a solver configuration.
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

/// Top-level configuration shared by the front ends.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EscalateConfig {
    /// Default lease used when a request leaves parameters out.
    pub lease: LeaseParameters,
    /// Solver settings.
    pub solver: SolverSettings,
}

impl EscalateConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> LeaseResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| LeaseError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> LeaseResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| LeaseError::config(format!("{}: {e}", path.display())))?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> LeaseResult<String> {
        toml::to_string_pretty(self).map_err(|e| LeaseError::config(e.to_string()))
    }

    /// Checks the default lease and the solver settings.
    pub fn validate(&self) -> LeaseResult<()> {
        self.lease.validate()?;
        let solver = &self.solver;
        if !(solver.tolerance.is_finite() && solver.tolerance > 0.0) {
            return Err(LeaseError::config(format!(
                "solver.tolerance must be positive, got {}",
                solver.tolerance
            )));
        }
        if solver.max_iterations == 0 {
            return Err(LeaseError::config("solver.max_iterations must be at least 1"));
        }
        if !solver.initial_guess.is_finite() {
            return Err(LeaseError::config("solver.initial_guess must be finite"));
        }
        Ok(())
    }

    /// Converter for the configured default lease.
    pub fn converter(&self) -> RentalConverter {
        self.converter_for(self.lease)
    }

    /// Converter for `params` using the configured solver settings.
    pub fn converter_for(&self, params: LeaseParameters) -> RentalConverter {
        RentalConverter::new(params)
            .with_solver(self.solver.solver_config())
            .with_initial_guess(self.solver.initial_guess)
    }

    /// Executes `request` with the configured solver settings.
    pub fn execute(&self, request: &ConversionRequest) -> LeaseResult<Conversion> {
        self.converter_for(request.params)
            .convert(request.operation, request.value)
    }
}
