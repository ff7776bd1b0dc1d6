//! Typed conversion requests and results.
//!
//! Front ends parse their raw input (positional arguments, query strings,
//! JSON bodies) into a [`ConversionRequest`] once, at the boundary. The
//! engine never sees strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::converter::RentalConverter;
use crate::error::{LeaseError, LeaseResult};
use crate::params::LeaseParameters;

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operation {
    /// Escalation rate to total budget.
    #[default]
    #[serde(rename = "r2b", alias = "rate_to_budget")]
    RateToBudget,
    /// Total budget to escalation rate.
    #[serde(rename = "b2r", alias = "budget_to_rate")]
    BudgetToRate,
}

impl Operation {
    /// Short code used on the command line and in forms.
    pub fn code(self) -> &'static str {
        match self {
            Self::RateToBudget => "r2b",
            Self::BudgetToRate => "b2r",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Operation {
    type Err = LeaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r2b" | "rate_to_budget" => Ok(Self::RateToBudget),
            "b2r" | "budget_to_rate" => Ok(Self::BudgetToRate),
            other => Err(LeaseError::invalid_parameters(format!(
                "unknown operation '{other}', expected 'r2b' or 'b2r'"
            ))),
        }
    }
}

/// A validated request: which way to convert, the input value, and the lease.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Conversion direction.
    pub operation: Operation,
    /// Rate (as a fraction) for `r2b`, budget for `b2r`.
    pub value: f64,
    /// Lease shape.
    #[serde(default)]
    pub params: LeaseParameters,
}

impl ConversionRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(operation: Operation, value: f64, params: LeaseParameters) -> Self {
        Self {
            operation,
            value,
            params,
        }
    }

    /// Executes the request with default solver settings.
    pub fn execute(&self) -> LeaseResult<Conversion> {
        RentalConverter::new(self.params).convert(self.operation, self.value)
    }
}

/// Outcome of a conversion, carrying both the rate and the budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Direction that was run.
    pub operation: Operation,
    /// Escalation rate as a fraction.
    pub rate: f64,
    /// Total budget.
    pub budget: f64,
    /// Lease the conversion applies to.
    pub params: LeaseParameters,
}

impl Conversion {
    /// The value that was computed rather than supplied.
    pub fn result(&self) -> f64 {
        match self.operation {
            Operation::RateToBudget => self.budget,
            Operation::BudgetToRate => self.rate,
        }
    }

    /// Rate expressed as a percentage.
    pub fn rate_percent(&self) -> f64 {
        self.rate * 100.0
    }
}
