//! JSON request and response bodies.

use escalate_lease::{ConversionRequest, LeaseParameters, Operation};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/convert`. Omitted lease fields take the configured defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertRequest {
    pub operation: Operation,
    /// Rate as a fraction for `r2b`, budget for `b2r`.
    pub value: f64,
    pub base_rental: Option<f64>,
    pub term_years: Option<u32>,
    pub cycle_years: Option<u32>,
}

impl ConvertRequest {
    /// Fills missing lease fields from `defaults`.
    pub fn into_request(self, defaults: LeaseParameters) -> ConversionRequest {
        let params = LeaseParameters {
            base_rental: self.base_rental.unwrap_or(defaults.base_rental),
            term_years: self.term_years.unwrap_or(defaults.term_years),
            cycle_years: self.cycle_years.unwrap_or(defaults.cycle_years),
        };
        ConversionRequest::new(self.operation, self.value, params)
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
