//! Lease parameters.

use serde::{Deserialize, Serialize};

use crate::error::{LeaseError, LeaseResult};

/// Default first-year rental.
pub const DEFAULT_BASE_RENTAL: f64 = 220.0;

/// Default lease length in years.
pub const DEFAULT_TERM_YEARS: u32 = 15;

/// Default number of years between escalation events.
pub const DEFAULT_CYCLE_YEARS: u32 = 3;

/// The shape of a lease: what the first year costs, how long it runs, and how
/// often the rent escalates.
///
/// Every field has a default, so a config file or request may set any subset.
///
/// ```rust
/// use escalate_lease::LeaseParameters;
///
/// let lease = LeaseParameters::default().with_term_years(10);
/// assert_eq!(lease.base_rental, 220.0);
/// assert_eq!(lease.term_years, 10);
/// assert_eq!(lease.cycle_years, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaseParameters {
    /// First-year rental before any escalation (`v`).
    pub base_rental: f64,
    /// Number of lease years in the schedule (`y`).
    pub term_years: u32,
    /// Years per escalation cycle (`d`).
    pub cycle_years: u32,
}

impl Default for LeaseParameters {
    fn default() -> Self {
        Self {
            base_rental: DEFAULT_BASE_RENTAL,
            term_years: DEFAULT_TERM_YEARS,
            cycle_years: DEFAULT_CYCLE_YEARS,
        }
    }
}

impl LeaseParameters {
    /// Creates lease parameters from explicit values.
    #[must_use]
    pub fn new(base_rental: f64, term_years: u32, cycle_years: u32) -> Self {
        Self {
            base_rental,
            term_years,
            cycle_years,
        }
    }

    /// Sets the base rental.
    #[must_use]
    pub fn with_base_rental(mut self, base_rental: f64) -> Self {
        self.base_rental = base_rental;
        self
    }

    /// Sets the term in years.
    #[must_use]
    pub fn with_term_years(mut self, term_years: u32) -> Self {
        self.term_years = term_years;
        self
    }

    /// Sets the cycle length in years.
    #[must_use]
    pub fn with_cycle_years(mut self, cycle_years: u32) -> Self {
        self.cycle_years = cycle_years;
        self
    }

    /// Checks that the parameters describe a usable schedule.
    ///
    /// # Errors
    ///
    /// Returns [`LeaseError::InvalidParameters`] when the cycle or term is
    /// zero, or the base rental is negative or not finite.
    pub fn validate(&self) -> LeaseResult<()> {
        if self.cycle_years == 0 {
            return Err(LeaseError::invalid_parameters(
                "cycle_years must be at least 1",
            ));
        }
        if self.term_years == 0 {
            return Err(LeaseError::invalid_parameters("term_years must be at least 1"));
        }
        if !self.base_rental.is_finite() || self.base_rental < 0.0 {
            return Err(LeaseError::invalid_parameters(format!(
                "base_rental must be a non-negative number, got {}",
                self.base_rental
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = LeaseParameters::default();
        assert_eq!(p, LeaseParameters::new(220.0, 15, 3));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_zero_cycle_rejected() {
        let err = LeaseParameters::default()
            .with_cycle_years(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LeaseError::InvalidParameters { .. }));
        assert!(err.to_string().contains("cycle_years"));
    }

    #[test]
    fn test_zero_term_rejected() {
        let err = LeaseParameters::default()
            .with_term_years(0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("term_years"));
    }

    #[test]
    fn test_bad_base_rental_rejected() {
        for v in [-1.0, f64::NAN, f64::INFINITY] {
            let p = LeaseParameters::default().with_base_rental(v);
            assert!(p.validate().is_err(), "accepted base rental {v}");
        }
        assert!(LeaseParameters::default()
            .with_base_rental(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_partial_deserialization() {
        let p: LeaseParameters = serde_json::from_str(r#"{"term_years": 10}"#).unwrap();
        assert_eq!(p, LeaseParameters::new(220.0, 10, 3));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed = serde_json::from_str::<LeaseParameters>(r#"{"years": 10}"#);
        assert!(parsed.is_err());
    }
}
