//! Rate ↔ budget conversions.
//!
//! The forward direction evaluates the lease polynomial at `1 + rate`. The
//! inverse direction appends `-budget` as a constant term and hands the
//! result to Newton-Raphson; the root minus one is the rate.

use escalate_math::solvers::{newton_raphson, SolverConfig, DEFAULT_INITIAL_GUESS};

use crate::error::{LeaseError, LeaseResult};
use crate::params::LeaseParameters;
use crate::request::{Conversion, Operation};
use crate::schedule::lease_schedule;

/// Converts between escalation rates and budgets for one lease.
///
/// ```rust
/// use escalate_lease::{LeaseParameters, RentalConverter};
///
/// let converter = RentalConverter::new(LeaseParameters::default());
/// assert_eq!(converter.rental_to_budget(0.0).unwrap(), 3300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentalConverter {
    /// Lease being converted.
    pub params: LeaseParameters,
    /// Newton tolerance and iteration cap.
    pub solver: SolverConfig,
    /// Starting multiplier for the inverse search.
    pub initial_guess: f64,
}

impl Default for RentalConverter {
    fn default() -> Self {
        Self::new(LeaseParameters::default())
    }
}

impl RentalConverter {
    /// Creates a converter with default solver settings.
    #[must_use]
    pub fn new(params: LeaseParameters) -> Self {
        Self {
            params,
            solver: SolverConfig::default(),
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    /// Replaces the starting multiplier.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Total budget implied by a per-cycle escalation `rate`.
    ///
    /// # Errors
    ///
    /// * [`LeaseError::InvalidParameters`] if the lease is malformed
    /// * [`LeaseError::InvalidRate`] if `rate` is negative or NaN
    pub fn rental_to_budget(&self, rate: f64) -> LeaseResult<f64> {
        self.params.validate()?;
        if rate.is_nan() || rate < 0.0 {
            return Err(LeaseError::InvalidRate { rate });
        }
        let budget = lease_schedule(&self.params).evaluate(1.0 + rate);
        log::debug!("rate {rate} -> budget {budget} for {:?}", self.params);
        Ok(budget)
    }

    /// Budget at a zero escalation rate, `v · y`.
    pub fn minimum_budget(&self) -> LeaseResult<f64> {
        self.rental_to_budget(0.0)
    }

    /// Per-cycle escalation rate that exhausts exactly `budget`.
    ///
    /// # Errors
    ///
    /// * [`LeaseError::InvalidParameters`] if the lease is malformed
    /// * [`LeaseError::InvalidBudget`] if `budget` is below [`Self::minimum_budget`]
    /// * [`LeaseError::Math`] if Newton-Raphson does not converge
    pub fn budget_to_rate(&self, budget: f64) -> LeaseResult<f64> {
        let minimum = self.minimum_budget()?;
        if budget.is_nan() || budget < minimum {
            return Err(LeaseError::InvalidBudget { budget, minimum });
        }

        let f = lease_schedule(&self.params).with_term(-budget, 0.0);
        let result = newton_raphson(&f, self.initial_guess, &self.solver)?;
        let rate = result.root - 1.0;
        log::debug!(
            "budget {budget} -> rate {rate} in {} iterations for {:?}",
            result.iterations,
            self.params
        );
        Ok(rate)
    }

    /// Runs `operation` on `value`, returning both sides of the mapping.
    pub fn convert(&self, operation: Operation, value: f64) -> LeaseResult<Conversion> {
        let (rate, budget) = match operation {
            Operation::RateToBudget => (value, self.rental_to_budget(value)?),
            Operation::BudgetToRate => (self.budget_to_rate(value)?, value),
        };
        Ok(Conversion {
            operation,
            rate,
            budget,
            params: self.params,
        })
    }
}

/// Total budget implied by `rate` for `params`, with default solver settings.
pub fn rental_to_budget(rate: f64, params: &LeaseParameters) -> LeaseResult<f64> {
    RentalConverter::new(*params).rental_to_budget(rate)
}

/// Escalation rate that exhausts `budget` for `params`, with default solver settings.
pub fn budget_to_rate(budget: f64, params: &LeaseParameters) -> LeaseResult<f64> {
    RentalConverter::new(*params).budget_to_rate(budget)
}

/// Budget at a zero escalation rate for `params`.
pub fn minimum_budget(params: &LeaseParameters) -> LeaseResult<f64> {
    RentalConverter::new(*params).minimum_budget()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use escalate_math::error::NonConvergenceCause;
    use escalate_math::MathError;

    fn defaults() -> LeaseParameters {
        LeaseParameters::default()
    }

    #[test]
    fn test_zero_rate_budget_is_exact() {
        assert_eq!(rental_to_budget(0.0, &defaults()).unwrap(), 3300.0);
        assert_eq!(minimum_budget(&defaults()).unwrap(), 3300.0);
    }

    #[test]
    fn test_five_percent_budget() {
        let budget = rental_to_budget(0.05, &defaults()).unwrap();
        assert_relative_eq!(budget, 3707.039_584_240_918_4, epsilon = 1e-9);
    }

    #[test]
    fn test_four_thousand_budget_rate() {
        let rate = budget_to_rate(4000.0, &defaults()).unwrap();
        assert_relative_eq!(rate, 0.082_886_965_616_862_26, epsilon = 1e-9);
    }

    #[test]
    fn test_minimum_budget_maps_to_zero_rate() {
        let rate = budget_to_rate(3300.0, &defaults()).unwrap();
        assert!(rate.abs() < 1e-9, "rate = {rate}");
    }

    #[test]
    fn test_round_trip() {
        for rate in [0.0, 0.01, 0.05, 0.12, 0.3] {
            let budget = rental_to_budget(rate, &defaults()).unwrap();
            let back = budget_to_rate(budget, &defaults()).unwrap();
            assert!((back - rate).abs() < 1e-5, "{rate} -> {budget} -> {back}");
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = rental_to_budget(-0.1, &defaults()).unwrap_err();
        assert_eq!(err, LeaseError::InvalidRate { rate: -0.1 });
    }

    #[test]
    fn test_nan_rate_rejected() {
        let err = rental_to_budget(f64::NAN, &defaults()).unwrap_err();
        assert!(matches!(err, LeaseError::InvalidRate { .. }));
    }

    #[test]
    fn test_budget_below_minimum_rejected() {
        let err = budget_to_rate(1000.0, &defaults()).unwrap_err();
        assert_eq!(
            err,
            LeaseError::InvalidBudget {
                budget: 1000.0,
                minimum: 3300.0
            }
        );
    }

    #[test]
    fn test_zero_cycle_fails_fast() {
        let lease = defaults().with_cycle_years(0);
        assert!(matches!(
            rental_to_budget(0.05, &lease),
            Err(LeaseError::InvalidParameters { .. })
        ));
        assert!(matches!(
            budget_to_rate(4000.0, &lease),
            Err(LeaseError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_single_year_lease_cannot_be_inverted() {
        let lease = LeaseParameters::new(220.0, 1, 3);
        assert_eq!(rental_to_budget(0.5, &lease).unwrap(), 220.0);

        let err = budget_to_rate(500.0, &lease).unwrap_err();
        assert_eq!(
            err,
            LeaseError::Math(MathError::non_convergence(
                0,
                1.05,
                NonConvergenceCause::ZeroDerivative
            ))
        );
    }

    #[test]
    fn test_free_lease_with_zero_budget_has_no_rate() {
        // Every rate gives a zero budget, so none of them is the answer.
        let lease = LeaseParameters::new(0.0, 15, 3);
        assert_eq!(minimum_budget(&lease).unwrap(), 0.0);

        let err = budget_to_rate(0.0, &lease).unwrap_err();
        assert_eq!(
            err,
            LeaseError::Math(MathError::non_convergence(
                0,
                1.05,
                NonConvergenceCause::ZeroDerivative
            ))
        );
    }

    #[test]
    fn test_annual_cycles() {
        let lease = LeaseParameters::new(220.0, 15, 1);
        let budget = rental_to_budget(0.03, &lease).unwrap();
        assert_relative_eq!(budget, 4_091.761_055_072_274_3, epsilon = 1e-8);
    }

    #[test]
    fn test_custom_solver_cap_surfaces_non_convergence() {
        let converter =
            RentalConverter::new(defaults()).with_solver(SolverConfig::new(1e-15, 1));
        let err = converter.budget_to_rate(4000.0).unwrap_err();
        assert!(!err.is_validation());
    }

    #[test]
    fn test_convert_carries_both_sides() {
        let converter = RentalConverter::default();

        let forward = converter.convert(Operation::RateToBudget, 0.05).unwrap();
        assert_eq!(forward.rate, 0.05);
        assert_relative_eq!(forward.budget, 3707.039_584_240_918_4, epsilon = 1e-9);

        let inverse = converter.convert(Operation::BudgetToRate, 4000.0).unwrap();
        assert_eq!(inverse.budget, 4000.0);
        assert_relative_eq!(inverse.rate, 0.082_886_965_616_862_26, epsilon = 1e-9);
        assert_eq!(inverse.params, defaults());
    }
}
