//! Root-finding over polynomials.
//!
//! - [`newton_raphson`]: bounded Newton iteration using the exact derivative
//! - [`find_root`]: Newton with the default guess, tolerance and iteration cap
//!
//! The derivative is computed symbolically once per solve, so each iteration
//! costs two passes over the terms.
//!
//! # Example
//!
//! ```rust
//! use escalate_math::polynomial::Polynomial;
//! use escalate_math::solvers::{newton_raphson, SolverConfig};
//!
//! // x^3 - 27
//! let f = Polynomial::from(vec![(1.0, 3.0), (-27.0, 0.0)]);
//! let result = newton_raphson(&f, 2.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - 3.0).abs() < 1e-6);
//! ```

mod newton;

pub use newton::{find_root, find_root_with, newton_raphson};

use crate::error::MathResult;
use crate::polynomial::Polynomial;

/// Default convergence tolerance on the Newton step size.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default maximum number of iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Default starting point, a 5% escalation multiplier.
pub const DEFAULT_INITIAL_GUESS: f64 = 1.05;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on `|x_n - x_{n+1}|`.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Polynomial value at the root.
    pub residual: f64,
}

/// Trait for polynomial root finders.
pub trait RootFinder {
    /// Finds a root of `polynomial` starting from `initial_guess`.
    fn find_root(&self, polynomial: &Polynomial, initial_guess: f64) -> MathResult<SolverResult>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson solver with a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver {
    /// Tolerance and iteration cap.
    pub config: SolverConfig,
}

impl NewtonSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl RootFinder for NewtonSolver {
    fn find_root(&self, polynomial: &Polynomial, initial_guess: f64) -> MathResult<SolverResult> {
        newton_raphson(polynomial, initial_guess, &self.config)
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert_relative_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_relative_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 1000);
    }

    #[test]
    fn test_root_finder_trait() {
        let solver = NewtonSolver::default();
        let f = Polynomial::from(vec![(1.0, 2.0), (-2.0, 0.0)]);

        let result = solver.find_root(&f, 1.5).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert_eq!(solver.name(), "Newton-Raphson");
    }

    #[test]
    fn test_root_finder_uses_its_config() {
        let solver = NewtonSolver::new(SolverConfig::new(1e-12, 1));
        let f = Polynomial::from(vec![(1.0, 2.0), (-2.0, 0.0)]);
        assert!(solver.find_root(&f, 1.5).is_err());
    }
}
