//! Error types for polynomial and root-finding operations.

use std::fmt;

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Why an iterative solver stopped without a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonConvergenceCause {
    /// The iteration cap was reached before the step fell below tolerance.
    IterationLimit,
    /// The derivative evaluated to exactly zero at an iterate.
    ZeroDerivative,
    /// An iterate became NaN or infinite.
    NonFinite,
}

impl fmt::Display for NonConvergenceCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationLimit => write!(f, "iteration limit reached"),
            Self::ZeroDerivative => write!(f, "derivative is zero"),
            Self::NonFinite => write!(f, "iterate is not finite"),
        }
    }
}

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A term with a negative exponent was passed to differentiation.
    #[error("invalid polynomial: term {coefficient}*x^{exponent} has a negative exponent")]
    InvalidPolynomial {
        /// Coefficient of the offending term.
        coefficient: f64,
        /// The negative exponent.
        exponent: f64,
    },

    /// Root-finding algorithm failed to converge.
    #[error("no convergence after {iterations} iterations ({cause}, last estimate {estimate})")]
    NonConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last iterate reached before giving up.
        estimate: f64,
        /// What stopped the iteration.
        cause: NonConvergenceCause,
    },
}

impl MathError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(iterations: u32, estimate: f64, cause: NonConvergenceCause) -> Self {
        Self::NonConvergence {
            iterations,
            estimate,
            cause,
        }
    }

    /// Returns the non-convergence cause, if this is a solver failure.
    pub fn non_convergence_cause(&self) -> Option<NonConvergenceCause> {
        match self {
            Self::NonConvergence { cause, .. } => Some(*cause),
            Self::InvalidPolynomial { .. } => None,
        }
    }
}
