//! Error types for lease conversions.

use escalate_math::MathError;
use thiserror::Error;

/// Result type alias for lease operations.
pub type LeaseResult<T> = Result<T, LeaseError>;

/// Errors raised by the rental converter and its configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeaseError {
    /// Escalation rate is negative (or not a number).
    #[error("bad cyclic increment: rate {rate} must be non-negative")]
    InvalidRate {
        /// The rejected rate.
        rate: f64,
    },

    /// Budget is below what the lease costs with no escalation at all.
    #[error("bad rental budget: {budget} is below the minimum of {minimum}")]
    InvalidBudget {
        /// The rejected budget.
        budget: f64,
        /// Budget at a zero escalation rate.
        minimum: f64,
    },

    /// Lease parameters cannot describe a schedule.
    #[error("invalid lease parameters: {reason}")]
    InvalidParameters {
        /// What is wrong with the parameters.
        reason: String,
    },

    /// Polynomial construction or root finding failed.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {reason}")]
    Config {
        /// Underlying I/O or parse message.
        reason: String,
    },
}

impl LeaseError {
    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True for errors caused by caller input rather than numeric failure.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::InvalidRate { .. }
            | Self::InvalidBudget { .. }
            | Self::InvalidParameters { .. }
            | Self::Config { .. }
            | Self::Math(MathError::InvalidPolynomial { .. }) => true,
            Self::Math(MathError::NonConvergence { .. }) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escalate_math::error::NonConvergenceCause;

    #[test]
    fn test_messages() {
        let err = LeaseError::InvalidRate { rate: -0.1 };
        assert!(err.to_string().starts_with("bad cyclic increment"));

        let err = LeaseError::InvalidBudget {
            budget: 1000.0,
            minimum: 3300.0,
        };
        assert!(err.to_string().starts_with("bad rental budget"));
        assert!(err.to_string().contains("3300"));
    }

    #[test]
    fn test_math_error_is_transparent() {
        let math = MathError::non_convergence(7, 1.1, NonConvergenceCause::ZeroDerivative);
        let err = LeaseError::from(math.clone());
        assert_eq!(err.to_string(), math.to_string());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_validation_classification() {
        assert!(LeaseError::InvalidRate { rate: -1.0 }.is_validation());
        assert!(LeaseError::invalid_parameters("cycle_years must be positive").is_validation());
        assert!(LeaseError::Math(MathError::InvalidPolynomial {
            coefficient: 1.0,
            exponent: -1.0
        })
        .is_validation());
    }
}
