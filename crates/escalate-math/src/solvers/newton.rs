//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult, NonConvergenceCause};
use crate::polynomial::Polynomial;
use crate::solvers::{SolverConfig, SolverResult, DEFAULT_INITIAL_GUESS};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// and stops once `|x_n - x_{n+1}| < tolerance`, returning `x_{n+1}`.
/// The derivative is taken once, symbolically, before iterating.
///
/// # Arguments
///
/// * `polynomial` - The polynomial whose root is sought
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Tolerance and iteration cap
///
/// # Errors
///
/// * [`MathError::InvalidPolynomial`] if the polynomial has a negative exponent
/// * [`MathError::NonConvergence`] if the derivative vanishes, an iterate
///   stops being finite, or the iteration cap is exceeded
///
/// # Example
///
/// ```rust
/// use escalate_math::polynomial::Polynomial;
/// use escalate_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = Polynomial::from(vec![(1.0, 2.0), (-2.0, 0.0)]);
///
/// let result = newton_raphson(&f, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson(
    polynomial: &Polynomial,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult> {
    let derivative = polynomial.differentiate()?;
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = polynomial.evaluate(x);
        let dfx = derivative.evaluate(x);

        // Checked before the exact-root exit: f == f' == 0 is not a usable root.
        if dfx == 0.0 {
            log::debug!("newton: zero derivative at x = {x}");
            return Err(MathError::non_convergence(
                iteration,
                x,
                NonConvergenceCause::ZeroDerivative,
            ));
        }

        if fx == 0.0 {
            log::debug!("newton: exact root {x} after {iteration} iterations");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let next = x - fx / dfx;
        log::trace!("newton: iteration {iteration}: x = {x}, f(x) = {fx}, f'(x) = {dfx}");

        if !next.is_finite() {
            return Err(MathError::non_convergence(
                iteration + 1,
                x,
                NonConvergenceCause::NonFinite,
            ));
        }

        if (x - next).abs() < config.tolerance {
            let residual = polynomial.evaluate(next);
            log::debug!(
                "newton: converged to {next} in {} iterations (residual {residual:.2e})",
                iteration + 1
            );
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual,
            });
        }

        x = next;
    }

    Err(MathError::non_convergence(
        config.max_iterations,
        x,
        NonConvergenceCause::IterationLimit,
    ))
}

/// Finds a root from the default guess (1.05) with the default configuration.
pub fn find_root(polynomial: &Polynomial) -> MathResult<f64> {
    find_root_with(polynomial, DEFAULT_INITIAL_GUESS, &SolverConfig::default())
}

/// Finds a root with an explicit guess and configuration, returning only the root.
pub fn find_root_with(
    polynomial: &Polynomial,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<f64> {
    newton_raphson(polynomial, initial_guess, config).map(|result| result.root)
}
