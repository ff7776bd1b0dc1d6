//! CLI error types.

use escalate_lease::LeaseError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Fewer than the two required positionals.
    #[error("missing operation or value")]
    Usage,

    /// A positional argument is not a number of the expected kind.
    #[error("invalid {name}: '{value}' is not a valid {kind}")]
    InvalidNumber {
        /// Which argument.
        name: &'static str,
        /// The raw text.
        value: String,
        /// Expected kind of number.
        kind: &'static str,
    },

    /// Validation or calculation error from the engine.
    #[error(transparent)]
    Lease(#[from] LeaseError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
