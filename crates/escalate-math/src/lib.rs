//! # Escalate Math
//!
//! Numerical building blocks for the Escalate lease calculator.
//!
//! This crate provides:
//!
//! - **Polynomial**: Sparse polynomials with real (possibly fractional) exponents,
//!   with evaluation and term-wise differentiation
//! - **Solvers**: A bounded Newton-Raphson root finder over polynomials
//!
//! ## Example
//!
//! ```rust
//! use escalate_math::prelude::*;
//!
//! // x^2 - 2
//! let f = Polynomial::from(vec![(1.0, 2.0), (-2.0, 0.0)]);
//! let root = find_root(&f).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod polynomial;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult, NonConvergenceCause};
    pub use crate::polynomial::{differentiate, evaluate, Polynomial, Term};
    pub use crate::solvers::{
        find_root, find_root_with, newton_raphson, NewtonSolver, RootFinder, SolverConfig,
        SolverResult, DEFAULT_INITIAL_GUESS,
    };
}

pub use error::{MathError, MathResult};
pub use polynomial::{Polynomial, Term};
