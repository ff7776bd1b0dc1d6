//! # Escalate Lease
//!
//! Converts between a lease's per-cycle rent escalation **rate** and the total
//! **budget** that rate implies over the lease term.
//!
//! Each lease year contributes `v · (1 + r)^(i / d)`, where `v` is the base
//! rental, `i` the year index and `d` the number of years per escalation
//! cycle. Summing over the term gives a polynomial in the multiplier
//! `x = 1 + r`:
//!
//! - **Rate → budget** evaluates that polynomial directly.
//! - **Budget → rate** subtracts the budget as a constant term and solves for
//!   the root with Newton-Raphson.
//!
//! ## Example
//!
//! ```rust
//! use escalate_lease::{budget_to_rate, rental_to_budget, LeaseParameters};
//!
//! let lease = LeaseParameters::default(); // 220.0 / 15 years / 3-year cycles
//! let budget = rental_to_budget(0.05, &lease).unwrap();
//! let rate = budget_to_rate(budget, &lease).unwrap();
//! assert!((rate - 0.05).abs() < 1e-5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod converter;
pub mod error;
pub mod params;
pub mod request;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{EscalateConfig, SolverSettings};
    pub use crate::converter::{budget_to_rate, minimum_budget, rental_to_budget, RentalConverter};
    pub use crate::error::{LeaseError, LeaseResult};
    pub use crate::params::LeaseParameters;
    pub use crate::request::{Conversion, ConversionRequest, Operation};
    pub use crate::schedule::lease_schedule;
}

pub use config::EscalateConfig;
pub use converter::{budget_to_rate, minimum_budget, rental_to_budget, RentalConverter};
pub use error::{LeaseError, LeaseResult};
pub use params::LeaseParameters;
pub use request::{Conversion, ConversionRequest, Operation};
