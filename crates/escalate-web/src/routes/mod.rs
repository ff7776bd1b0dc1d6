//! Request handlers.

pub mod calc;
pub mod convert;
pub mod health;
