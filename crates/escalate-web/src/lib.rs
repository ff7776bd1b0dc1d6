//! Escalate web front end.
//!
//! Serves the calculator as an HTML form plus a small JSON API.
//!
//! ## Endpoints
//!
//! - `GET /` - the form; reads `op, r, b, v, y, d` from the query string
//!   (`r` is a percentage)
//! - `POST /api/v1/convert` - JSON conversion
//! - `GET /health` - liveness
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! escalate-web
//!
//! # Custom host, port and lease defaults
//! escalate-web --host 0.0.0.0 --port 3000 --config escalate.toml
//! ```

pub mod dto;
pub mod error;
pub mod form;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
