//! Application state.

use std::sync::Arc;

use escalate_lease::EscalateConfig;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Lease defaults and solver settings, read-only after startup.
    pub config: Arc<EscalateConfig>,
}

impl AppState {
    /// Create state around a loaded configuration.
    pub fn new(config: EscalateConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
