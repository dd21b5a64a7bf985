//! Application state.

use std::sync::Arc;

use crate::core::LedgerStore;
use crate::server::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The ledger store backing every request.
    pub store: Arc<dyn LedgerStore>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    pub fn new(store: Arc<dyn LedgerStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }
}
