//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::services::payments::PaymentSimulator;
use crate::store::{InMemoryStore, ShipmentStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The shipment store is held as a trait
/// object so a persistent backend can be injected without touching the
/// handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Box<dyn ShipmentStore>,
    payments: PaymentSimulator,
}

impl AppState {
    /// Create application state backed by an empty in-memory store.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(config, Box::new(InMemoryStore::new()))
    }

    /// Create application state with an injected storage backend.
    #[must_use]
    pub fn with_store(config: ApiConfig, store: Box<dyn ShipmentStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                payments: PaymentSimulator::new(),
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the shipment store.
    #[must_use]
    pub fn store(&self) -> &dyn ShipmentStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the payment simulator.
    #[must_use]
    pub fn payments(&self) -> &PaymentSimulator {
        &self.inner.payments
    }
}
