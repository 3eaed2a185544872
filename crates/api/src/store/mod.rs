//! Shipment storage.
//!
//! Handlers talk to the [`ShipmentStore`] trait, never to a concrete
//! backend, so the in-memory table can be swapped for a persistent store
//! without touching route logic. The only backend today is
//! [`memory::InMemoryStore`]; all state is lost on process restart by
//! design.

pub mod memory;

pub use memory::InMemoryStore;

use thiserror::Error;

use postship_core::{Shipment, ShipmentId, TrackingEvent, TrackingNumber};

/// Errors surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A lock guarding the in-memory tables was poisoned by a panicking
    /// writer.
    #[error("store lock poisoned")]
    Poisoned,

    /// Backend-specific failure (I/O, connection, ...) for future
    /// persistent implementations.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Keyed shipment storage with point lookup and scan-by-tracking-number.
///
/// A shipment and its tracking-event sequence are inserted together and
/// never updated or deleted. Event sequences are stored most-recent-first
/// and returned in stored order.
pub trait ShipmentStore: Send + Sync {
    /// Insert a shipment together with its event history.
    ///
    /// Ids are randomly generated upstream and assumed unique; inserting an
    /// existing id is a programming error and replaces the record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn insert(&self, shipment: Shipment, events: Vec<TrackingEvent>) -> Result<(), StoreError>;

    /// Point lookup by internal id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn get(&self, id: &ShipmentId) -> Result<Option<Shipment>, StoreError>;

    /// Scan all records for a matching tracking number.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn get_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<Shipment>, StoreError>;

    /// Every stored shipment, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn list_all(&self) -> Result<Vec<Shipment>, StoreError>;

    /// The event sequence for a shipment, most-recent-first. Empty if the
    /// shipment is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails.
    fn events(&self, id: &ShipmentId) -> Result<Vec<TrackingEvent>, StoreError>;
}
