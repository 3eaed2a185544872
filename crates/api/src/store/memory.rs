//! In-memory shipment storage.
//!
//! Two parallel `RwLock`-guarded maps: shipments by id, and each
//! shipment's tracking-event sequence. The locks are required because
//! axum runs handlers on parallel runtime threads; individual operations
//! take a single lock so a request either fully writes or fully fails.

use std::collections::HashMap;
use std::sync::RwLock;

use postship_core::{Shipment, ShipmentId, TrackingEvent, TrackingNumber};

use super::{ShipmentStore, StoreError};

/// Process-memory shipment store. State is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    shipments: RwLock<HashMap<ShipmentId, Shipment>>,
    tracking_events: RwLock<HashMap<ShipmentId, Vec<TrackingEvent>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShipmentStore for InMemoryStore {
    fn insert(&self, shipment: Shipment, events: Vec<TrackingEvent>) -> Result<(), StoreError> {
        // Take both locks before writing so a reader never observes a
        // shipment without its event history.
        let mut shipments = self.shipments.write().map_err(|_| StoreError::Poisoned)?;
        let mut tracking_events = self
            .tracking_events
            .write()
            .map_err(|_| StoreError::Poisoned)?;

        tracking_events.insert(shipment.id.clone(), events);
        shipments.insert(shipment.id.clone(), shipment);
        Ok(())
    }

    fn get(&self, id: &ShipmentId) -> Result<Option<Shipment>, StoreError> {
        let shipments = self.shipments.read().map_err(|_| StoreError::Poisoned)?;
        Ok(shipments.get(id).cloned())
    }

    fn get_by_tracking_number(
        &self,
        tracking_number: &TrackingNumber,
    ) -> Result<Option<Shipment>, StoreError> {
        let shipments = self.shipments.read().map_err(|_| StoreError::Poisoned)?;
        // Linear scan; tracking numbers are not indexed at this scale.
        Ok(shipments
            .values()
            .find(|shipment| &shipment.tracking_number == tracking_number)
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<Shipment>, StoreError> {
        let shipments = self.shipments.read().map_err(|_| StoreError::Poisoned)?;
        Ok(shipments.values().cloned().collect())
    }

    fn events(&self, id: &ShipmentId) -> Result<Vec<TrackingEvent>, StoreError> {
        let tracking_events = self
            .tracking_events
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        Ok(tracking_events.get(id).cloned().unwrap_or_default())
    }
}
