//! Mock payment processing.
//!
//! A stand-in for a real payment gateway integration. Intents are stored
//! in process memory, never expire, and deliberately never touch the
//! shipment store: processing a payment fabricates a shipment snapshot
//! instead of reading or mutating real records. Keep this boundary unless
//! a real gateway replaces it.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use postship_core::api::ProcessPaymentRequest;
use postship_core::{
    Address, PackageDetails, PackageType, PaymentIntent, PaymentIntentId, PaymentStatus,
    ServiceType, Shipment, ShipmentId, ShipmentStatus, TrackingNumber,
};

use crate::ids;
use crate::store::StoreError;

/// Fixed amount in cents used for freshly created intents, independent of
/// the referenced shipment's actual total.
const MOCK_AMOUNT_CENTS: i64 = 1149;

const CURRENCY: &str = "usd";

/// In-memory payment intent simulator.
#[derive(Debug, Default)]
pub struct PaymentSimulator {
    intents: RwLock<HashMap<PaymentIntentId, PaymentIntent>>,
}

impl PaymentSimulator {
    /// Create an empty simulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh intent in `requires_payment_method` state.
    ///
    /// The shipment reference is accepted for API compatibility but the
    /// amount is always the fixed mock value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the intent table lock is poisoned.
    pub fn create_intent(&self) -> Result<PaymentIntent, StoreError> {
        let intent = self.mint_intent(MOCK_AMOUNT_CENTS, PaymentStatus::RequiresPaymentMethod)?;
        Ok(intent)
    }

    /// Unconditionally "process" a payment: a new intent in `succeeded`
    /// state plus a fabricated shipment snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the intent table lock is poisoned.
    pub fn process_payment(
        &self,
        request: &ProcessPaymentRequest,
    ) -> Result<(PaymentIntent, Shipment), StoreError> {
        let intent = self.mint_intent(request.amount, PaymentStatus::Succeeded)?;
        let shipment = mock_shipment_snapshot(&request.shipment_id);
        Ok((intent, shipment))
    }

    /// Look up a previously created intent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the intent table lock is poisoned.
    pub fn status(&self, id: &PaymentIntentId) -> Result<Option<PaymentIntent>, StoreError> {
        let intents = self.intents.read().map_err(|_| StoreError::Poisoned)?;
        Ok(intents.get(id).cloned())
    }

    fn mint_intent(&self, amount: i64, status: PaymentStatus) -> Result<PaymentIntent, StoreError> {
        let id = ids::payment_intent_id();
        let client_secret = ids::client_secret(&id);
        let intent = PaymentIntent {
            id: id.clone(),
            amount,
            currency: CURRENCY.to_string(),
            status,
            client_secret,
        };

        let mut intents = self.intents.write().map_err(|_| StoreError::Poisoned)?;
        intents.insert(id, intent.clone());
        Ok(intent)
    }
}

/// The fixed shipment snapshot returned from payment processing. A real
/// gateway integration would look up and update the stored shipment here.
fn mock_shipment_snapshot(shipment_id: &str) -> Shipment {
    let now = Utc::now();
    Shipment {
        id: ShipmentId::new(shipment_id),
        tracking_number: TrackingNumber::new("PS123456789"),
        status: ShipmentStatus::Processing,
        sender: Address {
            name: "Mock Sender".to_string(),
            address: "123 Main St".to_string(),
            city: "Boston".to_string(),
            state: None,
            zip_code: "02101".to_string(),
            country: None,
            phone: None,
        },
        recipient: Address {
            name: "Mock Recipient".to_string(),
            address: "456 Oak Ave".to_string(),
            city: "New York".to_string(),
            state: None,
            zip_code: "10001".to_string(),
            country: None,
            phone: None,
        },
        package: PackageDetails {
            package_type: PackageType::SmallBox,
            weight: 2.5,
            dimensions: "8x6x4".to_string(),
            description: "Books".to_string(),
            declared_value: 50.0,
        },
        service_type: ServiceType::Express,
        shipping_cost: 15.99,
        insurance_cost: None,
        total_cost: 18.49,
        created_at: now,
        updated_at: now,
        estimated_delivery: None,
        actual_delivery: None,
        barcode: None,
        special_instructions: None,
    }
}
