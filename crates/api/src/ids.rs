//! Random identifier generation.
//!
//! Identifiers are short base-36 strings. Collisions are not checked on
//! insert; the keyspace (36^9 for entity ids) makes them negligible at
//! demo scale.

use rand::Rng;

use postship_core::{PaymentIntentId, ShipmentId, TrackingEventId, TrackingNumber};

const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of internal entity identifiers.
const ENTITY_ID_LEN: usize = 9;
/// Length of the tracking number's random suffix.
const TRACKING_SUFFIX_LEN: usize = 9;
/// Length of the payment intent identifier's random suffix.
const INTENT_SUFFIX_LEN: usize = 16;
/// Length of the client secret's random suffix.
const SECRET_SUFFIX_LEN: usize = 8;

fn random_string(len: usize, charset: &[u8]) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| {
            let index = rng.random_range(0..charset.len());
            char::from(charset[index])
        })
        .collect()
}

/// Generate a new internal shipment identifier.
#[must_use]
pub fn shipment_id() -> ShipmentId {
    ShipmentId::new(random_string(ENTITY_ID_LEN, LOWER_ALPHANUMERIC))
}

/// Generate a new tracking event identifier.
#[must_use]
pub fn tracking_event_id() -> TrackingEventId {
    TrackingEventId::new(random_string(ENTITY_ID_LEN, LOWER_ALPHANUMERIC))
}

/// Generate a new public tracking number: `PS` plus an uppercase
/// alphanumeric suffix.
#[must_use]
pub fn tracking_number() -> TrackingNumber {
    TrackingNumber::new(format!(
        "{}{}",
        TrackingNumber::PREFIX,
        random_string(TRACKING_SUFFIX_LEN, UPPER_ALPHANUMERIC)
    ))
}

/// Generate a new payment intent identifier, `pi_`-prefixed.
#[must_use]
pub fn payment_intent_id() -> PaymentIntentId {
    PaymentIntentId::new(format!(
        "pi_{}",
        random_string(INTENT_SUFFIX_LEN, LOWER_ALPHANUMERIC)
    ))
}

/// Generate the client secret paired with a payment intent.
#[must_use]
pub fn client_secret(intent_id: &PaymentIntentId) -> String {
    format!(
        "{}_secret_{}",
        intent_id,
        random_string(SECRET_SUFFIX_LEN, LOWER_ALPHANUMERIC)
    )
}
