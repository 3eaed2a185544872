//! Request and response payloads for the PostShip HTTP API.
//!
//! The Rust analogue of a shared API schema: every body and query the
//! server accepts or produces is defined here, so the API crate and the
//! integration tests agree on the wire format. All payloads use camelCase
//! field names on the wire.
//!
//! Incoming payloads carry their validation rules ([`validator`]); handlers
//! must call `.validate()` (or [`RatesQuery::into_validated`]) before the
//! data crosses into business logic.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::types::{
    Address, PackageDetails, PackageType, PaymentIntent, ServiceType, Shipment, ShippingRate,
    TrackingEvent,
};

/// Response for `GET /api/ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Body for `POST /api/shipments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    #[validate(nested)]
    pub sender: Address,
    #[validate(nested)]
    pub recipient: Address,
    #[validate(nested)]
    pub package: PackageDetails,
    pub service_type: ServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Response for `POST /api/shipments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentResponse {
    pub shipment: Shipment,
    /// The synthesized history, most-recent-first.
    pub tracking_events: Vec<TrackingEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    pub barcode: String,
}

/// Response for `GET /api/shipments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListShipmentsResponse {
    pub shipments: Vec<Shipment>,
}

/// Response for `GET /api/shipments/track/{trackingNumber}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackShipmentResponse {
    pub shipment: Shipment,
    pub tracking_events: Vec<TrackingEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<chrono::DateTime<chrono::Utc>>,
}

/// Raw query string for `GET /api/shipments/rates`.
///
/// Numeric fields arrive as strings and are coerced by
/// [`RatesQuery::into_validated`]. Zip codes are checked for length but are
/// not used in pricing; they are carried for forward compatibility with
/// zone-based rate tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatesQuery {
    #[validate(length(min = 5, message = "zip code must be at least 5 characters"))]
    pub sender_zip: String,
    #[validate(length(min = 5, message = "zip code must be at least 5 characters"))]
    pub recipient_zip: String,
    pub package_type: PackageType,
    pub weight: String,
    pub dimensions: String,
    pub declared_value: String,
}

/// A constraint-checked rate-quote request, produced from [`RatesQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct GetRatesRequest {
    pub sender_zip: String,
    pub recipient_zip: String,
    pub package_type: PackageType,
    pub weight: f64,
    pub dimensions: String,
    pub declared_value: f64,
}

impl RatesQuery {
    /// Validate the raw query and coerce its numeric fields.
    ///
    /// # Errors
    ///
    /// Returns every violated constraint at once: zip length failures from
    /// the derived rules plus an `invalid_number` violation for each numeric
    /// field that does not parse to a finite number.
    pub fn into_validated(self) -> Result<GetRatesRequest, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };

        let weight = parse_number(&self.weight, "weight", &mut errors);
        let declared_value = parse_number(&self.declared_value, "declared_value", &mut errors);

        match (weight, declared_value) {
            (Some(weight), Some(declared_value)) if errors.is_empty() => Ok(GetRatesRequest {
                sender_zip: self.sender_zip,
                recipient_zip: self.recipient_zip,
                package_type: self.package_type,
                weight,
                dimensions: self.dimensions,
                declared_value,
            }),
            _ => Err(errors),
        }
    }
}

/// Parse a query-string number, recording a violation on failure.
fn parse_number(raw: &str, field: &'static str, errors: &mut ValidationErrors) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            let mut error = ValidationError::new("invalid_number");
            error.message = Some(Cow::Borrowed("must be a number"));
            errors.add(field.into(), error);
            None
        }
    }
}

/// Response for `GET /api/shipments/rates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRatesResponse {
    pub rates: Vec<ShippingRate>,
}

/// Response for `GET /api/payment/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub payment_intent: PaymentIntent,
    pub publishable_key: String,
}

/// Body for `POST /api/payment/process`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    pub shipment_id: String,
    pub payment_method_id: String,
    /// Amount in integer cents.
    pub amount: i64,
}

/// Response for `POST /api/payment/process`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentResponse {
    pub success: bool,
    pub payment_intent: PaymentIntent,
    /// A fabricated snapshot; the real shipment store is never consulted.
    pub shipment: Shipment,
}

/// Response for `GET /api/payment/{paymentIntentId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    pub payment_intent: PaymentIntent,
}

/// A single violated constraint inside an [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Dotted path to the offending field, e.g. `sender.zip_code`.
    pub field: String,
    /// Machine-readable rule code, e.g. `length` or `invalid_number`.
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Uniform error body: `{error, details?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}
