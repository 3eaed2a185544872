//! Shipments, tracking events, and rate quotes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::id::{ShipmentId, TrackingEventId, TrackingNumber};
use super::package::PackageDetails;
use super::status::{ServiceType, ShipmentStatus};

/// A registered package-delivery order.
///
/// Identity is the generated [`ShipmentId`]; the [`TrackingNumber`] is the
/// separately generated public-facing identifier. Invariant:
/// `total_cost == shipping_cost + insurance_cost.unwrap_or(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: ShipmentId,
    pub tracking_number: TrackingNumber,
    pub status: ShipmentStatus,
    pub sender: Address,
    pub recipient: Address,
    pub package: PackageDetails,
    pub service_type: ServiceType,
    pub shipping_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_cost: Option<f64>,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_delivery: Option<DateTime<Utc>>,
    /// Rendered label as an SVG data URL embedding the tracking number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// A timestamped status/location snapshot in a shipment's delivery history.
///
/// Events are owned by their shipment's sequence; `shipment_id` is a
/// back-reference for lookup only. Sequences are stored and returned
/// most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub id: TrackingEventId,
    pub shipment_id: ShipmentId,
    pub status: ShipmentStatus,
    pub location: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_location: Option<String>,
}

/// A quoted price and delivery estimate for one service tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    pub service_type: ServiceType,
    pub cost: f64,
    pub estimated_days: u32,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::status::PackageType;

    fn sample_shipment() -> Shipment {
        let now = Utc::now();
        Shipment {
            id: ShipmentId::new("k3j2h1g0f"),
            tracking_number: TrackingNumber::new("PS9X8Y7Z6W5"),
            status: ShipmentStatus::Processing,
            sender: Address {
                name: "Sender".to_string(),
                address: "1 First St".to_string(),
                city: "Boston".to_string(),
                state: None,
                zip_code: "02101".to_string(),
                country: None,
                phone: None,
            },
            recipient: Address {
                name: "Recipient".to_string(),
                address: "2 Second Ave".to_string(),
                city: "New York".to_string(),
                state: None,
                zip_code: "10001".to_string(),
                country: None,
                phone: None,
            },
            package: PackageDetails {
                package_type: PackageType::Envelope,
                weight: 0.5,
                dimensions: "12x9x1".to_string(),
                description: "Documents".to_string(),
                declared_value: 0.0,
            },
            service_type: ServiceType::Standard,
            shipping_cost: 8.5,
            insurance_cost: None,
            total_cost: 8.5,
            created_at: now,
            updated_at: now,
            estimated_delivery: None,
            actual_delivery: None,
            barcode: None,
            special_instructions: None,
        }
    }

    #[test]
    fn test_shipment_wire_format() {
        let json = serde_json::to_value(sample_shipment()).expect("serialize");
        assert_eq!(json["trackingNumber"], "PS9X8Y7Z6W5");
        assert_eq!(json["status"], "processing");
        assert_eq!(json["serviceType"], "standard");
        assert_eq!(json["shippingCost"], 8.5);
        // Unset optionals are omitted, not null
        assert!(json.get("insuranceCost").is_none());
        assert!(json.get("barcode").is_none());
    }

    #[test]
    fn test_shipment_round_trips() {
        let shipment = sample_shipment();
        let json = serde_json::to_string(&shipment).expect("serialize");
        let back: Shipment = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, shipment);
    }

    #[test]
    fn test_tracking_event_wire_format() {
        let event = TrackingEvent {
            id: TrackingEventId::new("evt123abc"),
            shipment_id: ShipmentId::new("k3j2h1g0f"),
            status: ShipmentStatus::InTransit,
            location: "Transit Hub".to_string(),
            description: "Package in transit to destination".to_string(),
            timestamp: Utc::now(),
            facility_name: None,
            next_location: None,
        };
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["shipmentId"], "k3j2h1g0f");
        assert_eq!(json["status"], "in_transit");
        assert!(json.get("facilityName").is_none());
    }
}
