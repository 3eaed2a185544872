//! Status and category enums for shipments and payments.
//!
//! Wire representations match the public JSON API: shipment and payment
//! statuses are `snake_case`, package types are `kebab-case`, and service
//! types are lowercase single words.

use serde::{Deserialize, Serialize};

/// Delivery lifecycle status of a shipment.
///
/// This is a flat enum: no transition graph is enforced. A shipment is
/// created directly in `Processing` (never `Draft`) and any handler that
/// sets a status may set any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Draft,
    Processing,
    Shipped,
    InTransit,
    OutForDelivery,
    Delivered,
    Failed,
    Returned,
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "draft",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::InTransit => "in_transit",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Failed => "failed",
            Self::Returned => "returned",
        };
        write!(f, "{s}")
    }
}

/// Physical packaging category for a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageType {
    Envelope,
    SmallBox,
    MediumBox,
    LargeBox,
    Tube,
    Custom,
}

/// Delivery speed tier. Determines base cost and delivery-day estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Standard,
    Express,
    Overnight,
}

impl ServiceType {
    /// All tiers, in the order they are quoted.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::Overnight];

    /// Lowercase wire name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Overnight => "overnight",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a simulated payment intent.
///
/// Mirrors the subset of Stripe intent states the simulator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    Succeeded,
    Failed,
}
