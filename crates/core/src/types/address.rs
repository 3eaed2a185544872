//! Postal addresses as embedded values.
//!
//! Addresses have no identity of their own; they are embedded in a
//! [`Shipment`](crate::types::shipment::Shipment) as sender and recipient.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A sender or recipient postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[validate(length(min = 5, message = "zip code must be at least 5 characters"))]
    pub zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
