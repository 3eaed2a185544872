//! Package details embedded in a shipment.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::PackageType;

/// Physical description of the parcel being shipped.
///
/// Weight is in pounds, declared value in USD. Dimensions are free text
/// in "L x W x H" form; they are carried through but never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    #[serde(rename = "type")]
    pub package_type: PackageType,
    #[validate(range(exclusive_min = 0.0, message = "weight must be positive"))]
    pub weight: f64,
    #[validate(length(min = 1, message = "dimensions are required"))]
    pub dimensions: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "declared value must not be negative"))]
    pub declared_value: f64,
}
