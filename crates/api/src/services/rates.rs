//! Shipping cost calculation and rate quoting.
//!
//! Pure functions: a fixed base rate per service tier plus a linear
//! per-pound surcharge over the first pound. Origin/destination play no
//! part in pricing.

use postship_core::{ServiceType, ShippingRate};

/// Surcharge in USD per pound of weight exceeding one pound.
const SURCHARGE_PER_EXTRA_POUND: f64 = 2.0;

/// Base rate in USD for a service tier.
#[must_use]
pub const fn base_rate(service_type: ServiceType) -> f64 {
    match service_type {
        ServiceType::Standard => 8.50,
        ServiceType::Express => 15.99,
        ServiceType::Overnight => 24.99,
    }
}

/// Fixed delivery estimate in days for a service tier.
#[must_use]
pub const fn delivery_days(service_type: ServiceType) -> u32 {
    match service_type {
        ServiceType::Standard => 5,
        ServiceType::Express => 2,
        ServiceType::Overnight => 1,
    }
}

/// Marketing description for a service tier.
#[must_use]
pub const fn tier_description(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Standard => "Standard delivery in 3-5 business days",
        ServiceType::Express => "Express delivery in 1-2 business days",
        ServiceType::Overnight => "Overnight delivery by next business day",
    }
}

/// Shipping cost for a tier and weight in pounds.
///
/// Weight at or under one pound incurs no surcharge.
#[must_use]
pub fn shipping_cost(service_type: ServiceType, weight: f64) -> f64 {
    let extra_pounds = (weight - 1.0).max(0.0);
    base_rate(service_type) + extra_pounds * SURCHARGE_PER_EXTRA_POUND
}

/// Quote all three service tiers for a given weight.
#[must_use]
pub fn quote_rates(weight: f64) -> Vec<ShippingRate> {
    ServiceType::ALL
        .into_iter()
        .map(|service_type| ShippingRate {
            service_type,
            cost: shipping_cost(service_type, weight),
            estimated_days: delivery_days(service_type),
            description: tier_description(service_type).to_string(),
        })
        .collect()
}
