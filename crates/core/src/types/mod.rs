//! Core domain types for PostShip.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;
pub mod package;
pub mod payment;
pub mod shipment;
pub mod status;

pub use address::Address;
pub use id::*;
pub use package::PackageDetails;
pub use payment::PaymentIntent;
pub use shipment::{Shipment, ShippingRate, TrackingEvent};
pub use status::*;
