//! Business services used by the route handlers.

pub mod barcode;
pub mod payments;
pub mod rates;
