//! HTTP middleware for the API.

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
