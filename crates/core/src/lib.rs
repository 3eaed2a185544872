//! PostShip Core - Shared types library.
//!
//! This crate provides common types used across all PostShip components:
//! - `api` - The HTTP API server
//! - `integration-tests` - End-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types and validation rules - no I/O, no
//! storage, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Domain types: shipments, addresses, tracking events,
//!   payment intents, and the enums that constrain them
//! - [`api`] - Request/response payloads for the HTTP surface

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod types;

pub use types::*;
