//! PostShip API library.
//!
//! This crate provides the API server functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod ids;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
