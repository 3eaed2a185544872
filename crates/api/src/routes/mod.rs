//! HTTP route handlers for the PostShip API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                 - Liveness check
//! GET  /api/ping                               - API liveness with message
//!
//! # Shipments
//! POST /api/shipments                          - Register a shipment
//! GET  /api/shipments                          - List all shipments
//! GET  /api/shipments/track/{trackingNumber}   - Track by tracking number
//! GET  /api/shipments/rates                    - Quote all service tiers
//!
//! # Payment (simulated)
//! GET  /api/payment/create?shipmentId=...      - Create a payment intent
//! POST /api/payment/process                    - Process a payment
//! GET  /api/payment/{paymentIntentId}          - Payment intent status
//! ```
//!
//! Paths match what the registration front end calls; renaming any of them
//! breaks that client.

pub mod payment;
pub mod shipments;

use axum::{
    Json, Router,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use postship_core::api::PingResponse;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the shipment routes router.
pub fn shipment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shipments::create).get(shipments::list))
        .route("/rates", get(shipments::quote))
        .route("/track/{tracking_number}", get(shipments::track))
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/create", get(payment::create_intent))
        .route("/process", post(payment::process))
        .route("/{payment_intent_id}", get(payment::status))
}

/// Create all `/api` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .nest("/shipments", shipment_routes())
        .nest("/payment", payment_routes())
}

/// Assemble the full application router with middleware.
///
/// The front end is served from another origin during development, so CORS
/// is wide open.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes())
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// API liveness check with a human-readable message.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "PostShip API is running!".to_string(),
    })
}
