//! Payment route handlers backed by the mock payment simulator.
//!
//! Processing a payment never reads or mutates the shipment store; see
//! [`crate::services::payments`] for the boundary rationale.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::Deserialize;

use postship_core::PaymentIntentId;
use postship_core::api::{
    CreatePaymentIntentResponse, PaymentStatusResponse, ProcessPaymentRequest,
    ProcessPaymentResponse,
};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query string for `GET /api/payment/create`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentQuery {
    #[serde(default)]
    pub shipment_id: Option<String>,
}

/// Create a payment intent for a shipment.
///
/// GET /api/payment/create?shipmentId=...
///
/// The shipment is referenced but not consulted: the intent always carries
/// the fixed mock amount.
///
/// # Errors
///
/// 400 if `shipmentId` is missing or empty.
pub async fn create_intent(
    State(state): State<AppState>,
    Query(query): Query<CreateIntentQuery>,
) -> Result<Json<CreatePaymentIntentResponse>> {
    let Some(shipment_id) = query.shipment_id.filter(|id| !id.is_empty()) else {
        return Err(AppError::BadRequest("Shipment ID is required".to_string()));
    };

    let payment_intent = state.payments().create_intent()?;
    tracing::info!(
        %shipment_id,
        intent_id = %payment_intent.id,
        "mock payment intent created"
    );

    Ok(Json(CreatePaymentIntentResponse {
        payment_intent,
        publishable_key: state.config().publishable_key.clone(),
    }))
}

/// Process a payment. Always succeeds; the returned shipment is a
/// fabricated snapshot.
///
/// POST /api/payment/process
///
/// # Errors
///
/// 400 if the body does not match the request shape.
pub async fn process(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProcessPaymentRequest>, JsonRejection>,
) -> Result<Json<ProcessPaymentResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let (payment_intent, shipment) = state.payments().process_payment(&request)?;
    tracing::info!(
        shipment_id = %request.shipment_id,
        intent_id = %payment_intent.id,
        amount = payment_intent.amount,
        "mock payment processed"
    );

    Ok(Json(ProcessPaymentResponse {
        success: true,
        payment_intent,
        shipment,
    }))
}

/// Look up a previously created payment intent.
///
/// GET /api/payment/{paymentIntentId}
///
/// # Errors
///
/// 404 if no intent with that id exists.
pub async fn status(
    State(state): State<AppState>,
    Path(payment_intent_id): Path<String>,
) -> Result<Json<PaymentStatusResponse>> {
    let id = PaymentIntentId::from(payment_intent_id);

    let payment_intent = state
        .payments()
        .status(&id)?
        .ok_or_else(|| AppError::NotFound("Payment intent not found".to_string()))?;

    Ok(Json(PaymentStatusResponse { payment_intent }))
}
