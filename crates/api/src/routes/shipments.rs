//! Shipment lifecycle route handlers: create, list, track, and quote.

use axum::{
    Json,
    extract::{Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use chrono::{DateTime, Duration, Utc};
use validator::Validate;

use postship_core::api::{
    CreateShipmentRequest, CreateShipmentResponse, GetRatesResponse, ListShipmentsResponse,
    RatesQuery, TrackShipmentResponse,
};
use postship_core::{Shipment, ShipmentId, ShipmentStatus, TrackingEvent, TrackingNumber};

use crate::error::{AppError, Result};
use crate::ids;
use crate::services::{barcode, rates};
use crate::state::AppState;

/// Flat fee in USD added when insurance is requested.
const INSURANCE_SURCHARGE: f64 = 2.50;

/// Seed history synthesized for every new shipment: status, location,
/// description, and hours before creation time. Oldest first.
const SEED_EVENTS: [(ShipmentStatus, &str, &str, i64); 3] = [
    (
        ShipmentStatus::Processing,
        "Origin Facility",
        "Package received and processing",
        24,
    ),
    (
        ShipmentStatus::Shipped,
        "Origin Distribution Center",
        "Package departed from origin facility",
        18,
    ),
    (
        ShipmentStatus::InTransit,
        "Transit Hub",
        "Package in transit to destination",
        12,
    ),
];

/// Register a new shipment.
///
/// POST /api/shipments
///
/// Validates the payload, prices the shipment, synthesizes its initial
/// tracking history, renders the label stub, and persists everything in
/// one store call. The shipment starts in `processing`, never `draft`.
///
/// # Errors
///
/// 400 with per-field details on validation failure; 500 if the store
/// fails.
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateShipmentRequest>, JsonRejection>,
) -> Result<Json<CreateShipmentResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    request.validate().map_err(AppError::Validation)?;

    let id = ids::shipment_id();
    let tracking_number = ids::tracking_number();
    let now = Utc::now();

    let shipping_cost = rates::shipping_cost(request.service_type, request.package.weight);
    // `signature_required` is accepted but not recorded; the stored record
    // has no field for it.
    let insurance_cost = request
        .insurance
        .unwrap_or(false)
        .then_some(INSURANCE_SURCHARGE);
    let total_cost = shipping_cost + insurance_cost.unwrap_or(0.0);

    let delivery_days = i64::from(rates::delivery_days(request.service_type));
    let barcode = barcode::render_label(&tracking_number);

    let shipment = Shipment {
        id: id.clone(),
        tracking_number,
        status: ShipmentStatus::Processing,
        sender: request.sender,
        recipient: request.recipient,
        package: request.package,
        service_type: request.service_type,
        shipping_cost,
        insurance_cost,
        total_cost,
        created_at: now,
        updated_at: now,
        estimated_delivery: Some(now + Duration::days(delivery_days)),
        actual_delivery: None,
        barcode: Some(barcode.clone()),
        special_instructions: request.special_instructions,
    };

    let events = seed_tracking_events(&id, now);
    state.store().insert(shipment.clone(), events.clone())?;

    tracing::info!(
        shipment_id = %shipment.id,
        tracking_number = %shipment.tracking_number,
        service_type = %shipment.service_type,
        total_cost = shipment.total_cost,
        "shipment registered"
    );

    let payment_url = format!("/api/payment/create?shipmentId={id}");
    Ok(Json(CreateShipmentResponse {
        shipment,
        tracking_events: events,
        payment_url: Some(payment_url),
        barcode,
    }))
}

/// Track a shipment by its public tracking number.
///
/// GET /api/shipments/track/{trackingNumber}
///
/// # Errors
///
/// 404 if no shipment matches the tracking number.
pub async fn track(
    State(state): State<AppState>,
    Path(tracking_number): Path<String>,
) -> Result<Json<TrackShipmentResponse>> {
    let tracking_number = TrackingNumber::from(tracking_number);

    let shipment = state
        .store()
        .get_by_tracking_number(&tracking_number)?
        .ok_or_else(|| AppError::NotFound("Shipment not found".to_string()))?;
    let tracking_events = state.store().events(&shipment.id)?;
    let estimated_delivery = shipment.estimated_delivery;

    Ok(Json(TrackShipmentResponse {
        shipment,
        tracking_events,
        estimated_delivery,
    }))
}

/// List every stored shipment, unfiltered and unpaginated.
///
/// GET /api/shipments
///
/// # Errors
///
/// 500 if the store fails.
pub async fn list(State(state): State<AppState>) -> Result<Json<ListShipmentsResponse>> {
    let shipments = state.store().list_all()?;
    Ok(Json(ListShipmentsResponse { shipments }))
}

/// Quote all three service tiers for a package.
///
/// GET /api/shipments/rates
///
/// Zip codes are validated for shape but play no part in pricing; only the
/// coerced weight feeds the cost calculation.
///
/// # Errors
///
/// 400 with per-field details on validation failure.
pub async fn quote(
    query: std::result::Result<Query<RatesQuery>, QueryRejection>,
) -> Result<Json<GetRatesResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let request = query.into_validated().map_err(AppError::Validation)?;

    Ok(Json(GetRatesResponse {
        rates: rates::quote_rates(request.weight),
    }))
}

/// Synthesize the initial three-event history for a new shipment, with
/// timestamps offset backward from `now`. Returned most-recent-first.
fn seed_tracking_events(shipment_id: &ShipmentId, now: DateTime<Utc>) -> Vec<TrackingEvent> {
    let mut events: Vec<TrackingEvent> = SEED_EVENTS
        .iter()
        .map(|&(status, location, description, hours_ago)| TrackingEvent {
            id: ids::tracking_event_id(),
            shipment_id: shipment_id.clone(),
            status,
            location: location.to_string(),
            description: description.to_string(),
            timestamp: now - Duration::hours(hours_ago),
            facility_name: None,
            next_location: None,
        })
        .collect();
    events.reverse();
    events
}
