//! End-to-end tests for the shipment endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use postship_core::{ShipmentStatus, api::CreateShipmentResponse};
use serde_json::{Value, json};

use postship_integration_tests::{get_json, post_json, send, test_app};

fn create_body() -> Value {
    json!({
        "sender": {
            "name": "Jane Doe",
            "address": "123 Main St",
            "city": "Boston",
            "state": "MA",
            "zipCode": "02101"
        },
        "recipient": {
            "name": "John Smith",
            "address": "456 Oak Ave",
            "city": "New York",
            "zipCode": "10001"
        },
        "package": {
            "type": "small-box",
            "weight": 2.5,
            "dimensions": "8x6x4",
            "description": "Books",
            "declaredValue": 50
        },
        "serviceType": "express"
    })
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn test_health_and_ping() {
    let app = test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, body) = get_json(&app, "/api/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "PostShip API is running!");
}

#[tokio::test]
async fn test_create_shipment_prices_and_registers() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/shipments", &create_body()).await;
    assert_eq!(status, StatusCode::OK);

    let shipment = &body["shipment"];
    assert_eq!(shipment["status"], "processing");
    assert_eq!(shipment["serviceType"], "express");

    // express base 15.99 + 2.00 * 1.5 extra pounds
    let shipping_cost = shipment["shippingCost"].as_f64().expect("shippingCost");
    assert_close(shipping_cost, 18.99);
    // no insurance requested: total equals shipping, no insuranceCost field
    let total_cost = shipment["totalCost"].as_f64().expect("totalCost");
    assert_close(total_cost, shipping_cost);
    assert!(shipment.get("insuranceCost").is_none());

    let tracking_number = shipment["trackingNumber"].as_str().expect("trackingNumber");
    assert!(tracking_number.starts_with("PS"));
    assert!(
        tracking_number
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );

    assert!(shipment["estimatedDelivery"].is_string());
    assert!(
        body["barcode"]
            .as_str()
            .expect("barcode")
            .starts_with("data:image/svg+xml;base64,")
    );
    let shipment_id = shipment["id"].as_str().expect("id");
    assert_eq!(
        body["paymentUrl"],
        format!("/api/payment/create?shipmentId={shipment_id}")
    );

    // the wire shape must round-trip through the typed response DTO
    let typed: CreateShipmentResponse =
        serde_json::from_value(body.clone()).expect("typed response");
    assert_eq!(typed.shipment.status, ShipmentStatus::Processing);
    assert_eq!(typed.shipment.id.as_str(), shipment_id);
}

#[tokio::test]
async fn test_create_shipment_with_insurance_adds_flat_fee() {
    let app = test_app();
    let mut body = create_body();
    body["insurance"] = json!(true);

    let (status, body) = post_json(&app, "/api/shipments", &body).await;
    assert_eq!(status, StatusCode::OK);

    let shipment = &body["shipment"];
    let shipping_cost = shipment["shippingCost"].as_f64().expect("shippingCost");
    let insurance_cost = shipment["insuranceCost"].as_f64().expect("insuranceCost");
    let total_cost = shipment["totalCost"].as_f64().expect("totalCost");

    assert_close(insurance_cost, 2.50);
    assert_close(total_cost, shipping_cost + insurance_cost);
}

#[tokio::test]
async fn test_create_shipment_validation_failure_lists_fields() {
    let app = test_app();
    let mut body = create_body();
    body["sender"]["zipCode"] = json!("021");
    body["package"]["weight"] = json!(-2.0);

    let (status, body) = post_json(&app, "/api/shipments", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");

    let details = body["details"].as_array().expect("details array");
    assert!(details.len() >= 2);
    let fields: Vec<&str> = details
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"sender.zip_code"));
    assert!(fields.contains(&"package.weight"));
}

#[tokio::test]
async fn test_create_shipment_unknown_package_type_rejected() {
    let app = test_app();
    let mut body = create_body();
    body["package"]["type"] = json!("pallet");

    let (status, _) = post_json(&app, "/api/shipments", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_shipment_malformed_body_rejected() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/shipments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_track_round_trip_after_create() {
    let app = test_app();
    let (_, created) = post_json(&app, "/api/shipments", &create_body()).await;
    let tracking_number = created["shipment"]["trackingNumber"]
        .as_str()
        .expect("trackingNumber");

    let (status, tracked) =
        get_json(&app, &format!("/api/shipments/track/{tracking_number}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tracked["shipment"]["id"], created["shipment"]["id"]);
    assert!(tracked["estimatedDelivery"].is_string());

    let events = tracked["trackingEvents"].as_array().expect("events");
    assert!(!events.is_empty());

    // Most-recent-first: the first event's timestamp is >= all others.
    // RFC 3339 timestamps with identical structure compare lexicographically.
    let timestamps: Vec<&str> = events
        .iter()
        .map(|e| e["timestamp"].as_str().expect("timestamp"))
        .collect();
    let first = timestamps.first().expect("non-empty");
    assert!(timestamps.iter().all(|t| t <= first));
}

#[tokio::test]
async fn test_track_unknown_number_not_found() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/shipments/track/PSDOESNOTEX").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shipment not found");
}

#[tokio::test]
async fn test_list_returns_all_created_shipments() {
    let app = test_app();
    let (_, first) = post_json(&app, "/api/shipments", &create_body()).await;
    let (_, second) = post_json(&app, "/api/shipments", &create_body()).await;

    let (status, body) = get_json(&app, "/api/shipments").await;
    assert_eq!(status, StatusCode::OK);

    let shipments = body["shipments"].as_array().expect("shipments");
    assert_eq!(shipments.len(), 2);

    assert_ne!(first["shipment"]["id"], second["shipment"]["id"]);
    assert_ne!(
        first["shipment"]["trackingNumber"],
        second["shipment"]["trackingNumber"]
    );
}

#[tokio::test]
async fn test_rates_quote_all_tiers() {
    let app = test_app();
    let uri = "/api/shipments/rates?senderZip=02101&recipientZip=10001&packageType=small-box&weight=2.5&dimensions=8x6x4&declaredValue=50";
    let (status, body) = get_json(&app, uri).await;
    assert_eq!(status, StatusCode::OK);

    let rates = body["rates"].as_array().expect("rates");
    assert_eq!(rates.len(), 3);

    let expectations = [("standard", 11.50, 5), ("express", 18.99, 2), ("overnight", 27.99, 1)];
    for (rate, (service_type, cost, days)) in rates.iter().zip(expectations) {
        assert_eq!(rate["serviceType"], service_type);
        assert_close(rate["cost"].as_f64().expect("cost"), cost);
        assert_eq!(rate["estimatedDays"], days);
        assert!(rate["description"].is_string());
    }
}

#[tokio::test]
async fn test_rates_short_zip_rejected() {
    let app = test_app();
    let uri = "/api/shipments/rates?senderZip=021&recipientZip=10001&packageType=small-box&weight=2.5&dimensions=8x6x4&declaredValue=50";
    let (status, body) = get_json(&app, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");

    let details = body["details"].as_array().expect("details");
    assert!(details.iter().any(|d| d["field"] == "sender_zip"));
}

#[tokio::test]
async fn test_rates_non_numeric_weight_rejected() {
    let app = test_app();
    let uri = "/api/shipments/rates?senderZip=02101&recipientZip=10001&packageType=small-box&weight=heavy&dimensions=8x6x4&declaredValue=50";
    let (status, body) = get_json(&app, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let details = body["details"].as_array().expect("details");
    assert!(details.iter().any(|d| d["field"] == "weight"));
}

#[tokio::test]
async fn test_rates_missing_parameter_rejected() {
    let app = test_app();
    let uri = "/api/shipments/rates?senderZip=02101&recipientZip=10001";
    let (status, _) = get_json(&app, uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
