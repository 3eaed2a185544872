//! End-to-end tests for the simulated payment endpoints.

use axum::http::StatusCode;
use serde_json::json;

use postship_integration_tests::{get_json, post_json, test_app};

#[tokio::test]
async fn test_create_intent_returns_mock_amount() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/payment/create?shipmentId=abc123xyz").await;
    assert_eq!(status, StatusCode::OK);

    let intent = &body["paymentIntent"];
    assert_eq!(intent["amount"], 1149);
    assert_eq!(intent["currency"], "usd");
    assert_eq!(intent["status"], "requires_payment_method");

    let id = intent["id"].as_str().expect("id");
    assert!(id.starts_with("pi_"));
    let client_secret = intent["clientSecret"].as_str().expect("clientSecret");
    assert!(client_secret.starts_with(&format!("{id}_secret_")));

    assert_eq!(body["publishableKey"], "pk_test_mock_key");
}

#[tokio::test]
async fn test_create_intent_requires_shipment_id() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/payment/create").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Shipment ID is required");

    let (status, _) = get_json(&app, "/api/payment/create?shipmentId=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_process_payment_always_succeeds() {
    let app = test_app();
    let request = json!({
        "shipmentId": "abc123xyz",
        "paymentMethodId": "pm_card_visa",
        "amount": 1849
    });

    let (status, body) = post_json(&app, "/api/payment/process", &request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["paymentIntent"]["status"], "succeeded");
    assert_eq!(body["paymentIntent"]["amount"], 1849);

    // The shipment in the response is a fabricated snapshot, decoupled from
    // the real shipment store.
    assert_eq!(body["shipment"]["id"], "abc123xyz");
    assert_eq!(body["shipment"]["trackingNumber"], "PS123456789");
    assert_eq!(body["shipment"]["status"], "processing");
}

#[tokio::test]
async fn test_process_payment_rejects_malformed_body() {
    let app = test_app();
    // amount missing
    let request = json!({
        "shipmentId": "abc123xyz",
        "paymentMethodId": "pm_card_visa"
    });

    let (status, _) = post_json(&app, "/api/payment/process", &request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_intent_status_round_trip() {
    let app = test_app();
    let (_, created) = get_json(&app, "/api/payment/create?shipmentId=abc123xyz").await;
    let id = created["paymentIntent"]["id"].as_str().expect("id");

    let (status, body) = get_json(&app, &format!("/api/payment/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paymentIntent"]["id"], id);
    assert_eq!(body["paymentIntent"]["status"], "requires_payment_method");
}

#[tokio::test]
async fn test_unknown_intent_not_found() {
    let app = test_app();
    let (status, body) = get_json(&app, "/api/payment/pi_doesnotexist9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Payment intent not found");
}

#[tokio::test]
async fn test_processing_never_mutates_real_shipments() {
    let app = test_app();

    // Pay against a shipment id that was never registered...
    let request = json!({
        "shipmentId": "ghost0000",
        "paymentMethodId": "pm_card_visa",
        "amount": 500
    });
    let (status, _) = post_json(&app, "/api/payment/process", &request).await;
    assert_eq!(status, StatusCode::OK);

    // ...and the shipment store is still empty.
    let (_, body) = get_json(&app, "/api/shipments").await;
    assert_eq!(body["shipments"].as_array().expect("shipments").len(), 0);
}
