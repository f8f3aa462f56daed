// Integration tests for POST /api/confirm-payment

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::{json, Value};
use std::sync::Arc;

#[actix_web::test]
async fn test_succeeded_intent_returns_full_object() {
    let gateway = Arc::new(MockGateway::with_status("succeeded"));
    let srv = spawn_test_server(gateway.clone(), None);

    let mut response = srv
        .post("/api/confirm-payment")
        .send_json(&json!({ "payment_intent_id": "pi_3Pabc" }))
        .await
        .expect("request sent");

    assert_ok(&response);
    let body: Value = response.json().await.unwrap();

    assert_eq!(body["success"], true);
    assert_eq!(body["payment_intent"]["id"], "pi_3Pabc");
    assert_eq!(body["payment_intent"]["status"], "succeeded");
    // Provider fields the relay does not model are passed through
    assert_eq!(body["payment_intent"]["automatic_payment_methods"]["enabled"], true);
    assert!(body.get("status").is_none());

    assert_eq!(gateway.retrieved_calls(), vec!["pi_3Pabc".to_string()]);
}

#[actix_web::test]
async fn test_pending_intent_returns_status_only() {
    for status in ["requires_payment_method", "requires_action", "processing", "canceled"] {
        let gateway = Arc::new(MockGateway::with_status(status));
        let srv = spawn_test_server(gateway, None);

        let mut response = srv
            .post("/api/confirm-payment")
            .send_json(&json!({ "payment_intent_id": "pi_3Pabc" }))
            .await
            .expect("request sent");

        assert_ok(&response);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "success": false, "status": status }));
    }
}

#[actix_web::test]
async fn test_provider_error_returns_500() {
    let gateway = Arc::new(MockGateway::failing("No such payment_intent: 'pi_missing'"));
    let srv = spawn_test_server(gateway, None);

    let mut response = srv
        .post("/api/confirm-payment")
        .send_json(&json!({ "payment_intent_id": "pi_missing" }))
        .await
        .expect("request sent");

    assert_server_error(&response);
    let body: Value = response.json().await.unwrap();
    assert_error_message(&body, "No such payment_intent: 'pi_missing'");
}

#[actix_web::test]
async fn test_missing_id_rejected_without_provider_call() {
    let gateway = Arc::new(MockGateway::with_status("succeeded"));
    let srv = spawn_test_server(gateway.clone(), None);

    let response = srv
        .post("/api/confirm-payment")
        .send_json(&json!({}))
        .await
        .expect("request sent");
    assert_bad_request(&response);

    let response = srv
        .post("/api/confirm-payment")
        .send_json(&json!({ "payment_intent_id": "pi_1/../../customers" }))
        .await
        .expect("request sent");
    assert_bad_request(&response);

    assert_eq!(gateway.call_count(), 0);
}
