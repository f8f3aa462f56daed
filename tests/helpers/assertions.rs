// Test Assertion Helpers
//
// Common assertions for HTTP responses in integration tests.

use actix_web::http::StatusCode;
use awc::ClientResponse;
use serde_json::Value;

/// Assert HTTP response has the expected status
///
/// # Panics
/// If status code differs, with both codes in the message
pub fn assert_status<S>(response: &ClientResponse<S>, expected: StatusCode) {
    let status = response.status();
    assert_eq!(
        status,
        expected,
        "Expected {} {}, got {} {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert HTTP response is 200 OK
pub fn assert_ok<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::OK);
}

/// Assert HTTP response is 400 Bad Request
pub fn assert_bad_request<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_REQUEST);
}

/// Assert HTTP response is 500 Internal Server Error
pub fn assert_server_error<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR);
}

/// Assert a JSON body is an error envelope carrying `message`
pub fn assert_error_message(body: &Value, message: &str) {
    assert_eq!(
        body,
        &serde_json::json!({ "error": message }),
        "Unexpected error body"
    );
}

/// Assert a JSON body is the webhook acknowledgement
pub fn assert_acknowledged(body: &Value) {
    assert_eq!(body, &serde_json::json!({ "received": true }));
}
