// Unit tests for HTTP status categorization

use crate::HttpStatusCode;

#[test]
fn given_2xx_status_when_categorized_then_is_success() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());
    assert!(!HttpStatusCode(401).is_success());
}

#[test]
fn given_4xx_status_when_categorized_then_is_client_error() {
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(401).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(!HttpStatusCode(200).is_client_error());
}

#[test]
fn given_5xx_status_when_categorized_then_is_server_error() {
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(400).is_server_error());
}

#[test]
fn given_u16_when_converted_then_wraps_code() {
    let status: HttpStatusCode = 401u16.into();
    assert_eq!(status, HttpStatusCode(401));
    assert_eq!(status.to_string(), "401");
}
