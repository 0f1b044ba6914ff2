use auth_core::api::AuthClient;
use auth_core::error::auth::AuthError;

use common::RedactedSecret;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public API tests for the auth client
// These drive the PUBLIC interface against a mocked remote API
// ============================================================================

#[tokio::test]
async fn given_valid_credentials_when_login_then_returns_token() {
    // GIVEN: An API that accepts the credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({
            "username": "trinity",
            "password": "Abcdefghi1!"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).expect("client should build");

    // WHEN: Logging in
    let token = client
        .login("trinity", &RedactedSecret::new("Abcdefghi1!"))
        .await
        .expect("login should succeed");

    // THEN: The token from the response body is returned
    assert_eq!(token.as_str(), "tok123");
}

#[tokio::test]
async fn given_rejected_credentials_when_login_then_reports_rejected_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).expect("client should build");

    let result = client
        .login("trinity", &RedactedSecret::new("wrongWrong1!"))
        .await;

    match result {
        Err(AuthError::Rejected { status_code, .. }) => assert_eq!(status_code.0, 401),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// **VALUE**: Verifies transport failures stay distinguishable from
/// rejections.
///
/// **WHY THIS MATTERS**: The UI collapses both into one message, but the
/// log needs the real category to make outages diagnosable.
#[tokio::test]
async fn given_unreachable_server_when_login_then_reports_connection_error() {
    // GIVEN: Nothing listens on the discard port
    let client = AuthClient::new("http://127.0.0.1:9").expect("client should build");

    // WHEN: Logging in
    let result = client
        .login("trinity", &RedactedSecret::new("Abcdefghi1!"))
        .await;

    // THEN: The failure is categorized as a connection error
    match result {
        Err(AuthError::Network { is_connection, .. }) => assert!(is_connection),
        other => panic!("expected Network, got {other:?}"),
    }
}

#[tokio::test]
async fn given_malformed_success_body_when_login_then_reports_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).expect("client should build");

    let result = client
        .login("trinity", &RedactedSecret::new("Abcdefghi1!"))
        .await;

    assert!(matches!(result, Err(AuthError::InvalidResponse { .. })));
}

/// **VALUE**: Verifies a weak password never leaves the process.
///
/// **WHY THIS MATTERS**: The policy exists to fail fast; a request carrying
/// a known-weak password would waste a round trip and leak the rejection
/// decision to the server.
///
/// **BUG THIS CATCHES**: Would catch the policy check moving after the POST.
#[tokio::test]
async fn given_weak_password_when_register_then_no_request_sent() {
    // GIVEN: A register endpoint that must never be called
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).expect("client should build");

    // WHEN: Registering with a password that fails the first rule
    let result = client.register("neo", &RedactedSecret::new("abc")).await;

    // THEN: The failure is local and carries the rule's wording
    match result {
        Err(AuthError::WeakPassword { reason, .. }) => {
            assert_eq!(
                reason.to_string(),
                "Password must be at least 10 characters long"
            );
        }
        other => panic!("expected WeakPassword, got {other:?}"),
    }
    // expect(0) is verified when the mock server drops
}

#[tokio::test]
async fn given_acceptable_password_when_register_then_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "neo",
            "password": "Abcdefghi1!"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).expect("client should build");

    let result = client
        .register("neo", &RedactedSecret::new("Abcdefghi1!"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_server_rejection_when_register_then_reports_registration_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(400).set_body_string("username already exists"))
        .mount(&server)
        .await;

    let client = AuthClient::new(&server.uri()).expect("client should build");

    let result = client
        .register("neo", &RedactedSecret::new("Abcdefghi1!"))
        .await;

    match result {
        Err(AuthError::RegistrationFailed {
            status_code,
            message,
            ..
        }) => {
            assert_eq!(status_code.0, 400);
            assert!(message.contains("already exists"));
        }
        other => panic!("expected RegistrationFailed, got {other:?}"),
    }
}
