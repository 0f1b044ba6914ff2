use auth_core::app::{App, Theme, UiEvent};
use auth_core::config::AppConfig;
use auth_core::session::{MemorySessionStore, SessionStore, SessionToken};
use auth_core::view::{Severity, View};

use common::RedactedSecret;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// End-to-end flows through the App context with an in-memory session store
// and a mocked remote API
// ============================================================================

/// Config pointing at the mock server, with redirect delays short enough
/// for tests.
fn test_config(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.base_url = base_url.to_string();
    config.timing.login_redirect_ms = 5;
    config.timing.register_redirect_ms = 5;
    config
}

fn login_event(username: &str, password: &str) -> UiEvent {
    UiEvent::LoginSubmit {
        username: username.to_string(),
        password: RedactedSecret::new(password),
    }
}

fn register_event(username: &str, password: &str) -> UiEvent {
    UiEvent::RegisterSubmit {
        username: username.to_string(),
        password: RedactedSecret::new(password),
    }
}

#[tokio::test]
async fn given_no_session_when_bootstrap_then_welcome_view() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app = App::new(test_config("http://127.0.0.1:9"), store).expect("app should build");

    app.bootstrap();

    assert_eq!(app.views().active(), View::Welcome);
    assert!(app.views().message().is_none());
}

#[tokio::test]
async fn given_saved_session_when_bootstrap_then_authenticated_view() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&SessionToken::new("tok123")).unwrap();
    let mut app =
        App::new(test_config("http://127.0.0.1:9"), store).expect("app should build");

    app.bootstrap();

    assert_eq!(app.views().active(), View::Hacker);
}

#[tokio::test]
async fn given_successful_login_when_handled_then_token_saved_and_home_shown() {
    // GIVEN: An API issuing a token for the credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok123" })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let mut app =
        App::new(test_config(&server.uri()), store.clone()).expect("app should build");
    app.bootstrap();

    // WHEN: The login submit event is handled
    app.handle(login_event("trinity", "Abcdefghi1!")).await;

    // THEN: The token is persisted and the home view is active after the
    // redirect delay, which also cleared the success message
    assert_eq!(app.views().active(), View::Hacker);
    assert!(app.views().message().is_none());
    let saved = store.load().unwrap().expect("token persisted");
    assert_eq!(saved.as_str(), "tok123");
    assert!(!app.loader().is_active());
}

#[tokio::test]
async fn given_rejected_login_when_handled_then_error_message_and_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let mut app =
        App::new(test_config(&server.uri()), store.clone()).expect("app should build");
    app.bootstrap();

    app.handle(login_event("trinity", "wrongWrong1!")).await;

    // The view does not change on failure
    assert_eq!(app.views().active(), View::Welcome);
    let message = app.views().message().expect("error message shown");
    assert_eq!(message.text, "Invalid username or password");
    assert_eq!(message.severity, Severity::Error);
    assert!(store.load().unwrap().is_none(), "no token persisted");
    assert!(!app.loader().is_active(), "loader released after failure");
}

/// **VALUE**: Verifies transport failures surface the same message as
/// rejected credentials.
///
/// **WHY THIS MATTERS**: The collapse is deliberate UI behavior; only the
/// log distinguishes an outage from a typo.
#[tokio::test]
async fn given_unreachable_api_when_login_then_same_invalid_credentials_message() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app = App::new(test_config("http://127.0.0.1:9"), store.clone())
        .expect("app should build");
    app.bootstrap();

    app.handle(login_event("trinity", "Abcdefghi1!")).await;

    let message = app.views().message().expect("error message shown");
    assert_eq!(message.text, "Invalid username or password");
    assert!(store.load().unwrap().is_none());
    assert!(!app.loader().is_active());
}

#[tokio::test]
async fn given_successful_registration_when_handled_then_login_view_shown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let mut app = App::new(test_config(&server.uri()), store).expect("app should build");
    app.bootstrap();

    app.handle(register_event("neo", "Abcdefghi1!")).await;

    assert_eq!(app.views().active(), View::Login);
    assert!(app.views().message().is_none());
    assert!(!app.loader().is_active());
}

#[tokio::test]
async fn given_weak_password_when_register_then_rule_message_shown_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let mut app = App::new(test_config(&server.uri()), store).expect("app should build");
    app.bootstrap();

    app.handle(register_event("neo", "abcdefghij")).await;

    // The view stays put and the message carries the specific rule
    assert_eq!(app.views().active(), View::Welcome);
    let message = app.views().message().expect("rule message shown");
    assert_eq!(
        message.text,
        "Password must contain at least one uppercase letter"
    );
    assert_eq!(message.severity, Severity::Error);
    assert!(!app.loader().is_active());
}

#[tokio::test]
async fn given_server_rejected_registration_when_handled_then_generic_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(400).set_body_string("username already exists"))
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let mut app = App::new(test_config(&server.uri()), store).expect("app should build");
    app.bootstrap();

    app.handle(register_event("neo", "Abcdefghi1!")).await;

    let message = app.views().message().expect("error message shown");
    assert_eq!(message.text, "Registration failed");
    assert_eq!(message.severity, Severity::Error);
}

#[tokio::test]
async fn given_active_session_when_logout_then_store_cleared_and_login_shown() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&SessionToken::new("tok123")).unwrap();
    let mut app = App::new(test_config("http://127.0.0.1:9"), store.clone())
        .expect("app should build");
    app.bootstrap();
    assert_eq!(app.views().active(), View::Hacker);

    app.handle(UiEvent::Logout).await;

    assert_eq!(app.views().active(), View::Login);
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn given_theme_toggle_when_handled_then_theme_flips_and_view_unchanged() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app =
        App::new(test_config("http://127.0.0.1:9"), store).expect("app should build");
    app.bootstrap();
    assert_eq!(app.theme(), Theme::Light);

    app.handle(UiEvent::ToggleTheme).await;
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(app.views().active(), View::Welcome);

    app.handle(UiEvent::ToggleTheme).await;
    assert_eq!(app.theme(), Theme::Light);
}

#[tokio::test]
async fn given_navigate_event_when_handled_then_view_switches() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app =
        App::new(test_config("http://127.0.0.1:9"), store).expect("app should build");
    app.bootstrap();

    app.handle(UiEvent::Navigate(View::Register)).await;

    assert_eq!(app.views().active(), View::Register);
}
