use hackerden::input::{self, Command};
use hackerden::render;

use auth_core::app::{App, UiEvent};
use auth_core::config::AppConfig;
use auth_core::session::{MemorySessionStore, SessionStore, SessionToken};

use std::sync::Arc;

// ============================================================================
// Frontend flows that need no network: parse a command line, dispatch it,
// and render the resulting frame
// ============================================================================

/// An app whose API is never contacted in these tests.
fn offline_app(store: Arc<MemorySessionStore>) -> App {
    let mut config = AppConfig::default();
    config.api.base_url = String::from("http://127.0.0.1:9");
    App::new(config, store).expect("app should build")
}

async fn dispatch(app: &mut App, line: &str) {
    match input::parse(line).expect("command line") {
        Command::Event(event) => app.handle(event).await,
        other => panic!("expected an event command, got {other:?}"),
    }
}

#[tokio::test]
async fn given_saved_session_when_bootstrapped_then_frame_shows_home() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&SessionToken::new("tok123")).unwrap();
    let mut app = offline_app(store);

    app.bootstrap();

    assert!(render::frame(&app).contains("ACCESS GRANTED"));
}

#[tokio::test]
async fn given_logout_line_when_dispatched_then_frame_shows_login_and_store_empty() {
    let store = Arc::new(MemorySessionStore::new());
    store.save(&SessionToken::new("tok123")).unwrap();
    let mut app = offline_app(store.clone());
    app.bootstrap();

    dispatch(&mut app, "logout").await;

    assert!(render::frame(&app).contains("LOGIN"));
    assert!(store.load().unwrap().is_none());
}

#[tokio::test]
async fn given_theme_line_when_dispatched_then_frame_style_changes() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app = offline_app(store);
    app.bootstrap();
    let light_frame = render::frame(&app);

    dispatch(&mut app, "theme").await;
    let dark_frame = render::frame(&app);

    assert_ne!(light_frame, dark_frame);
    assert!(light_frame.contains("----"));
    assert!(dark_frame.contains("===="));
}

#[tokio::test]
async fn given_weak_register_line_when_dispatched_then_frame_shows_rule_message() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app = offline_app(store);
    app.bootstrap();

    // Weak password fails locally, so no server is needed
    dispatch(&mut app, "register neo abc").await;

    let frame = render::frame(&app);
    assert!(frame.contains("[error] Password must be at least 10 characters long"));
}

#[tokio::test]
async fn given_navigation_lines_when_dispatched_then_views_switch() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app = offline_app(store);
    app.bootstrap();
    assert!(render::frame(&app).contains("WELCOME"));

    dispatch(&mut app, "register").await;
    assert!(render::frame(&app).contains("REGISTER"));

    dispatch(&mut app, "login").await;
    assert!(render::frame(&app).contains("LOGIN"));
}

#[tokio::test]
async fn given_quit_and_help_lines_when_parsed_then_not_events() {
    assert!(matches!(input::parse("quit"), Some(Command::Quit)));
    assert!(matches!(input::parse("help"), Some(Command::Help)));

    // They never reach the app; there is no UiEvent for them
    if let Some(Command::Event(event)) = input::parse("quit") {
        panic!("quit must not become an event: {event:?}");
    }
}

#[tokio::test]
async fn given_login_view_frame_when_rendered_then_prompts_for_credentials() {
    let store = Arc::new(MemorySessionStore::new());
    let mut app = offline_app(store);
    app.bootstrap();
    app.handle(UiEvent::Navigate(auth_core::view::View::Login))
        .await;

    let frame = render::frame(&app);

    assert!(frame.contains("login <username> <password>"));
}
