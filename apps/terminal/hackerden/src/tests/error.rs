// Unit tests for the app error type

use crate::error::HackerdenError;

use auth_core::error::CoreError;
use auth_core::error::auth::AuthError;

#[test]
fn given_startup_error_when_displayed_then_carries_message_and_location() {
    let error = HackerdenError::startup("no data directory");

    let text = error.to_string();

    assert!(text.contains("Startup Error"));
    assert!(text.contains("no data directory"));
    assert!(text.contains("error.rs"), "location should name this file");
}

#[test]
fn given_core_error_when_converted_then_core_variant() {
    let core: CoreError = AuthError::rejected(401).into();

    let error: HackerdenError = core.into();

    assert!(matches!(error, HackerdenError::Core { .. }));
    assert!(error.to_string().contains("401"));
}

#[test]
fn given_io_error_when_converted_then_io_variant() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");

    let error: HackerdenError = io.into();

    assert!(matches!(error, HackerdenError::Io { .. }));
    assert!(error.to_string().contains("pipe closed"));
}
