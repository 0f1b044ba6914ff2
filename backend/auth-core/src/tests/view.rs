// Unit tests for the view controller and loading indicator

use crate::view::{Loader, Severity, View, ViewController};

#[test]
fn given_new_controller_when_inspected_then_welcome_active_without_message() {
    let views = ViewController::new();

    assert_eq!(views.active(), View::Welcome);
    assert!(views.message().is_none());
}

#[test]
fn given_active_message_when_view_shown_then_message_cleared() {
    let mut views = ViewController::new();
    views.notify("Login successful", Severity::Success);

    views.show(View::Hacker);

    assert_eq!(views.active(), View::Hacker);
    assert!(views.message().is_none(), "view switch must clear message");
}

/// **VALUE**: Verifies `show` is idempotent.
///
/// **WHY THIS MATTERS**: Re-showing the current view happens on repeated
/// navigation input. It must leave exactly one active view and still clear
/// the transient message, like any other switch.
#[test]
fn given_same_view_when_shown_twice_then_still_active_and_message_cleared() {
    let mut views = ViewController::new();

    views.show(View::Login);
    views.notify("something happened", Severity::Error);
    views.show(View::Login);

    assert_eq!(views.active(), View::Login);
    assert!(views.message().is_none());
}

#[test]
fn given_prior_message_when_notified_then_replaced_and_view_unchanged() {
    let mut views = ViewController::new();
    views.show(View::Login);
    views.notify("first", Severity::Error);

    views.notify("second", Severity::Success);

    let message = views.message().expect("message should be set");
    assert_eq!(message.text, "second");
    assert_eq!(message.severity, Severity::Success);
    assert_eq!(views.active(), View::Login);
}

#[test]
fn given_message_when_cleared_then_none() {
    let mut views = ViewController::new();
    views.notify("gone soon", Severity::Success);

    views.clear_message();

    assert!(views.message().is_none());
}

#[test]
fn given_any_view_when_shown_then_reachable_from_any_other() {
    // No guarded transition graph: every pair of views is a legal switch.
    let all = [View::Welcome, View::Login, View::Register, View::Hacker];
    let mut views = ViewController::new();

    for from in all {
        for to in all {
            views.show(from);
            views.show(to);
            assert_eq!(views.active(), to);
        }
    }
}

#[test]
fn given_loader_guard_when_held_then_indicator_active() {
    let loader = Loader::new();
    assert!(!loader.is_active());

    let guard = loader.begin();

    assert!(loader.is_active());
    drop(guard);
    assert!(!loader.is_active(), "drop must release the indicator");
}

#[test]
fn given_early_return_path_when_guard_dropped_then_indicator_released() {
    let loader = Loader::new();

    fn fallible(loader: &Loader) -> Result<(), ()> {
        let _guard = loader.begin();
        Err(())
    }

    let _ = fallible(&loader);

    assert!(!loader.is_active(), "error path must release the indicator");
}
