// Unit tests for input parsing

use crate::input::{Command, parse};

use auth_core::app::UiEvent;
use auth_core::view::View;

#[test]
fn given_login_with_credentials_when_parsed_then_login_submit_event() {
    let command = parse("login trinity Abcdefghi1!").expect("non-blank line");

    match command {
        Command::Event(UiEvent::LoginSubmit { username, password }) => {
            assert_eq!(username, "trinity");
            assert_eq!(password.as_str(), "Abcdefghi1!");
        }
        other => panic!("expected LoginSubmit, got {other:?}"),
    }
}

#[test]
fn given_register_with_credentials_when_parsed_then_register_submit_event() {
    let command = parse("register neo Abcdefghi1!").expect("non-blank line");

    match command {
        Command::Event(UiEvent::RegisterSubmit { username, password }) => {
            assert_eq!(username, "neo");
            assert_eq!(password.as_str(), "Abcdefghi1!");
        }
        other => panic!("expected RegisterSubmit, got {other:?}"),
    }
}

#[test]
fn given_bare_login_when_parsed_then_navigates_to_login_view() {
    let command = parse("login").expect("non-blank line");

    assert!(matches!(
        command,
        Command::Event(UiEvent::Navigate(View::Login))
    ));
}

#[test]
fn given_bare_register_when_parsed_then_navigates_to_register_view() {
    let command = parse("register").expect("non-blank line");

    assert!(matches!(
        command,
        Command::Event(UiEvent::Navigate(View::Register))
    ));
}

#[test]
fn given_login_with_partial_or_extra_args_when_parsed_then_unknown() {
    assert!(matches!(
        parse("login trinity").expect("non-blank"),
        Command::Unknown(_)
    ));
    assert!(matches!(
        parse("login trinity pass extra").expect("non-blank"),
        Command::Unknown(_)
    ));
}

#[test]
fn given_simple_keywords_when_parsed_then_mapped() {
    assert!(matches!(
        parse("logout").expect("non-blank"),
        Command::Event(UiEvent::Logout)
    ));
    assert!(matches!(
        parse("theme").expect("non-blank"),
        Command::Event(UiEvent::ToggleTheme)
    ));
    assert!(matches!(parse("help").expect("non-blank"), Command::Help));
    assert!(matches!(parse("quit").expect("non-blank"), Command::Quit));
    assert!(matches!(parse("exit").expect("non-blank"), Command::Quit));
}

#[test]
fn given_blank_line_when_parsed_then_none() {
    assert!(parse("").is_none());
    assert!(parse("   \t  ").is_none());
}

#[test]
fn given_unknown_keyword_when_parsed_then_unknown_with_keyword() {
    match parse("frobnicate").expect("non-blank") {
        Command::Unknown(keyword) => assert_eq!(keyword, "frobnicate"),
        other => panic!("expected Unknown, got {other:?}"),
    }
}

/// **VALUE**: Verifies a submitted password cannot leak through Debug.
///
/// **WHY THIS MATTERS**: Parsed commands get debug-formatted in logs when
/// troubleshooting input handling. The wrapped password must stay redacted.
#[test]
fn given_parsed_login_when_debug_formatted_then_password_redacted() {
    let command = parse("login trinity Sup3rSecret!").expect("non-blank line");

    let debug = format!("{command:?}");

    assert!(!debug.contains("Sup3rSecret"), "password leaked: {debug}");
    assert!(debug.contains("trinity"), "username is not a secret");
}
