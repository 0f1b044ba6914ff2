//! Parses terminal input lines into UI events.
//!
//! Replaces the original form handlers: each line is one command.
//! Credentials are read once per submit and wrapped immediately so they
//! never echo into logs.

use auth_core::app::UiEvent;
use auth_core::view::View;

use common::RedactedSecret;

/// One parsed line of terminal input.
#[derive(Debug)]
pub enum Command {
    /// A UI event to dispatch to the app.
    Event(UiEvent),
    /// Print the command list.
    Help,
    /// Leave the application.
    Quit,
    /// Anything unrecognized or malformed; the frontend prints help.
    Unknown(String),
}

/// Usage text for the interactive commands.
pub const HELP_TEXT: &str = "\
commands:
  login [<username> <password>]     open the login view, or sign in
  register [<username> <password>]  open the register view, or sign up
  logout                            sign out
  theme                             toggle light/dark mode
  help                              show this list
  quit                              exit";

/// Parse one input line.
///
/// Returns `None` for blank lines.
pub fn parse(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?;

    let command = match keyword {
        "login" | "register" => parse_credentials(keyword, parts),
        "logout" => Command::Event(UiEvent::Logout),
        "theme" => Command::Event(UiEvent::ToggleTheme),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };

    Some(command)
}

/// `login`/`register` without arguments navigates to that view; with a
/// username and password it submits.
fn parse_credentials<'a>(keyword: &str, mut parts: impl Iterator<Item = &'a str>) -> Command {
    let username = parts.next();
    let password = parts.next();
    let extra = parts.next();

    match (username, password, extra) {
        (None, None, _) => {
            let view = if keyword == "login" {
                View::Login
            } else {
                View::Register
            };
            Command::Event(UiEvent::Navigate(view))
        }
        (Some(username), Some(password), None) => {
            let username = username.to_string();
            let password = RedactedSecret::new(password);
            if keyword == "login" {
                Command::Event(UiEvent::LoginSubmit { username, password })
            } else {
                Command::Event(UiEvent::RegisterSubmit { username, password })
            }
        }
        _ => Command::Unknown(keyword.to_string()),
    }
}
