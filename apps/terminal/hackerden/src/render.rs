//! Renders the active view, status message, and loading indicator.
//!
//! The terminal stands in for the original single-window UI: one view at a
//! time, a transient status line underneath, and a cosmetic theme that only
//! changes the frame style.

use auth_core::app::{App, Theme};
use auth_core::view::{Severity, View};

const FRAME_WIDTH: usize = 44;

/// Build the full frame for the current app state.
pub fn frame(app: &App) -> String {
    let mut out = String::new();

    out.push_str(&banner(app.views().active(), app.theme()));
    out.push('\n');
    out.push_str(body(app.views().active()));
    out.push('\n');

    if let Some(message) = app.views().message() {
        let tag = match message.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        out.push_str(&format!("[{tag}] {}\n", message.text));
    }

    if app.loader().is_active() {
        out.push_str("working...\n");
    }

    out
}

fn banner(view: View, theme: Theme) -> String {
    let rule_char = match theme {
        Theme::Light => '-',
        Theme::Dark => '=',
    };
    let rule = rule_char.to_string().repeat(FRAME_WIDTH);
    format!("{rule}\n:: {} ::\n{rule}", title(view))
}

fn title(view: View) -> &'static str {
    match view {
        View::Welcome => "WELCOME",
        View::Login => "LOGIN",
        View::Register => "REGISTER",
        View::Hacker => "ACCESS GRANTED",
    }
}

fn body(view: View) -> &'static str {
    match view {
        View::Welcome => "Sign in with `login` or create an account with `register`.",
        View::Login => "Enter `login <username> <password>` to sign in.",
        View::Register => "Enter `register <username> <password>` to create an account.",
        View::Hacker => "You are in. `logout` ends the session.",
    }
}
