//! View state for the single-window UI.
//!
//! Exactly one view is active at a time and switching views always clears
//! the transient status message. There is no guarded transition graph: any
//! view is reachable from any other.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

/// The mutually-exclusive top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Welcome,
    Login,
    Register,
    /// Authenticated home.
    Hacker,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Welcome => "welcome",
            View::Login => "login",
            View::Register => "register",
            View::Hacker => "hacker",
        }
    }
}

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient feedback shown under the active view.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Tracks the active view and the transient status message.
#[derive(Debug)]
pub struct ViewController {
    active: View,
    message: Option<StatusMessage>,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            active: View::Welcome,
            message: None,
        }
    }

    /// Make `view` the single active view and clear any status message.
    ///
    /// Idempotent: showing the already-active view keeps it active and
    /// still clears the message.
    pub fn show(&mut self, view: View) {
        if self.active != view {
            debug!("View change: {} -> {}", self.active.name(), view.name());
        }
        self.active = view;
        self.message = None;
    }

    /// Replace the status message without changing the active view.
    pub fn notify(&mut self, text: impl Into<String>, severity: Severity) {
        self.message = Some(StatusMessage {
            text: text.into(),
            severity,
        });
    }

    /// Reset the status message to none.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn active(&self) -> View {
        self.active
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

/// Loading indicator toggled across network calls.
///
/// [`Loader::begin`] returns a guard; the indicator is released when the
/// guard drops, so every exit path (including errors) hides it.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    active: Arc<AtomicBool>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoaderGuard {
        self.active.store(true, Ordering::SeqCst);
        LoaderGuard {
            active: Arc::clone(&self.active),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Releases the loading indicator on drop.
#[must_use = "the indicator is released as soon as the guard drops"]
pub struct LoaderGuard {
    active: Arc<AtomicBool>,
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}
