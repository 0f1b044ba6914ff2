//! Application wiring: typed UI events dispatched against the auth client,
//! session store, and view controller.
//!
//! Events are handled one at a time and each network call is the single
//! suspend point in a flow. The loading indicator is scoped to the call via
//! a guard, so it is released on every exit path including failures.

use crate::api::AuthClient;
use crate::config::AppConfig;
use crate::error::CoreError;
use crate::error::auth::AuthError;
use crate::session::SessionStore;
use crate::view::{Loader, Severity, View, ViewController};

use common::RedactedSecret;

use std::sync::Arc;

use log::{info, warn};

/// Status text shown after a successful login.
const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Status text shown for any failed login, regardless of the failure kind.
const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";

/// Status text shown after a successful registration.
const REGISTER_SUCCESS_MESSAGE: &str = "User registered successfully";

/// Status text shown for a registration the server rejected.
const REGISTER_FAILED_MESSAGE: &str = "Registration failed";

/// UI triggers, one per user action.
///
/// The frontend turns raw input into these; the app decides what happens.
/// Credentials are read once per submit and never persisted or logged.
#[derive(Debug)]
pub enum UiEvent {
    LoginSubmit {
        username: String,
        password: RedactedSecret,
    },
    RegisterSubmit {
        username: String,
        password: RedactedSecret,
    },
    Navigate(View),
    Logout,
    ToggleTheme,
}

/// Cosmetic display mode; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Application context owning the UI state and the injected collaborators.
pub struct App {
    views: ViewController,
    loader: Loader,
    session: Arc<dyn SessionStore>,
    client: AuthClient,
    config: AppConfig,
    theme: Theme,
}

impl App {
    /// Build the app from its configuration and an injected session store.
    pub fn new(config: AppConfig, session: Arc<dyn SessionStore>) -> Result<Self, CoreError> {
        let client = AuthClient::new(&config.api.base_url)?;

        Ok(Self {
            views: ViewController::new(),
            loader: Loader::new(),
            session,
            client,
            config,
            theme: Theme::Light,
        })
    }

    /// Restore session state and pick the initial view.
    pub fn bootstrap(&mut self) {
        match self.session.load() {
            Ok(Some(token)) => {
                info!(
                    "Existing session found ({} chars), opening home view",
                    token.len()
                );
                self.views.show(View::Hacker);
            }
            Ok(None) => {
                self.views.show(View::Welcome);
            }
            Err(e) => {
                warn!("Session restore failed, starting signed out: {e}");
                self.views.show(View::Welcome);
            }
        }
    }

    /// Dispatch a single UI event to completion.
    pub async fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::LoginSubmit { username, password } => {
                self.login(&username, &password).await;
            }
            UiEvent::RegisterSubmit { username, password } => {
                self.register(&username, &password).await;
            }
            UiEvent::Navigate(view) => self.views.show(view),
            UiEvent::Logout => self.logout(),
            UiEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
            }
        }
    }

    async fn login(&mut self, username: &str, password: &RedactedSecret) {
        let _loading = self.loader.begin();

        match self.client.login(username, password).await {
            Ok(token) => {
                if let Err(e) = self.session.save(&token) {
                    warn!("Failed to persist session token: {e}");
                }
                self.views.notify(LOGIN_SUCCESS_MESSAGE, Severity::Success);

                // Let the success message show before the view switch clears it.
                tokio::time::sleep(self.config.login_redirect_delay()).await;
                self.views.show(View::Hacker);
            }
            Err(e) => {
                // Rejected credentials and transport failures collapse into
                // the same user-facing message; the kind only reaches the log.
                warn!("Login failed ({}): {e}", e.error_category());
                self.views.notify(LOGIN_FAILED_MESSAGE, Severity::Error);
            }
        }
    }

    async fn register(&mut self, username: &str, password: &RedactedSecret) {
        let _loading = self.loader.begin();

        match self.client.register(username, password).await {
            Ok(()) => {
                self.views
                    .notify(REGISTER_SUCCESS_MESSAGE, Severity::Success);

                tokio::time::sleep(self.config.register_redirect_delay()).await;
                self.views.show(View::Login);
            }
            Err(AuthError::WeakPassword { reason, .. }) => {
                self.views.notify(reason.to_string(), Severity::Error);
            }
            Err(e) => {
                warn!("Registration failed ({}): {e}", e.error_category());
                self.views.notify(REGISTER_FAILED_MESSAGE, Severity::Error);
            }
        }
    }

    fn logout(&mut self) {
        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session token: {e}");
        }
        self.views.show(View::Login);
    }

    pub fn views(&self) -> &ViewController {
        &self.views
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
