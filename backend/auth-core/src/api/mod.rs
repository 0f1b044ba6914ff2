//! HTTP client for the remote authentication API.

use crate::error::auth::AuthError;
use crate::password::{PasswordPolicy, ValidationResult};
use crate::session::SessionToken;

use common::RedactedSecret;

use std::time::Duration;

use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const LOGIN_ENDPOINT: &str = "login";
const REGISTER_ENDPOINT: &str = "register";

/// Client for the login and registration endpoints.
#[derive(Clone)]
pub struct AuthClient {
    base_url: Url,
    client: Client,
    policy: PasswordPolicy,
}

/// Success body of the login endpoint.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

impl AuthClient {
    /// Build a client for the given API base URL.
    pub fn new(base_url_str: &str) -> Result<Self, AuthError> {
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        let base_url = if base_url_str.ends_with('/') {
            Url::parse(base_url_str)?
        } else {
            Url::parse(&format!("{base_url_str}/"))?
        };

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()
            .map_err(|e| AuthError::from_reqwest(&e))?;

        Ok(Self {
            base_url,
            client,
            policy: PasswordPolicy::default(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchange credentials for a session token.
    ///
    /// Any non-success status becomes [`AuthError::Rejected`]; transport
    /// failures are reported separately. Credentials never reach the log.
    pub async fn login(
        &self,
        username: &str,
        password: &RedactedSecret,
    ) -> Result<SessionToken, AuthError> {
        let url = self.base_url.join(LOGIN_ENDPOINT)?;

        let body = serde_json::json!({
            "username": username,
            "password": password.as_str(),
        });

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Login rejected: HTTP {}", status.as_u16());
            return Err(AuthError::rejected(status.as_u16()));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::from_reqwest(&e))?;

        info!(
            "Login succeeded, received access token ({} chars)",
            body.access_token.len()
        );
        Ok(SessionToken::new(body.access_token))
    }

    /// Create an account.
    ///
    /// The password policy runs first: a weak password fails locally with
    /// [`AuthError::WeakPassword`] and no request is sent.
    pub async fn register(
        &self,
        username: &str,
        password: &RedactedSecret,
    ) -> Result<(), AuthError> {
        if let ValidationResult::Invalid(reason) = self.policy.validate(password.as_str()) {
            return Err(AuthError::weak_password(reason));
        }

        let url = self.base_url.join(REGISTER_ENDPOINT)?;

        let body = serde_json::json!({
            "username": username,
            "password": password.as_str(),
        });

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::registration_failed(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        info!("Registration accepted");
        Ok(())
    }
}
