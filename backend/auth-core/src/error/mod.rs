pub mod auth;
pub mod config;
pub mod session;

pub use auth::{AuthError, PasswordRuleFailure};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Auth(#[from] auth::AuthError),

    #[error(transparent)]
    Session(#[from] session::SessionError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
