//! Error types for login and registration.
//!
//! Key design decisions:
//! - HTTP status codes stored directly (not parsed from strings)
//! - Rejected credentials, transport failures, and bad response bodies are
//!   distinct variants; the presentation layer decides what collapses into
//!   one user-facing message
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` for automatic location capture

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

/// Errors that can occur while talking to the authentication API.
#[derive(Debug, ThisError)]
pub enum AuthError {
    /// Login rejected by the server (any non-success status).
    #[error("Login rejected: HTTP {status_code} {location}")]
    Rejected {
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// Registration rejected by the server.
    #[error("Registration failed: HTTP {status_code} - {message} {location}")]
    RegistrationFailed {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// Password failed the local strength policy; no request was sent.
    #[error("Weak password: {reason} {location}")]
    WeakPassword {
        reason: PasswordRuleFailure,
        location: ErrorLocation,
    },

    /// Transport-level failure before any HTTP status was received.
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// Success response whose body could not be parsed.
    #[error("Invalid response body: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed API base URL or endpoint join.
    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

/// Specific reasons a password fails the strength policy.
///
/// `Display` carries the exact wording shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordRuleFailure {
    TooShort { min: usize, actual: usize },
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
    MissingSymbol,
}

impl std::fmt::Display for PasswordRuleFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { min, .. } => {
                write!(f, "Password must be at least {} characters long", min)
            }
            Self::MissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            Self::MissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            Self::MissingDigit => write!(f, "Password must contain at least one number"),
            Self::MissingSymbol => write!(f, "Password must contain at least one symbol"),
        }
    }
}

impl AuthError {
    #[track_caller]
    pub fn rejected(status_code: u16) -> Self {
        AuthError::Rejected {
            status_code: HttpStatusCode(status_code),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn registration_failed(status_code: u16, message: impl Into<String>) -> Self {
        AuthError::RegistrationFailed {
            status_code: HttpStatusCode(status_code),
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn weak_password(reason: PasswordRuleFailure) -> Self {
        AuthError::WeakPassword {
            reason,
            location: ErrorLocation::caller(),
        }
    }

    /// Create from reqwest error with proper categorization.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_decode() {
            return AuthError::InvalidResponse {
                message: error.to_string(),
                location: ErrorLocation::caller(),
            };
        }

        AuthError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::caller(),
        }
    }

    /// Error category for log lines.
    pub fn error_category(&self) -> &'static str {
        match self {
            AuthError::Rejected { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            AuthError::Rejected { .. } => "rejected",
            AuthError::RegistrationFailed { .. } => "registration",
            AuthError::WeakPassword { .. } => "weak_password",
            AuthError::Network { is_timeout: true, .. } => "timeout",
            AuthError::Network { is_connection: true, .. } => "connection",
            AuthError::Network { .. } => "network",
            AuthError::InvalidResponse { .. } => "invalid_response",
            AuthError::UrlParse { .. } => "url_parse",
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AuthError::Rejected { status_code, .. } => Some(status_code.0),
            AuthError::RegistrationFailed { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<url::ParseError> for AuthError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        AuthError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
