use common::ErrorLocation;

use thiserror::Error;

/// Errors that can occur while wiring up and running the terminal frontend.
#[derive(Debug, Error)]
pub enum HackerdenError {
    /// Startup wiring failure (directories, logger).
    #[error("Startup Error: {message} {location}")]
    Startup {
        message: String,
        location: ErrorLocation,
    },

    /// Error bubbled up from auth-core.
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Terminal I/O failure in the event loop.
    #[error("Io Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },
}

impl HackerdenError {
    #[track_caller]
    pub fn startup(message: impl Into<String>) -> Self {
        HackerdenError::Startup {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<auth_core::error::CoreError> for HackerdenError {
    #[track_caller]
    fn from(error: auth_core::error::CoreError) -> Self {
        HackerdenError::Core {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<std::io::Error> for HackerdenError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        HackerdenError::Io {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
