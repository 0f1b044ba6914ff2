//! Credential handling with redacted Debug output.
//!
//! Passwords and session tokens travel through the client wrapped in
//! [`RedactedSecret`] so they cannot end up in logs or serialized payloads
//! by accident.

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// A credential value that never exposes itself in logs or debug output.
///
/// The inner string is zeroized when the wrapper is dropped.
#[derive(Clone)]
pub struct RedactedSecret {
    inner: String,
}

impl RedactedSecret {
    /// Wrap a credential value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: secret.into(),
        }
    }

    /// Get the actual value for transmission or persistence.
    ///
    /// # Security Note
    /// Only call this at the point the value leaves the process
    /// (request body, token file).
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Length of the value (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the value is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for RedactedSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl fmt::Debug for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedSecret([REDACTED])")
    }
}

impl fmt::Display for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for RedactedSecret {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Prevent accidental serialization
impl serde::Serialize for RedactedSecret {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from(
                "RedactedSecret cannot be serialized - use as_str() explicitly",
            ),
            location: ErrorLocation::caller(),
        }))
    }
}
