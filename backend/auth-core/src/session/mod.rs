//! Session token persistence.
//!
//! The token is an opaque credential issued by the API on login. The store
//! owns it exclusively: no other component inspects its contents, and there
//! is no expiry tracking or shape validation.

use crate::error::session::SessionError;

use common::{ErrorLocation, RedactedSecret};

use std::path::PathBuf;
use std::sync::Mutex;

use log::info;

/// File holding the persisted token under the data directory.
const TOKEN_FILE_NAME: &str = "session_token";

/// Opaque session credential issued by the API on successful login.
#[derive(Clone)]
pub struct SessionToken {
    inner: RedactedSecret,
}

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: RedactedSecret::new(token),
        }
    }

    /// The raw token value, for persistence or an Authorization header.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Token length (safe to log).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken([REDACTED])")
    }
}

/// Persistent storage for the session token.
///
/// Injected into the app so tests can substitute an in-memory double.
pub trait SessionStore: Send + Sync {
    /// Persist the token, replacing any previous one.
    fn save(&self, token: &SessionToken) -> Result<(), SessionError>;

    /// Load the persisted token, if any.
    fn load(&self) -> Result<Option<SessionToken>, SessionError>;

    /// Remove the persisted token. Removing an absent token is not an error.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Token store backed by a file in the per-user data directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: data_dir.into(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE_NAME)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &SessionToken) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| SessionError::WriteError {
            location: ErrorLocation::caller(),
            path: self.dir.clone(),
            source: e,
        })?;

        let token_path = self.token_path();
        let temp_path = self.dir.join(format!("{}.tmp", TOKEN_FILE_NAME));

        // Temp file + rename so a crash cannot leave a truncated token.
        std::fs::write(&temp_path, token.as_str()).map_err(|e| SessionError::WriteError {
            location: ErrorLocation::caller(),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &token_path).map_err(|e| SessionError::WriteError {
            location: ErrorLocation::caller(),
            path: token_path,
            source: e,
        })?;

        info!("Session token saved ({} chars)", token.len());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionToken>, SessionError> {
        let token_path = self.token_path();

        if !token_path.exists() {
            return Ok(None);
        }

        let contents =
            std::fs::read_to_string(&token_path).map_err(|e| SessionError::ReadError {
                location: ErrorLocation::caller(),
                path: token_path.clone(),
                source: e,
            })?;

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            // An empty file counts as no session.
            return Ok(None);
        }

        Ok(Some(SessionToken::new(trimmed)))
    }

    fn clear(&self) -> Result<(), SessionError> {
        let token_path = self.token_path();

        match std::fs::remove_file(&token_path) {
            Ok(()) => {
                info!("Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::RemoveError {
                location: ErrorLocation::caller(),
                path: token_path,
                source: e,
            }),
        }
    }
}

/// In-memory store: the test double, also usable for ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &SessionToken) -> Result<(), SessionError> {
        *self.slot() = Some(token.as_str().to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionToken>, SessionError> {
        Ok(self.slot().as_deref().map(SessionToken::new))
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot() = None;
        Ok(())
    }
}
