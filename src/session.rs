//! Session token storage.
//!
//! The adapter reads the bearer token through an injected [`SessionStore`]
//! instead of ambient global state, so tests and the provisioning binaries
//! can carry their own session without touching shared storage.

use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Where the current bearer token lives between requests.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear(&self);
}

/// In-memory token holder.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> MemorySession {
        MemorySession::default()
    }

    pub fn with_token(token: impl Into<String>) -> MemorySession {
        MemorySession {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.lock().expect("session lock poisoned").clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.lock().expect("session lock poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().expect("session lock poisoned") = None;
    }
}

/// Token persisted as a single string in a file, the durable analogue of the
/// browser's local storage entry. Storage failures are logged and otherwise
/// behave as an absent token.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> FileSession {
        FileSession { path: path.into() }
    }
}

impl SessionStore for FileSession {
    fn token(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            }
            Err(_) => None,
        }
    }

    fn set_token(&self, token: &str) {
        if let Err(e) = std::fs::write(&self.path, token) {
            warn!(path = %self.path.display(), error = %e, "failed to persist session token");
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "failed to clear session token");
            }
        }
    }
}
