//! Auth token store.
//!
//! LIFECYCLE
//! =========
//! `Absent → Present` on a successful login, registration, or OAuth callback.
//! `Present → Absent` on logout, a 401 from the backend, or a manual clear.
//! There is no refreshing state. Presence is the only thing this module
//! knows about a token: validity belongs to the backend.

use std::sync::Arc;

use time::Duration;

use crate::storage::BrowserStorage;

pub const TOKEN_COOKIE: &str = "auth_token";

/// Local-storage key of the backup copy.
pub const TOKEN_BACKUP_KEY: &str = "auth_token";

pub const TOKEN_COOKIE_TTL: Duration = Duration::minutes(15);

pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    /// Presence check only. Never a validity check.
    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

/// Cookie-backed token store bound to one browser context.
///
/// A detached store (no browser context) reads as absent and ignores writes.
#[derive(Clone)]
pub struct CookieTokenStore {
    storage: Option<Arc<BrowserStorage>>,
}

impl CookieTokenStore {
    #[must_use]
    pub fn new(storage: Arc<BrowserStorage>) -> Self {
        Self { storage: Some(storage) }
    }

    #[must_use]
    pub fn detached() -> Self {
        Self { storage: None }
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        let storage = self.storage.as_ref()?;
        storage.cookie(TOKEN_COOKIE).filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        storage.set_cookie(TOKEN_COOKIE, token, TOKEN_COOKIE_TTL);
        storage.set_local_item(TOKEN_BACKUP_KEY, token);
        tracing::debug!("auth token stored");
    }

    fn clear(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        storage.remove_cookie(TOKEN_COOKIE);
        storage.remove_local_item(TOKEN_BACKUP_KEY);
        tracing::debug!("auth token cleared");
    }
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
