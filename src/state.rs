//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one pooled backend transport; per-visitor state (cookies, the
//! token, the signed-in user) is rebuilt for each request as a [`Session`].

use std::sync::Arc;

use axum_extra::extract::cookie::CookieJar;

use crate::http::Transport;
use crate::locale::{LOCALE_STORAGE_KEY, Locale};
use crate::routes::gate::GateConfig;
use crate::session::Session;
use crate::storage::BrowserStorage;

/// Clone is required by Axum: every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn Transport>,
    pub cookie_secure: bool,
    pub gate: GateConfig,
}

impl AppState {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, cookie_secure: bool) -> Self {
        Self { transport, cookie_secure, gate: GateConfig::default() }
    }

    /// Browser context for one request, seeded from its cookies and the
    /// locale resolved from its path.
    #[must_use]
    pub fn session(&self, jar: CookieJar, locale: Locale) -> Session {
        let storage = Arc::new(BrowserStorage::from_jar(jar, self.cookie_secure));
        storage.set_local_item(LOCALE_STORAGE_KEY, locale.as_str());
        Session::new(self.transport.clone(), storage)
    }
}
