//! Browser context: the cookie jar and local storage of one visitor.
//!
//! DESIGN
//! ======
//! The token store and the locale accessor both read "browser storage". On
//! the server that storage is reconstructed per request from the `Cookie`
//! header, mutated by whatever the request does, and written back as the
//! `Set-Cookie` delta of the axum-extra `CookieJar`. The local-storage half
//! only lives as long as the context itself.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

use crate::locale::{LOCALE_COOKIE, LOCALE_STORAGE_KEY, Locale};

/// Anything that can answer "which locale is active right now".
pub trait LocaleSource: Send + Sync {
    fn current(&self) -> Locale;
}

/// A fixed locale, for contexts that already resolved it.
impl LocaleSource for Locale {
    fn current(&self) -> Locale {
        *self
    }
}

pub struct BrowserStorage {
    cookies: Mutex<CookieJar>,
    local: Mutex<HashMap<String, String>>,
    secure: bool,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(secure: bool) -> Self {
        Self::from_jar(CookieJar::new(), secure)
    }

    /// Seed the context from cookies the browser sent with a request.
    #[must_use]
    pub fn from_jar(jar: CookieJar, secure: bool) -> Self {
        Self { cookies: Mutex::new(jar), local: Mutex::new(HashMap::new()), secure }
    }

    /// Current jar. Returned from a handler it emits only the cookies that
    /// changed since the context was created.
    #[must_use]
    pub fn jar(&self) -> CookieJar {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Cookie value, or `None` when missing or past its `Expires` instant.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<String> {
        let jar = self.cookies.lock().unwrap_or_else(PoisonError::into_inner);
        let cookie = jar.get(name)?;
        if cookie
            .expires_datetime()
            .is_some_and(|at| at <= OffsetDateTime::now_utc())
        {
            return None;
        }
        Some(cookie.value().to_owned())
    }

    /// Write a root-path `SameSite=Lax` cookie that expires after `ttl`.
    pub fn set_cookie(&self, name: &'static str, value: &str, ttl: Duration) {
        let cookie = Cookie::build((name, value.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(ttl)
            .expires(OffsetDateTime::now_utc() + ttl);
        let mut jar = self.cookies.lock().unwrap_or_else(PoisonError::into_inner);
        *jar = jar.clone().add(cookie);
    }

    pub fn remove_cookie(&self, name: &'static str) {
        let mut jar = self.cookies.lock().unwrap_or_else(PoisonError::into_inner);
        *jar = jar.clone().remove(Cookie::build(name).path("/"));
    }

    #[must_use]
    pub fn local_item(&self, key: &str) -> Option<String> {
        self.local
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn set_local_item(&self, key: &str, value: &str) {
        self.local
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    pub fn remove_local_item(&self, key: &str) {
        self.local
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Local storage first, then the locale cookie, then the default. Invalid
/// stored values are ignored rather than trusted.
impl LocaleSource for BrowserStorage {
    fn current(&self) -> Locale {
        self.local_item(LOCALE_STORAGE_KEY)
            .as_deref()
            .and_then(Locale::parse)
            .or_else(|| self.cookie(LOCALE_COOKIE).as_deref().and_then(Locale::parse))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
