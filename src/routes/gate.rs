//! Locale + auth gate run in front of every page request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolves the locale from the first path segment, stamps `NEXT_LOCALE`
//! when it changed, and applies the coarse route guard:
//! - protected path without an `auth_token` cookie → `/<locale>/login?returnUrl=<path>`
//! - login path with an `auth_token` cookie → `/<locale>/dashboard`
//!
//! "Authenticated" means the cookie is present and non-empty. The token is
//! never validated here; the backend answers that with a 401 later.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::locale::{DEFAULT_LOCALE, LOCALE_COOKIE, Locale, split_locale};
use crate::state::AppState;
use crate::token::TOKEN_COOKIE;

pub const LOCALE_COOKIE_MAX_AGE: Duration = Duration::days(365);

/// Path prefixes that never pass through the gate.
const BYPASS_PREFIXES: [&str; 4] = ["/api", "/_next", "/static", "/healthz"];

/// Path segments the gate reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// Any path containing this segment requires the auth cookie.
    pub protected_segment: &'static str,
    /// `/<locale>/<login_segment>` bounces signed-in visitors.
    pub login_segment: &'static str,
    /// Where signed-in visitors are bounced to.
    pub landing_segment: &'static str,
}

impl GateConfig {
    #[must_use]
    pub fn login_path(&self, locale: Locale) -> String {
        format!("/{locale}/{}", self.login_segment)
    }

    #[must_use]
    pub fn landing_path(&self, locale: Locale) -> String {
        format!("/{locale}/{}", self.landing_segment)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self { protected_segment: "dashboard", login_segment: "login", landing_segment: "dashboard" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateAction {
    Pass,
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateDecision {
    pub locale: Locale,
    /// The stored locale cookie is missing or different.
    pub stamp_locale: bool,
    pub action: GateAction,
}

/// Static files, API proxies, and health checks skip the gate.
#[must_use]
pub fn is_bypassed(path: &str) -> bool {
    let prefixed = BYPASS_PREFIXES
        .iter()
        .any(|p| path == *p || path.strip_prefix(p).is_some_and(|rest| rest.starts_with('/')));
    let file_like = path
        .rsplit('/')
        .next()
        .is_some_and(|last| last.contains('.'));
    prefixed || file_like
}

/// Decide what to do with a request. Pure; never fails.
#[must_use]
pub fn evaluate(config: &GateConfig, path: &str, jar: &CookieJar) -> GateDecision {
    let (prefix, rest) = split_locale(path);
    let locale = prefix.unwrap_or(DEFAULT_LOCALE);
    let stamp_locale = jar.get(LOCALE_COOKIE).map(Cookie::value) != Some(locale.as_str());
    let authenticated = jar.get(TOKEN_COOKIE).is_some_and(|c| !c.value().is_empty());

    let protected = path.split('/').any(|s| s == config.protected_segment);
    let is_login = rest == [config.login_segment];

    let action = if protected && !authenticated {
        GateAction::Redirect(format!("{}?returnUrl={}", config.login_path(locale), urlencoding::encode(path)))
    } else if is_login && authenticated {
        GateAction::Redirect(config.landing_path(locale))
    } else {
        GateAction::Pass
    };

    GateDecision { locale, stamp_locale, action }
}

/// One-year root-path cookie remembering the visitor's locale.
#[must_use]
pub fn locale_cookie(locale: Locale) -> Cookie<'static> {
    Cookie::build((LOCALE_COOKIE, locale.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(LOCALE_COOKIE_MAX_AGE)
        .build()
}

/// Axum middleware applying [`evaluate`]. The resolved [`Locale`] is left in
/// the request extensions for handlers.
pub async fn locale_gate(State(state): State<AppState>, jar: CookieJar, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if is_bypassed(&path) {
        return next.run(request).await;
    }

    let decision = evaluate(&state.gate, &path, &jar);
    let jar = if decision.stamp_locale { jar.add(locale_cookie(decision.locale)) } else { jar };

    match decision.action {
        GateAction::Redirect(target) => {
            tracing::debug!(%path, %target, "gate redirect");
            (jar, Redirect::temporary(&target)).into_response()
        }
        GateAction::Pass => {
            request.extensions_mut().insert(decision.locale);
            let response = next.run(request).await;
            (jar, response).into_response()
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
