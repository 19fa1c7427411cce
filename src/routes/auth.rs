//! Browser-facing auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns OAuth. It sends the visitor back here with a token in
//! the query string; this module stores it in the visitor's cookie jar and
//! verifies it with `GET /auth/me` before redirecting on. Logout posts to
//! the backend and drops the cookie regardless of the outcome.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::locale::Locale;
use crate::routes::gate::GateConfig;
use crate::services::auth as auth_svc;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackQuery {
    pub token: Option<String>,
    pub return_url: Option<String>,
    /// Set by the backend when the provider refused the sign-in.
    pub error: Option<String>,
}

/// Accept only same-origin absolute paths; anything else falls back to the
/// locale's landing page.
#[must_use]
pub fn safe_return_url(gate: &GateConfig, locale: Locale, raw: Option<&str>) -> String {
    match raw {
        Some(url) if url.starts_with('/') && !url.starts_with("//") && !url.contains('\\') => url.to_owned(),
        _ => gate.landing_path(locale),
    }
}

/// `GET /{locale}/auth/callback?token=..&returnUrl=..`
pub async fn oauth_callback(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    jar: CookieJar,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let locale = Locale::from_segment(Some(&segment));

    if let Some(error) = params.error.as_deref() {
        tracing::warn!(%error, "oauth provider refused sign-in");
        return Redirect::to(&state.gate.login_path(locale)).into_response();
    }
    let Some(token) = params.token.as_deref().filter(|t| !t.is_empty()) else {
        tracing::warn!("oauth callback without token");
        return Redirect::to(&state.gate.login_path(locale)).into_response();
    };

    let session = state.session(jar, locale);
    match auth_svc::complete_oauth(&session, token).await {
        Ok(_) => {
            let target = safe_return_url(&state.gate, locale, params.return_url.as_deref());
            (session.storage().jar(), Redirect::to(&target)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "oauth token rejected");
            (session.storage().jar(), Redirect::to(&state.gate.login_path(locale))).into_response()
        }
    }
}

/// `POST /{locale}/logout`
pub async fn logout(State(state): State<AppState>, Path(segment): Path<String>, jar: CookieJar) -> Response {
    let locale = Locale::from_segment(Some(&segment));
    let session = state.session(jar, locale);
    if let Err(e) = auth_svc::logout(&session).await {
        tracing::warn!(error = %e, "backend logout failed; local session cleared anyway");
    }
    (session.storage().jar(), Redirect::to(&state.gate.login_path(locale))).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
