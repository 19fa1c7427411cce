//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request passes the locale gate first (static assets and health
//! checks skip it inside the middleware). The only server-side endpoints
//! are the OAuth callback and logout; everything else is the page shell.

pub mod auth;
pub mod gate;
pub mod pages;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState, public_dir: PathBuf) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/{locale}/auth/callback", get(auth::oauth_callback))
        .route("/{locale}/logout", post(auth::logout))
        .nest_service("/static", ServeDir::new(public_dir))
        .fallback(pages::shell)
        .layer(middleware::from_fn_with_state(state.clone(), gate::locale_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
