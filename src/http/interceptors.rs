//! Request and response interceptors.
//!
//! DESIGN
//! ======
//! A request interceptor maps `ApiRequest -> Result<ApiRequest, ApiError>`;
//! a response interceptor maps the whole outcome
//! `Result<ApiResponse, ApiError> -> Result<ApiResponse, ApiError>`. The
//! client folds each chain in registration order. Built-in response
//! interceptors only observe: they log and fire side effects, then hand the
//! outcome on unchanged.

use std::sync::Arc;

use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, HeaderValue};

use crate::storage::LocaleSource;
use crate::token::TokenStore;

use super::types::{ApiError, ApiRequest, ApiResponse, ErrorClass};

pub trait RequestInterceptor: Send + Sync {
    /// # Errors
    ///
    /// A failure here means the request is never sent.
    fn on_request(&self, request: ApiRequest) -> Result<ApiRequest, ApiError>;
}

pub trait ResponseInterceptor: Send + Sync {
    /// # Errors
    ///
    /// Returns the (possibly same) failure to pass down the chain.
    fn on_response(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError>;
}

/// Closures work as request interceptors.
impl<F> RequestInterceptor for F
where
    F: Fn(ApiRequest) -> Result<ApiRequest, ApiError> + Send + Sync,
{
    fn on_request(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        self(request)
    }
}

// =============================================================================
// REQUEST SIDE
// =============================================================================

/// Sets `Authorization: Bearer <token>` whenever the store holds a token.
pub struct BearerAuth {
    tokens: Arc<dyn TokenStore>,
}

impl BearerAuth {
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, mut request: ApiRequest) -> Result<ApiRequest, ApiError> {
        let Some(token) = self.tokens.get() else {
            return Ok(request);
        };
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::Build("auth token is not a valid header value".into()))?;
        request.set_header(AUTHORIZATION, value);
        Ok(request)
    }
}

/// Sets `Accept-Language` to the active locale.
pub struct AcceptLanguage {
    locale: Arc<dyn LocaleSource>,
}

impl AcceptLanguage {
    #[must_use]
    pub fn new(locale: Arc<dyn LocaleSource>) -> Self {
        Self { locale }
    }
}

impl RequestInterceptor for AcceptLanguage {
    fn on_request(&self, mut request: ApiRequest) -> Result<ApiRequest, ApiError> {
        let locale = self.locale.current();
        request.set_header(ACCEPT_LANGUAGE, HeaderValue::from_static(locale.as_str()));
        Ok(request)
    }
}

// =============================================================================
// RESPONSE SIDE
// =============================================================================

/// Logs every outcome, with a distinct line per error class.
pub struct ResponseLog;

impl ResponseInterceptor for ResponseLog {
    fn on_response(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        match &outcome {
            Ok(response) => tracing::debug!(status = response.status.as_u16(), "backend response"),
            Err(err) => log_error(err),
        }
        outcome
    }
}

fn log_error(err: &ApiError) {
    match err {
        ApiError::Status { .. } => match err.class() {
            ErrorClass::Unauthorized => tracing::warn!("backend rejected credentials (401)"),
            ErrorClass::Forbidden => tracing::warn!("backend denied access (403)"),
            ErrorClass::NotFound => tracing::warn!("backend resource not found (404)"),
            ErrorClass::ServerError => tracing::error!(error = %err, "backend server error (500)"),
            _ => tracing::warn!(error = %err, "backend error response"),
        },
        ApiError::Network { url, timed_out, .. } => {
            tracing::error!(%url, timed_out, error = %err, "network error: no response from backend");
        }
        ApiError::Build(_) => tracing::error!(error = %err, "request failed before it was sent"),
        ApiError::Decode(_) => tracing::error!(error = %err, "backend response could not be decoded"),
    }
}

/// Drops the stored token when the backend answers 401. Does not navigate
/// anywhere: the caller still receives the rejection.
pub struct ClearTokenOnUnauthorized {
    tokens: Arc<dyn TokenStore>,
}

impl ClearTokenOnUnauthorized {
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self { tokens }
    }
}

impl ResponseInterceptor for ClearTokenOnUnauthorized {
    fn on_response(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        if let Err(err) = &outcome {
            if err.is_unauthorized() {
                self.tokens.clear();
            }
        }
        outcome
    }
}

#[cfg(test)]
#[path = "interceptors_test.rs"]
mod tests;
