//! Typed request/response pair flowing through the interceptor chain.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Failure of a backend call. Interceptors may observe it and trigger side
/// effects, but the value reaching the caller is the original one.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status { status: StatusCode, message: String, body: String },

    /// The request went out but no response came back.
    #[error("no response from {url}: {reason}")]
    Network { url: String, reason: String, timed_out: bool },

    /// The request was never sent.
    #[error("request not sent: {0}")]
    Build(String),

    /// A response arrived but its body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Coarse outcome class used for logging and side-effect dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    OtherStatus(u16),
    Network,
    NotSent,
    Decode,
}

impl ApiError {
    /// Build a status error, pulling a message out of the
    /// `{ "error": { "message": ... } }` envelope when the body has one.
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let message = ErrorEnvelope::message_from(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_owned());
        Self::Status { status, message, body }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Status { status, .. } => match status.as_u16() {
                401 => ErrorClass::Unauthorized,
                403 => ErrorClass::Forbidden,
                404 => ErrorClass::NotFound,
                500 => ErrorClass::ServerError,
                other => ErrorClass::OtherStatus(other),
            },
            Self::Network { .. } => ErrorClass::Network,
            Self::Build(_) => ErrorClass::NotSent,
            Self::Decode(_) => ErrorClass::Decode,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ErrorEnvelope {
    fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|e| e.error.message)
            .filter(|m| !m.trim().is_empty())
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Success payload as the backend ships it: either wrapped in `data` or bare.
///
/// Resolved once at the boundary so callers never probe the shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped {
        data: T,
        #[serde(default)]
        message: Option<String>,
    },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        match self {
            Self::Wrapped { data, .. } | Self::Bare(data) => data,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Wrapped { message, .. } => message.as_deref(),
            Self::Bare(_) => None,
        }
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// An outbound call, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), headers: HeaderMap::new(), body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present.
    #[must_use]
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if the value cannot be serialized.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Build(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    #[must_use]
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Full URL against `base_url` (which must not end in `/`).
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        if self.path.starts_with('/') {
            format!("{base_url}{}", self.path)
        } else {
            format!("{base_url}/{}", self.path)
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, headers: HeaderMap::new(), body: body.into() }
    }

    /// Decode the raw body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Decode the body as an [`Envelope`] and unwrap its payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if neither envelope shape matches.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.json::<Envelope<T>>().map(Envelope::into_data)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
