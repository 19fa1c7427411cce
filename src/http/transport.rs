//! Network seam between the interceptor chain and the wire.

use std::sync::Arc;

use crate::config::ApiConfig;

use super::types::{ApiError, ApiRequest, ApiResponse};

/// Sends one fully intercepted request. Non-success statuses come back as
/// [`ApiError::Status`] so every failure travels the same error path.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;

    /// Base URL requests are resolved against.
    fn base_url(&self) -> &str;
}

/// Production transport over a pooled `reqwest::Client`.
///
/// One instance is shared by every browser context in the process.
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    /// Shared handle for [`super::ApiClient`] construction.
    ///
    /// # Errors
    ///
    /// See [`ReqwestTransport::new`].
    pub fn shared(config: &ApiConfig) -> Result<Arc<dyn Transport>, ApiError> {
        Ok(Arc::new(Self::new(config)?))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url(&self.base_url);
        let mut builder = self
            .http
            .request(request.method, &url)
            .headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| classify_send_error(&url, &e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| ApiError::Network {
            url: url.clone(),
            reason: e.to_string(),
            timed_out: e.is_timeout(),
        })?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, body));
        }
        Ok(ApiResponse { status, headers, body })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn classify_send_error(url: &str, err: &reqwest::Error) -> ApiError {
    if err.is_builder() {
        return ApiError::Build(err.to_string());
    }
    ApiError::Network { url: url.to_owned(), reason: err.to_string(), timed_out: err.is_timeout() }
}
