//! Backend API client: the single egress point for backend calls.
//!
//! DESIGN
//! ======
//! An `ApiClient` is built explicitly for one browser context: it owns that
//! context's token store and locale source, plus a shared [`Transport`].
//! Every call runs the request chain, the transport, then the response
//! chain. Nothing is retried, deduplicated, or replaced with fallback data:
//! the caller gets the transport's response or the original error.
//!
//! Calls are independent. Two concurrent calls are not ordered relative to
//! each other, and a 401 on either clears the shared token (idempotently).

pub mod interceptors;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use interceptors::{
    AcceptLanguage, BearerAuth, ClearTokenOnUnauthorized, RequestInterceptor, ResponseInterceptor, ResponseLog,
};
pub use transport::{ReqwestTransport, Transport};
pub use types::{ApiError, ApiRequest, ApiResponse, Envelope, ErrorClass};

use crate::storage::LocaleSource;
use crate::token::TokenStore;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    request_chain: Vec<Arc<dyn RequestInterceptor>>,
    response_chain: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Client with the default chains:
    /// request `[BearerAuth, AcceptLanguage]`,
    /// response `[ResponseLog, ClearTokenOnUnauthorized]`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>, locale: Arc<dyn LocaleSource>) -> Self {
        Self {
            transport,
            tokens: tokens.clone(),
            request_chain: vec![Arc::new(BearerAuth::new(tokens.clone())), Arc::new(AcceptLanguage::new(locale))],
            response_chain: vec![Arc::new(ResponseLog), Arc::new(ClearTokenOnUnauthorized::new(tokens))],
        }
    }

    /// Append a request interceptor; it runs after the existing ones.
    #[must_use]
    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_chain.push(Arc::new(interceptor));
        self
    }

    /// Append a response interceptor; it runs after the existing ones.
    #[must_use]
    pub fn with_response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_chain.push(Arc::new(interceptor));
        self
    }

    /// Token store this client authenticates with.
    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Run one request through the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns the original [`ApiError`] from whichever stage failed.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        tracing::debug!(method = %request.method, path = %request.path, "backend request");
        let prepared = self
            .request_chain
            .iter()
            .try_fold(request, |req, stage| stage.on_request(req));

        let outcome = match prepared {
            Ok(request) => self.transport.send(request).await,
            Err(err) => Err(err),
        };

        self.response_chain
            .iter()
            .fold(outcome, |acc, stage| stage.on_response(acc))
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::get(path)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`]; also fails if `body` cannot be serialized.
    pub async fn post(&self, path: &str, body: &impl Serialize) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::post(path).json(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn put(&self, path: &str, body: &impl Serialize) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::put(path).json(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::post`].
    pub async fn patch(&self, path: &str, body: &impl Serialize) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::patch(path).json(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::delete(path)).await
    }

    /// Send and decode the [`Envelope`] payload.
    ///
    /// # Errors
    ///
    /// Pipeline failures as in [`ApiClient::send`], or [`ApiError::Decode`].
    pub async fn send_data<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.send(request).await?.data()
    }

    /// # Errors
    ///
    /// See [`ApiClient::send_data`].
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_data(ApiRequest::get(path)).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
