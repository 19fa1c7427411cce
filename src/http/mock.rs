//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use reqwest::StatusCode;

use crate::locale::Locale;
use crate::storage::BrowserStorage;
use crate::token::{CookieTokenStore, TokenStore};

use super::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};

pub struct MockTransport {
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new(replies: Vec<Result<ApiResponse, ApiError>>) -> Arc<Self> {
        Arc::new(Self { replies: Mutex::new(replies.into()), seen: Mutex::new(Vec::new()) })
    }

    pub fn ok(body: &str) -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse::new(StatusCode::OK, body))
    }

    pub fn status(code: u16, body: &str) -> Result<ApiResponse, ApiError> {
        Err(ApiError::from_status(StatusCode::from_u16(code).unwrap(), body.to_owned()))
    }

    pub fn seen(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.seen().pop().expect("no request reached the transport")
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network { url: "mock".into(), reason: "no scripted reply".into(), timed_out: false }))
    }

    fn base_url(&self) -> &str {
        "http://backend.test/api"
    }
}

/// A client over `transport` bound to a fresh browser context in `locale`.
pub fn client_with(transport: Arc<MockTransport>, locale: Locale) -> (ApiClient, Arc<BrowserStorage>, Arc<dyn TokenStore>) {
    let storage = Arc::new(BrowserStorage::new(false));
    let tokens: Arc<dyn TokenStore> = Arc::new(CookieTokenStore::new(storage.clone()));
    let client = ApiClient::new(transport, tokens.clone(), Arc::new(locale));
    (client, storage, tokens)
}
