//! Per-visitor session: the API client plus the signed-in user projection.
//!
//! DESIGN
//! ======
//! One `Session` per browser context, built explicitly and handed to the
//! services that need it. The user is held in memory only; the token in the
//! context's cookie is the sole thing that outlives it.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::http::{ApiClient, Transport};
use crate::services::auth::{AuthPayload, AuthenticatedUser};
use crate::storage::BrowserStorage;
use crate::token::{CookieTokenStore, TokenStore};

pub struct Session {
    client: ApiClient,
    storage: Arc<BrowserStorage>,
    user: RwLock<Option<AuthenticatedUser>>,
}

impl Session {
    /// Session over `storage`, with the default interceptor chains.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, storage: Arc<BrowserStorage>) -> Self {
        let tokens: Arc<dyn TokenStore> = Arc::new(CookieTokenStore::new(storage.clone()));
        let client = ApiClient::new(transport, tokens, storage.clone());
        Self::with_client(client, storage)
    }

    /// Session over a client that was configured elsewhere.
    #[must_use]
    pub fn with_client(client: ApiClient, storage: Arc<BrowserStorage>) -> Self {
        Self { client, storage, user: RwLock::new(None) }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<BrowserStorage> {
        &self.storage
    }

    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        self.client.tokens()
    }

    pub async fn user(&self) -> Option<AuthenticatedUser> {
        self.user.read().await.clone()
    }

    /// Store the token and remember the user of a completed auth flow.
    pub async fn begin(&self, payload: AuthPayload) -> AuthenticatedUser {
        self.tokens().set(&payload.token);
        self.remember(payload.user.clone()).await;
        tracing::info!(user_id = %payload.user.id, "session started");
        payload.user
    }

    pub(crate) async fn remember(&self, user: AuthenticatedUser) {
        *self.user.write().await = Some(user);
    }

    /// Drop the token and the user projection.
    pub async fn end(&self) {
        self.tokens().clear();
        *self.user.write().await = None;
    }
}
