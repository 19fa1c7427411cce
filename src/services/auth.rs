//! Auth service: email login/registration, OAuth completion, logout.
//!
//! Every successful flow ends in [`Session::begin`], which is the only place
//! a token enters the store. Logout clears the token whatever the backend
//! answers.

use serde::{Deserialize, Serialize};

use crate::http::{ApiClient, ApiError, ApiRequest};
use crate::session::Session;

use super::id_string;

/// Client-side projection of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(alias = "displayName", alias = "username")]
    pub name: String,
    pub email: String,
    #[serde(default, alias = "avatarUrl")]
    pub avatar: Option<String>,
    /// `local`, `google`, `facebook`, ... as reported by the backend.
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub joined_at: Option<String>,
}

/// What login, registration, and OAuth exchanges return.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    #[serde(alias = "accessToken")]
    pub token: String,
    pub user: AuthenticatedUser,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "google" => Some(Self::Google),
            "facebook" => Some(Self::Facebook),
            _ => None,
        }
    }
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend rejection (e.g. 401 for bad credentials) unchanged.
pub async fn login(session: &Session, email: &str, password: &str) -> Result<AuthenticatedUser, ApiError> {
    let request = ApiRequest::post("/auth/login").json(&Credentials { email, password })?;
    let payload: AuthPayload = session.client().send_data(request).await?;
    Ok(session.begin(payload).await)
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend rejection (validation, duplicate email) unchanged.
pub async fn register(session: &Session, registration: &Registration) -> Result<AuthenticatedUser, ApiError> {
    let request = ApiRequest::post("/auth/register").json(registration)?;
    let payload: AuthPayload = session.client().send_data(request).await?;
    Ok(session.begin(payload).await)
}

/// Backend URL that starts the OAuth dance for `provider`.
#[must_use]
pub fn oauth_url(client: &ApiClient, provider: OAuthProvider) -> String {
    format!("{}/auth/{}", client.base_url(), provider.as_str())
}

/// Finish an OAuth callback: keep the token the backend handed out and load
/// the user it belongs to. Any failure leaves the store empty.
///
/// # Errors
///
/// Returns the error from `GET /auth/me`.
pub async fn complete_oauth(session: &Session, token: &str) -> Result<AuthenticatedUser, ApiError> {
    session.tokens().set(token);
    match current_user(session).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "oauth sign-in completed");
            Ok(user)
        }
        Err(err) => {
            session.end().await;
            Err(err)
        }
    }
}

/// `GET /auth/me`, remembering the result on the session.
///
/// # Errors
///
/// Returns the backend rejection unchanged; a 401 has already cleared the
/// token by the time the caller sees it.
pub async fn current_user(session: &Session) -> Result<AuthenticatedUser, ApiError> {
    let user: AuthenticatedUser = session.client().get_data("/auth/me").await?;
    session.remember(user.clone()).await;
    Ok(user)
}

/// `POST /auth/logout`. The local session ends even if the call fails.
///
/// # Errors
///
/// Returns the backend failure after the session has been cleared.
pub async fn logout(session: &Session) -> Result<(), ApiError> {
    let result = session.client().send(ApiRequest::post("/auth/logout")).await;
    session.end().await;
    result.map(|_| ())
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
