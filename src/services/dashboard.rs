//! Signed-in dashboard: favorites and account settings.

use serde::{Deserialize, Serialize};

use crate::http::{ApiClient, ApiError, ApiRequest};

use super::monuments::Monument;
use super::segment;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Preferred UI language (`en` / `ar`).
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub email_notifications: bool,
    #[serde(default)]
    pub newsletter: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteRef<'a> {
    monument_id: &'a str,
}

/// `GET /dashboard/favorites`.
///
/// # Errors
///
/// Pipeline or decode failure.
pub async fn favorites(client: &ApiClient) -> Result<Vec<Monument>, ApiError> {
    client.get_data("/dashboard/favorites").await
}

/// `POST /dashboard/favorites`.
///
/// # Errors
///
/// Pipeline failure.
pub async fn add_favorite(client: &ApiClient, monument_id: &str) -> Result<(), ApiError> {
    client
        .post("/dashboard/favorites", &FavoriteRef { monument_id })
        .await
        .map(|_| ())
}

/// `DELETE /dashboard/favorites/{id}`.
///
/// # Errors
///
/// Pipeline failure.
pub async fn remove_favorite(client: &ApiClient, monument_id: &str) -> Result<(), ApiError> {
    client
        .delete(&format!("/dashboard/favorites/{}", segment(monument_id)))
        .await
        .map(|_| ())
}

/// `GET /dashboard/settings`.
///
/// # Errors
///
/// Pipeline or decode failure.
pub async fn settings(client: &ApiClient) -> Result<Settings, ApiError> {
    client.get_data("/dashboard/settings").await
}

/// `PUT /dashboard/settings`, returning what the backend stored.
///
/// # Errors
///
/// Pipeline or decode failure.
pub async fn update_settings(client: &ApiClient, settings: &Settings) -> Result<Settings, ApiError> {
    client
        .send_data(ApiRequest::put("/dashboard/settings").json(settings)?)
        .await
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
