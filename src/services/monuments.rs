//! Monument listings.

use serde::{Deserialize, Serialize};

use crate::http::{ApiClient, ApiError, ApiRequest};

use super::{id_string, segment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monument {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub era: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: Option<f32>,
}

/// One page of a listing. Accepts `items`, `data`, or `results` as the list key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(alias = "data", alias = "results")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonumentQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl MonumentQuery {
    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("search", self.search.as_deref().filter(|s| !s.trim().is_empty()))
            .query_opt("category", self.category.as_deref())
            .query_opt("page", self.page)
            .query_opt("limit", self.limit)
    }
}

/// `GET /monuments`.
///
/// # Errors
///
/// Pipeline or decode failure.
pub async fn list(client: &ApiClient, query: &MonumentQuery) -> Result<Page<Monument>, ApiError> {
    client.send_data(query.apply(ApiRequest::get("/monuments"))).await
}

/// `GET /monuments/featured`.
///
/// # Errors
///
/// Pipeline or decode failure.
pub async fn featured(client: &ApiClient) -> Result<Vec<Monument>, ApiError> {
    client.get_data("/monuments/featured").await
}

/// `GET /monuments/{id}`.
///
/// # Errors
///
/// A 404 for unknown ids, or any other pipeline or decode failure.
pub async fn get(client: &ApiClient, id: &str) -> Result<Monument, ApiError> {
    client.get_data(&format!("/monuments/{}", segment(id))).await
}

#[cfg(test)]
#[path = "monuments_test.rs"]
mod tests;
