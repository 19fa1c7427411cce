//! Saved searches of the signed-in user.

use serde::{Deserialize, Serialize};

use crate::http::{ApiClient, ApiError, ApiRequest};

use super::{id_string, segment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    #[serde(alias = "_id", deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    pub query: String,
    /// Free-form filter set, owned by the backend.
    #[serde(default)]
    pub filters: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSavedSearch {
    pub name: String,
    pub query: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub filters: serde_json::Value,
}

/// `GET /saved-searches`.
///
/// # Errors
///
/// Pipeline or decode failure.
pub async fn list(client: &ApiClient) -> Result<Vec<SavedSearch>, ApiError> {
    client.get_data("/saved-searches").await
}

/// `POST /saved-searches`, returning the stored record.
///
/// # Errors
///
/// Pipeline or decode failure.
pub async fn create(client: &ApiClient, search: &NewSavedSearch) -> Result<SavedSearch, ApiError> {
    client
        .send_data(ApiRequest::post("/saved-searches").json(search)?)
        .await
}

/// `DELETE /saved-searches/{id}`.
///
/// # Errors
///
/// Pipeline failure.
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client
        .delete(&format!("/saved-searches/{}", segment(id)))
        .await
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::{MockTransport, client_with};
    use crate::locale::Locale;

    #[tokio::test]
    async fn create_list_delete() {
        let record = r#"{"data":{"_id":"s1","name":"Temples","query":"temple","filters":{"era":"new-kingdom"}}}"#;
        let transport = MockTransport::new(vec![
            MockTransport::ok(record),
            MockTransport::ok(r#"[{"_id":"s1","name":"Temples","query":"temple","filters":{"era":"new-kingdom"}}]"#),
            MockTransport::ok(""),
        ]);
        let (client, _, _) = client_with(transport.clone(), Locale::En);
        let new = NewSavedSearch { name: "Temples".into(), query: "temple".into(), filters: serde_json::Value::Null };

        let saved = create(&client, &new).await.unwrap();
        assert_eq!(saved.id, "s1");
        assert_eq!(saved.filters["era"], "new-kingdom");

        let all = list(&client).await.unwrap();
        assert_eq!(all, vec![saved]);

        delete(&client, "s1").await.unwrap();
        let seen = transport.seen();
        assert_eq!(seen[0].body, Some(serde_json::json!({ "name": "Temples", "query": "temple" })));
        assert_eq!(seen[2].path, "/saved-searches/s1");
    }
}
